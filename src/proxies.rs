use zbus::dbus_proxy;

#[dbus_proxy(
    interface = "org.freedesktop.DBus",
    default_service = "org.freedesktop.DBus",
    default_path = "/org/freedesktop/DBus"
)]
pub(crate) trait DBus {
    fn list_names(&self) -> zbus::Result<Vec<String>>;
}

// No default service: every player lives on its own bus name.
#[dbus_proxy(interface = "org.mpris.MediaPlayer2", default_path = "/org/mpris/MediaPlayer2")]
pub(crate) trait MediaPlayer2 {
    #[dbus_proxy(property)]
    fn identity(&self) -> zbus::Result<String>;
}
