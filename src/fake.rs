use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use zbus::{dbus_interface, Connection};

use crate::bus::BusEndpoint;
use crate::error::{Error, Result};
use crate::{MPRIS2_INTERFACE, MPRIS2_PATH};

/// Where the simulator's verbose lines go. Disabled unless asked for.
#[derive(Clone, Default)]
pub struct Diagnostics {
    sink: Option<Arc<Mutex<Box<dyn Write + Send>>>>,
}

impl Diagnostics {
    /// Drops every line.
    pub fn disabled() -> Self {
        Diagnostics { sink: None }
    }

    /// Writes lines to standard output.
    pub fn stdout() -> Self {
        Diagnostics::to(io::stdout())
    }

    /// Writes lines to `writer`.
    pub fn to<W: Write + Send + 'static>(writer: W) -> Self {
        Diagnostics {
            sink: Some(Arc::new(Mutex::new(Box::new(writer)))),
        }
    }

    /// Returns `true` if lines are written anywhere.
    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    fn emit(&self, message: &str) {
        let sink = match &self.sink {
            Some(sink) => sink,
            None => return,
        };
        match sink.lock() {
            Ok(mut out) => {
                if let Err(error) = writeln!(out, "{}", message).and_then(|_| out.flush()) {
                    log::warn!("Could not write diagnostic: {}", error);
                }
            }
            Err(_) => log::warn!("Diagnostic sink is poisoned, dropping {:?}", message),
        }
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

/// A pretend media player: the smallest `org.mpris.MediaPlayer2` object a client can discover.
///
/// It only has the read-only `Identity` property. Introspection and the standard
/// `org.freedesktop.DBus.Properties` calls are answered by the zbus object server.
#[derive(Debug, Clone)]
pub struct FakePlayer {
    identity: String,
    diagnostics: Diagnostics,
}

impl FakePlayer {
    /// Creates a player reporting `identity`.
    ///
    /// With `verbose` every read of `Identity` is announced on standard output.
    pub fn new<S: Into<String>>(identity: S, verbose: bool) -> Self {
        let diagnostics = if verbose {
            Diagnostics::stdout()
        } else {
            Diagnostics::disabled()
        };
        FakePlayer::with_diagnostics(identity, diagnostics)
    }

    /// Creates a player reporting `identity` that announces reads through `diagnostics`.
    pub fn with_diagnostics<S: Into<String>>(identity: S, diagnostics: Diagnostics) -> Self {
        FakePlayer {
            identity: identity.into(),
            diagnostics,
        }
    }

    /// The identity this player reports.
    pub fn identity(&self) -> &str {
        &self.identity
    }
}

#[dbus_interface(name = "org.mpris.MediaPlayer2")]
impl FakePlayer {
    #[dbus_interface(property, name = "Identity")]
    fn read_identity(&self) -> String {
        log::debug!("Identity read, answering {:?}", self.identity);
        self.diagnostics.emit("\"Identity\" property read.");
        self.identity.clone()
    }
}

/// Exports `player` at `/org/mpris/MediaPlayer2` on an existing connection.
pub async fn register(connection: &Connection, player: FakePlayer) -> Result<()> {
    let diagnostics = player.diagnostics.clone();
    connection.object_server().at(MPRIS2_PATH, player).await?;
    diagnostics.emit("Registered object to the message bus.");
    Ok(())
}

/// Connects to `endpoint`, claims `name` and registers `player`.
///
/// The returned connection keeps serving calls in the background for as long as it is alive.
pub async fn serve(endpoint: &BusEndpoint, name: &str, player: FakePlayer) -> Result<Connection> {
    let connection = endpoint.connect().await?;
    log::debug!("Connected to the {}", endpoint);

    connection
        .request_name(name)
        .await
        .map_err(|source| Error::NameClaim {
            name: name.to_owned(),
            source,
        })?;
    log::info!(
        "Claimed {} on the {}, serving {} as {:?}",
        name,
        endpoint,
        MPRIS2_INTERFACE,
        player.identity()
    );

    register(&connection, player).await?;
    Ok(connection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn it_answers_with_the_configured_identity() {
        let player = FakePlayer::new("Test Player", false);
        assert_eq!(player.read_identity(), "Test Player");
        assert_eq!(player.read_identity(), "Test Player");
        assert_eq!(player.identity(), "Test Player");
    }

    #[test]
    fn it_announces_every_read_when_verbose() {
        let buffer = SharedBuffer::default();
        let player =
            FakePlayer::with_diagnostics("Fake Player", Diagnostics::to(buffer.clone()));

        assert_eq!(player.read_identity(), "Fake Player");
        assert_eq!(buffer.contents(), "\"Identity\" property read.\n");

        assert_eq!(player.read_identity(), "Fake Player");
        assert_eq!(
            buffer.contents(),
            "\"Identity\" property read.\n\"Identity\" property read.\n"
        );
    }

    #[test]
    fn it_stays_quiet_when_disabled() {
        let player = FakePlayer::with_diagnostics("Fake Player", Diagnostics::disabled());
        assert_eq!(player.read_identity(), "Fake Player");
        assert!(!player.diagnostics.is_enabled());
    }

    #[test]
    fn it_picks_diagnostics_from_verbosity() {
        assert!(FakePlayer::new("Fake Player", true).diagnostics.is_enabled());
        assert!(!FakePlayer::new("Fake Player", false).diagnostics.is_enabled());
    }
}
