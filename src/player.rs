use std::fmt;
use std::io::Write;

use termion::style;
use zbus::{CacheProperties, Connection};

use crate::error::Result;
use crate::proxies::MediaPlayer2Proxy;
use crate::{MPRIS2_PATH, UNKNOWN_IDENTITY};

/// A MPRIS-compatible player found on the bus.
///
/// Holds the player's well-known bus name and a handle to its `/org/mpris/MediaPlayer2` object.
/// Creating a `Player` does not talk to the player; every read goes over the bus.
///
/// **See:** [MPRIS2 MediaPlayer2 Specification][spec]
/// [spec]: <https://specifications.freedesktop.org/mpris-spec/latest/Media_Player.html>
pub struct Player {
    bus_name: String,
    proxy: MediaPlayer2Proxy<'static>,
}

impl Player {
    /// Create a `Player` for the given bus name on a connection.
    pub async fn new(connection: &Connection, bus_name: String) -> Result<Player> {
        let proxy = MediaPlayer2Proxy::builder(connection)
            .destination(bus_name.clone())?
            .path(MPRIS2_PATH)?
            .cache_properties(CacheProperties::No)
            .build()
            .await?;

        Ok(Player { bus_name, proxy })
    }

    /// Returns the player's D-Bus bus name, like `org.mpris.MediaPlayer2.vlc`.
    pub fn bus_name(&self) -> &str {
        &self.bus_name
    }

    /// Reads the player's MPRIS `Identity`.
    ///
    /// This is usually the application's name, like `Spotify`.
    pub async fn identity(&self) -> Result<String> {
        Ok(self.proxy.identity().await?)
    }

    /// Reads the player's `Identity`, or returns `"Unknown"` if it could not be read for any
    /// reason.
    pub async fn identity_or_unknown(&self) -> String {
        match self.identity().await {
            Ok(identity) => identity,
            Err(error) => {
                log::debug!("Could not read identity of {}: {}", self.bus_name, error);
                String::from(UNKNOWN_IDENTITY)
            }
        }
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Player")
            .field("bus_name", &self.bus_name)
            .finish()
    }
}

/// Writes one `format_player_line` line per player to `out`, in the order given.
///
/// A player whose `Identity` cannot be read is written as `Unknown` and the remaining players are
/// still written. Only a failure to write aborts.
pub async fn write_players<W: Write>(players: &[Player], color: bool, out: &mut W) -> Result<()> {
    for player in players {
        let identity = player.identity_or_unknown().await;
        writeln!(
            out,
            "{}",
            format_player_line(&identity, player.bus_name(), color)
        )?;
    }
    Ok(())
}

/// Formats one output line of `lsmpris`: `<identity> (<bus name>)`.
///
/// With `color` the identity is printed in bold; the rest of the line is left alone.
pub fn format_player_line(identity: &str, bus_name: &str, color: bool) -> String {
    if color {
        format!("{}{}{} ({})", style::Bold, identity, style::Reset, bus_name)
    } else {
        format!("{} ({})", identity, bus_name)
    }
}
