use zbus::Connection;

use crate::error::Result;
use crate::player::Player;
use crate::proxies::DBusProxy;
use crate::MPRIS2_PREFIX;

/// Used to find `Player`s running on a D-Bus connection.
#[derive(Debug)]
pub struct PlayerFinder {
    connection: Connection,
}

impl PlayerFinder {
    /// Create a new `PlayerFinder` with the given connection.
    pub fn for_connection(connection: Connection) -> Self {
        PlayerFinder { connection }
    }

    /// Find all players currently on the bus, in the order the bus daemon lists their names.
    ///
    /// Only the name listing talks to the bus; the returned `Player`s do not contact their player
    /// until something is read from them. A failing listing is returned as an error and nothing
    /// is found.
    pub async fn find_all(&self) -> Result<Vec<Player>> {
        let mut players = Vec::new();
        for bus_name in self.all_player_buses().await? {
            players.push(Player::new(&self.connection, bus_name).await?);
        }
        Ok(players)
    }

    async fn all_player_buses(&self) -> Result<Vec<String>> {
        let dbus = DBusProxy::new(&self.connection).await?;
        let names = dbus.list_names().await?;
        log::debug!("Bus lists {} names", names.len());

        Ok(filter_player_names(names))
    }
}

/// Keeps the names that belong to MPRIS2 players, without reordering or deduplicating them.
pub fn filter_player_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .filter(|name| name.starts_with(MPRIS2_PREFIX))
        .collect()
}
