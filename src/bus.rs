use std::fmt;

use zbus::{Connection, ConnectionBuilder};

use crate::error::{Error, Result};

/// Command line options selecting the message bus. Flatten this into a program's options.
///
/// At most one of the three may be given; none means the session bus. An empty address counts as
/// not given.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct BusArgs {
    /// uses the system message bus
    #[clap(long)]
    pub system: bool,

    /// uses the session message bus (this is the default)
    #[clap(long)]
    pub session: bool,

    /// uses the message bus accessible via the provided address
    #[clap(long, value_name = "ADDRESS")]
    pub bus: Option<String>,
}

/// The message bus a program talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusEndpoint {
    /// The per-login session bus.
    Session,
    /// The machine-wide system bus.
    System,
    /// A bus reachable through an explicit D-Bus address, like `unix:path=/tmp/bus`.
    Address(String),
}

impl BusArgs {
    /// Resolves the flags into a single endpoint.
    ///
    /// Fails with `Error::Configuration` if more than one bus was asked for.
    pub fn endpoint(&self) -> Result<BusEndpoint> {
        let address = self.bus.as_deref().filter(|address| !address.is_empty());
        let selected = [self.session, self.system, address.is_some()]
            .iter()
            .filter(|&&set| set)
            .count();
        if selected > 1 {
            return Err(Error::Configuration(String::from(
                "Must specify only one message bus.",
            )));
        }

        Ok(match (self.system, address) {
            (true, _) => BusEndpoint::System,
            (false, Some(address)) => BusEndpoint::Address(address.to_owned()),
            (false, None) => BusEndpoint::Session,
        })
    }
}

impl BusEndpoint {
    /// Opens a new connection to this bus.
    pub async fn connect(&self) -> Result<Connection> {
        log::debug!("Connecting to the {}", self);
        self.builder()?.build().await.map_err(Error::Connection)
    }

    fn builder(&self) -> Result<ConnectionBuilder<'static>> {
        let builder = match self {
            BusEndpoint::Session => ConnectionBuilder::session(),
            BusEndpoint::System => ConnectionBuilder::system(),
            BusEndpoint::Address(address) => ConnectionBuilder::address(address.as_str()),
        };
        builder.map_err(Error::Connection)
    }
}

impl fmt::Display for BusEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BusEndpoint::Session => f.write_str("session bus"),
            BusEndpoint::System => f.write_str("system bus"),
            BusEndpoint::Address(address) => write!(f, "bus at {}", address),
        }
    }
}
