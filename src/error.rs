use std::process::ExitCode;

/// Everything that can stop one of the tools.
///
/// Only the per-player `Identity` read is ever recovered from (see `Player::identity_or_unknown`);
/// every other failure ends up in `report` and terminates the process.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Command line options contradict each other.
    #[error("{0}")]
    Configuration(String),

    /// The selected bus could not be reached.
    #[error("{0}")]
    Connection(#[source] zbus::Error),

    /// The requested well-known name could not be claimed.
    #[error("could not claim {name}: {source}")]
    NameClaim {
        /// The name that was requested.
        name: String,
        /// Underlying D-Bus failure.
        #[source]
        source: zbus::Error,
    },

    /// A D-Bus call failed.
    #[error("{0}")]
    RemoteCall(#[from] zbus::Error),

    /// Output could not be written.
    #[error("{0}")]
    Output(#[from] std::io::Error),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Short name of the error kind, printed in front of the message.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Error::Configuration(_) => "ConfigurationError",
            Error::Connection(_) => "ConnectionError",
            Error::NameClaim { .. } => "NameClaimError",
            Error::RemoteCall(_) => "RemoteCallError",
            Error::Output(_) => "OutputError",
        }
    }
}

/// The one error boundary of a program.
///
/// Prints `<kind>: <message>` on standard output for a failure and turns the outcome into the
/// process exit status.
pub fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{:?}", error);
            println!("{}: {}", error.kind_name(), error);
            ExitCode::from(1)
        }
    }
}
