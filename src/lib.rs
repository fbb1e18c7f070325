#![warn(missing_docs)]
#![deny(
    missing_debug_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

//!
//! # pdmtools
//!
//! Shared pieces of two small command-line tools for MPRIS2-compatible media players over D-Bus:
//!
//! * `lsmpris` lists the players currently on a bus, together with their `Identity`.
//! * `fakeplayer` claims a player name and exposes a minimal `org.mpris.MediaPlayer2` object, so
//!   `lsmpris` (or any other MPRIS client) has something to talk to while debugging.
//!
//! ## Getting started
//!
//! 1. Look at `PlayerFinder` for the discovery side.
//! 2. Look at `FakePlayer` and `serve` for the simulator side.
//!

mod bus;
mod error;
mod fake;
mod find;
mod player;
mod proxies;

pub use bus::{BusArgs, BusEndpoint};
pub use error::{report, Error, Result};
pub use fake::{register, serve, Diagnostics, FakePlayer};
pub use find::{filter_player_names, PlayerFinder};
pub use player::{format_player_line, write_players, Player};

/// Every MPRIS2 player owns a well-known name starting with this prefix.
pub const MPRIS2_PREFIX: &str = "org.mpris.MediaPlayer2.";

/// Object path of the MPRIS2 root object. Players register here and clients look here.
pub const MPRIS2_PATH: &str = "/org/mpris/MediaPlayer2";

/// Name of the MPRIS2 root interface.
pub const MPRIS2_INTERFACE: &str = "org.mpris.MediaPlayer2";

/// Name of the tool suite, shown in version strings.
pub const SUITE_NAME: &str = "pdmtools";

/// Version of the tool suite.
pub const VERSION: &str = "001";

/// Identity printed for players whose `Identity` property could not be read.
pub const UNKNOWN_IDENTITY: &str = "Unknown";

/// Identity the simulator uses unless told otherwise.
pub const DEFAULT_IDENTITY: &str = "Fake Player";

/// Bus name the simulator claims unless told otherwise.
pub const DEFAULT_NAME: &str = "org.mpris.MediaPlayer2.fakeplayer";

/// Returns the line printed by `-V/--version`, like `lsmpris (pdmtools) 001`.
pub fn version_line(program: &str) -> String {
    format!("{} ({}) {}", program, SUITE_NAME, VERSION)
}
