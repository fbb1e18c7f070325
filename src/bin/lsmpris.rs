use std::io;
use std::process::ExitCode;

use clap::Parser;
use pdmtools::{report, version_line, write_players, BusArgs, PlayerFinder, Result};

const PROGRAM: &str = "lsmpris";

/// Lists running MPRIS 2.x compatible media players.
#[derive(Parser, Debug)]
#[clap(name = "lsmpris")]
struct Opts {
    /// list players on system message bus
    #[clap(long)]
    system: bool,

    /// list players on session message bus (this is the default)
    #[clap(long)]
    session: bool,

    /// list players on the message bus accessible via the provided address
    #[clap(long, value_name = "ADDRESS")]
    bus: Option<String>,

    /// use markers for easier reading of the output text
    #[clap(long, alias = "colour")]
    color: bool,

    /// shows version of the program and exit
    #[clap(short = 'V', long = "version")]
    show_version: bool,
}

impl Opts {
    fn bus_args(&self) -> BusArgs {
        BusArgs {
            system: self.system,
            session: self.session,
            bus: self.bus.clone(),
        }
    }
}

#[async_std::main]
async fn main() -> ExitCode {
    env_logger::init();
    let opts = Opts::parse();

    if let Some(version) = version_requested(&opts) {
        println!("{}", version);
        return ExitCode::SUCCESS;
    }

    report(run(opts).await)
}

/// The version line to print instead of doing anything else, if one was asked for.
fn version_requested(opts: &Opts) -> Option<String> {
    if opts.show_version {
        Some(version_line(PROGRAM))
    } else {
        None
    }
}

async fn run(opts: Opts) -> Result<()> {
    let endpoint = opts.bus_args().endpoint()?;
    let finder = PlayerFinder::for_connection(endpoint.connect().await?);

    let players = finder.find_all().await?;
    write_players(&players, opts.color, &mut io::stdout()).await
}
