use std::future::pending;
use std::process::ExitCode;

use clap::Parser;
use pdmtools::{
    report, serve, version_line, BusArgs, FakePlayer, Result, DEFAULT_IDENTITY, DEFAULT_NAME,
};

const PROGRAM: &str = "fakeplayer";

/// A tool for simulating a MPRIS 2.x compatible media player. For debugging lsmpris only. Does
/// not actually implement MPRIS in its entirety.
#[derive(Parser, Debug)]
#[clap(name = "fakeplayer")]
struct Opts {
    /// sets the identity string that the program should use
    #[clap(long, default_value = DEFAULT_IDENTITY)]
    identity: String,

    /// sets the bus name that the program should use
    #[clap(long, default_value = DEFAULT_NAME)]
    name: String,

    #[clap(flatten)]
    bus: BusArgs,

    /// enable output of debug information
    #[clap(short, long)]
    verbose: bool,

    /// shows version of the program and exit
    #[clap(short = 'V', long = "version")]
    show_version: bool,
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
    let endpoint = opts.bus.endpoint()?;
    let player = FakePlayer::new(opts.identity, opts.verbose);

    // Calls are answered for as long as the connection lives, so hold on to it forever.
    let _connection = serve(&endpoint, &opts.name, player).await?;
    pending::<()>().await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_uses_defaults() {
        let opts = Opts::try_parse_from(["fakeplayer"]).unwrap();
        assert_eq!(opts.identity, "Fake Player");
        assert_eq!(opts.name, "org.mpris.MediaPlayer2.fakeplayer");
        assert!(!opts.verbose);
        assert!(!opts.show_version);
    }

    #[test]
    fn it_parses_identity_name_and_verbosity() {
        let opts = Opts::try_parse_from([
            "fakeplayer",
            "--identity",
            "Test Player",
            "--name",
            "org.mpris.MediaPlayer2.test",
            "--session",
            "-v",
        ])
        .unwrap();

        assert_eq!(opts.identity, "Test Player");
        assert_eq!(opts.name, "org.mpris.MediaPlayer2.test");
        assert!(opts.verbose);
        assert!(opts.bus.endpoint().is_ok());
    }

    #[test]
    fn it_prints_the_version_for_upper_case_v_only() {
        let opts = Opts::try_parse_from(["fakeplayer", "--system", "--bus", "tcp:host=x", "-V"])
            .unwrap();
        assert_eq!(
            version_requested(&opts).as_deref(),
            Some("fakeplayer (pdmtools) 001")
        );

        let opts = Opts::try_parse_from(["fakeplayer", "--version"]).unwrap();
        assert!(version_requested(&opts).is_some());

        let opts = Opts::try_parse_from(["fakeplayer", "-v"]).unwrap();
        assert_eq!(version_requested(&opts), None);
        assert!(opts.verbose);
    }

    #[async_std::test]
    async fn it_fails_on_conflicting_buses_before_connecting() {
        let opts = Opts::try_parse_from(["fakeplayer", "--session", "--system"]).unwrap();

        match run(opts).await {
            Err(error) => assert_eq!(error.kind_name(), "ConfigurationError"),
            Ok(()) => panic!("conflicting buses were accepted"),
        }
    }
}
