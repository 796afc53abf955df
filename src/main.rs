//! Proverbs - splice a word into Russian folk wisdom, share it, illustrate it.

mod adapters;
mod cassette;
mod cli;
mod config;
mod context;
mod download;
mod error;
mod history;
mod logging;
mod ports;
mod proverb;
mod repl;
mod session;
mod share;
mod templates;

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::context::ServiceContext;
use crate::error::ProverbError;
use crate::proverb::ProverbGenerator;
use crate::session::{Session, Target};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), ProverbError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(ProverbError::Config)?;
    tracing::debug!(
        config = %config_path.display(),
        endpoint = %config.endpoint(),
        origin = %config.share_origin(),
        "configuration loaded"
    );

    // Create context based on mode (live / recording / replaying)
    let replay_path = std::env::var("PROVERBS_REPLAY").ok();
    let is_recording = std::env::var("PROVERBS_REC").is_ok_and(|v| v == "true" || v == "1");

    let (ctx, recording_session) = if let Some(ref cassette_path) = replay_path {
        tracing::debug!(cassette = %cassette_path, "replaying");
        (ServiceContext::replaying(Path::new(cassette_path))?, None)
    } else if is_recording {
        tracing::debug!("recording mode enabled");
        let (ctx, session) = ServiceContext::recording(&config);
        (ctx, Some(session))
    } else {
        (ServiceContext::live(&config), None)
    };

    let generator = cli.seed.map_or_else(ProverbGenerator::new, ProverbGenerator::seeded);
    let mut session = Session::new(ctx, generator, config.share_origin());

    let outcome = if cli.is_one_shot() {
        one_shot(&cli, &mut session).await
    } else {
        repl::run(&mut session).await.map_err(ProverbError::Io)
    };
    repl::flush_notices(&mut session);

    // Finish recording if active
    if let Some(recording) = recording_session {
        match recording.finish(session.into_context()) {
            Ok(Some(path)) => eprintln!("Cassette saved: {}", path.display()),
            Ok(None) => {}
            Err(e) => eprintln!("Warning: failed to save cassette: {e}"),
        }
    }

    outcome
}

/// Generate (or open) one proverb, run the requested actions, report the first failure.
async fn one_shot(cli: &Cli, session: &mut Session) -> Result<(), ProverbError> {
    if let Some(ref url) = cli.open {
        println!("{}", session.open_shared(url)?);
    } else if let Some(ref word) = cli.word {
        println!("{}", session.submit_word(word)?.text());
    }

    let mut failure = None;

    if cli.share {
        match session.share(Target::Current) {
            Ok(url) => println!("{url}"),
            Err(e) => failure = Some(e),
        }
    }

    if cli.wants_image() {
        match session.request_image(Target::Current).await {
            Ok(url) => {
                println!("{url}");
                if let Some(ref path) = cli.download {
                    if let Err(e) = session.download(Some(path)).await {
                        failure.get_or_insert(e);
                    }
                }
            }
            Err(e) => {
                failure.get_or_insert(e);
            }
        }
    }

    failure.map_or(Ok(()), Err)
}
