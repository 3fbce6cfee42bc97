// main.rs

mod args;
mod config;
mod queue;
mod show;

use std::{
    fs,
    io::{self, ErrorKind, Write},
    sync::LazyLock,
};

use anyhow::{Context, Result};
use permitit::Permit;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::{args::Args, config::Config, queue::Queue, show::Theme};

pub static CONFIG: LazyLock<Config> = LazyLock::new(Config::load);

fn init_logging(args: &Args) -> Result<WorkerGuard> {
    let dir = &CONFIG.general.log_dir;
    fs::create_dir(dir)
        .permit(|e| e.kind() == ErrorKind::AlreadyExists)
        .with_context(|| format!("Failed to create log dir {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, "playq.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let level = if args.quiet {
        "error"
    } else if args.verbose {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

fn main() -> Result<()> {
    let args = args::parse_args();
    let _guard = init_logging(&args)?;
    debug!("Parsed {args:#?}");

    let queue = if args.targets.is_empty() {
        match &CONFIG.general.playlist {
            Some(playlist) => Queue::from_playlist(playlist),
            None => Queue::default(),
        }
    } else {
        Queue::from_targets(&args.targets)
    };

    if queue.is_empty() {
        warn!("Nothing to play");
    }

    if !args.quiet {
        let theme = Theme::from(&CONFIG.color);
        print!("{}", show::render(&args, &queue, &theme));
        io::stdout().flush()?;
    }

    info!("Prepared a queue of {} tracks", queue.len());
    Ok(())
}
