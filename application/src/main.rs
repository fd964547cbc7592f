use std::{io, process::ExitCode, sync::OnceLock};

use application::{session, Args, Config, Console, Service};
use service::{
    infra::Memory,
    query::{ListingsCount, Query as _},
};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    // Standard output is reserved for the interactive session.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO)
                            >= *meta.level()
                })),
        )
        .init();

    match start() {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}

fn start() -> Result<(), ()> {
    let Args { config } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        session: session_config,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let service = Service::new(Memory::default());
    let mut console = Console::stdio();

    if !session_config.greeting.is_empty() {
        println!("{}", session_config.greeting);
    }

    session::run(&service, &mut console).map_err(|e| {
        log::error!("session failed: {e}");
    })?;

    let total = service
        .execute(ListingsCount::default())
        .unwrap_or_else(|e| match e {});
    log::info!("session finished with {total} listing(s)");

    Ok(())
}
