mod cli;
mod commands;
mod config;
mod consts;
mod errors;
mod job;
mod terminal;

use std::{
    io::{self, IsTerminal},
    process::ExitCode,
};

use anyhow::Context as _;
use clap::{ColorChoice, Parser};
use cli::args::Args;
use errors::{PowerEditError, init_error};
use log::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    let args = Args::parse();

    let result = init_logging(&args).and_then(|()| {
        info!("Starting power-edit version {}", env!("CARGO_PKG_VERSION"));
        commands::run(args)
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr at warn level unless asked otherwise, so that they
/// don't get in the way of the interactive screen on stdout.
fn init_logging(args: &Args) -> Result<(), PowerEditError> {
    let level = args.verbose.log_level_filter().to_string().to_lowercase();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}={level},word_align={level}", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(log_colors(args.color)),
        )
        .try_init()
        .context("Failed to initialise tracing")
        .map_err(init_error)
}

fn log_colors(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        _ => std::env::var_os("NO_COLOR").is_none() && io::stderr().is_terminal(),
    }
}
