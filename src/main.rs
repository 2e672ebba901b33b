#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod fmt;
mod prelude;
mod render;

use std::{env, ffi::OsString, io, process::ExitCode};

use chrono::Local;
use clap::Parser;

use crate::{
    api::elprisetjustnu,
    cli::{Args, normalize},
    core::error::ReportError,
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(io::stderr)
        .with_max_level(log_level())
        .init();

    let raw_args: Vec<OsString> = env::args_os().collect();
    if raw_args.len() <= 1 {
        return match cli::write_usage(&mut io::stdout().lock()) {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                error!("{error:#}");
                ExitCode::FAILURE
            }
        };
    }
    let args = Args::try_parse_from(normalize(raw_args)).unwrap_or_else(|error| error.exit());

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => exit_code(&error),
    }
}

async fn run(args: Args) -> Result {
    let query = args.validate(Local::now().date_naive())?;
    debug!(?query, "validated");
    let api = elprisetjustnu::Api::new(args.api_base_url)?;
    cli::run(&api, &query, &mut io::stdout().lock()).await
}

/// Print the error for the user and pick the exit status.
fn exit_code(error: &Error) -> ExitCode {
    if let Some(error) = error.downcast_ref::<ReportError>() {
        println!("{error}");
        ExitCode::from(error.exit_code())
    } else {
        println!("fel: {error:#}");
        ExitCode::FAILURE
    }
}

/// `ELPRIS_LOG` level, warnings by default.
fn log_level() -> Level {
    env::var("ELPRIS_LOG").ok().and_then(|level| level.parse().ok()).unwrap_or(Level::WARN)
}
