// src/main.rs
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use country_stats::{app, args::Args, config::Config, logging};

fn main() -> ExitCode {
    logging::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help / --version は成功扱い
            let _ = err.print();
            return if err.use_stderr() { ExitCode::FAILURE } else { ExitCode::SUCCESS };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::try_from(args).context("invalid arguments")?;
    tracing::debug!(?config, "resolved configuration");
    app::run(&config)?;
    Ok(())
}
