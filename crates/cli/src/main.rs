//! # BoardCount CLI
//!
//! Thin binary over the roster engine: loads configuration, opens storage,
//! runs one subcommand and exits.

mod cli;
mod commands;
mod context;
mod render;
mod transcription;

use std::io::Write;

use anyhow::{Context, Result};
use boardcount_infra::config;
use boardcount_infra::observability::{init_logging, LogFormat};
use clap::Parser;

use crate::cli::Cli;
use crate::context::AppContext;
use crate::transcription::LineTranscriber;

fn main() -> Result<()> {
    // Missing .env is normal; variables may come from the shell.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let format = if cli.log_json { LogFormat::Json } else { LogFormat::Text };
    init_logging(level, format)?;

    let mut config = config::load(cli.config.clone()).context("failed to load configuration")?;
    if let Some(policy) = cli.policy {
        config.roster.activation_policy = policy;
    }

    let mut ctx = AppContext::new(config).context("failed to open storage")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(&mut ctx, cli.command, &mut out, &LineTranscriber::stdin())?;
    out.flush()?;
    Ok(())
}
