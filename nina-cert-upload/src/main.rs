// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Uploads the TLS root certificate for the game server to the NINA module
//! of an Arduino MKR WiFi 1010, so the firmware can reach it over HTTPS.
//!
//! Usage:
//!   nina-cert-upload --port COM3 certificate
//!   UPLOAD_PORT=/dev/ttyACM0 nina-cert-upload certificate
//!   nina-cert-upload ports
//!   nina-cert-upload targets

mod cli;
mod commands;
mod host;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let status = cli::run(args)?;
    if status != 0 {
        std::process::exit(status);
    }
    Ok(())
}
