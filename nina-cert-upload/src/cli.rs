// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use nina_cert_common::config::DEFAULT_CONFIG_FILE;
use nina_cert_common::{register_certificate_target, ProjectConfig, TargetRegistry};

use crate::commands;
use crate::host::HostEnv;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "nina-cert-upload")]
#[command(about = "Upload the HTTPS root certificate to the NINA module of an MKR WiFi 1010")]
pub struct Cli {
    /// Upload port (e.g., COM3 or /dev/ttyACM0). Overrides UPLOAD_PORT
    #[arg(short, long, global = true)]
    pub port: Option<String>,

    /// Project configuration file (default: nina-cert.toml, not read when
    /// both --port and --uploader are given)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Uploader program to run instead of arduino-fwuploader from PATH
    #[arg(long, global = true, value_name = "PROGRAM")]
    pub uploader: Option<PathBuf>,

    /// Fall back to the attached MKR WiFi 1010 when no port is configured
    #[arg(long, global = true)]
    pub detect: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Upload the root certificate (the `certificate` target)
    Certificate,

    /// Run a registered target by name
    Run {
        #[arg(value_name = "TARGET")]
        target: String,
    },

    /// List registered targets
    Targets,

    /// List serial ports and mark attached MKR WiFi 1010 boards
    Ports,
}

/// Execute the parsed CLI command. Returns the process exit status.
pub fn run(cli: Cli) -> Result<i32> {
    let mut registry = TargetRegistry::new();
    register_certificate_target(&mut registry)?;

    match &cli.command {
        Commands::Certificate => {
            let mut env = host_env(&cli)?;
            commands::run_target(&registry, nina_cert_common::CERTIFICATE_TARGET, &mut env)
        }
        Commands::Run { target } => {
            let mut env = host_env(&cli)?;
            commands::run_target(&registry, target, &mut env)
        }
        Commands::Targets => {
            commands::targets(&registry);
            Ok(0)
        }
        Commands::Ports => {
            commands::ports()?;
            Ok(0)
        }
    }
}

fn host_env(cli: &Cli) -> Result<HostEnv> {
    let config = if config_needed(cli) {
        load_config(cli.config.as_deref())?
    } else {
        log::debug!("--port and --uploader given, skipping {}", DEFAULT_CONFIG_FILE);
        ProjectConfig::default()
    };
    Ok(HostEnv::from_sources(
        cli.port.as_deref(),
        cli.uploader.as_deref(),
        &config,
        cli.detect,
    ))
}

/// An explicit `--config` is always loaded. The default file is skipped when
/// the command line already provides every value it could supply.
fn config_needed(cli: &Cli) -> bool {
    let has_port = cli.port.as_deref().is_some_and(|p| !p.is_empty());
    cli.config.is_some() || !has_port || cli.uploader.is_none()
}

fn load_config(path: Option<&Path>) -> Result<ProjectConfig> {
    let config = match path {
        Some(path) => ProjectConfig::load(path),
        None => ProjectConfig::load_or_default(Path::new(DEFAULT_CONFIG_FILE)),
    };
    config.context("Failed to load project configuration")
}
