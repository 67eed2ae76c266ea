// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command implementations.

use std::io;

use anyhow::{Context, Result};

use nina_cert_common::detect::is_mkr_wifi_1010;
use nina_cert_common::TargetRegistry;

use crate::host::{self, HostEnv};

/// Run a registered target against the host environment.
pub fn run_target(registry: &TargetRegistry, name: &str, env: &mut HostEnv) -> Result<i32> {
    let mut stdout = io::stdout();
    let status = registry.run(name, env, &mut stdout)?;
    log::debug!("target `{}` finished with status {}", name, status);
    Ok(status)
}

/// Print the registered targets.
pub fn targets(registry: &TargetRegistry) {
    println!("Targets:");
    for target in registry.iter() {
        println!("  {:<14} {}", target.name, target.title);
        println!("  {:<14} {}", "", target.description);
    }
}

/// List serial ports, marking attached MKR WiFi 1010 boards.
pub fn ports() -> Result<()> {
    let candidates = host::enumerate_ports().context("Failed to enumerate serial ports")?;

    if candidates.is_empty() {
        println!("No serial ports found.");
        return Ok(());
    }

    println!("Serial ports:");
    for port in &candidates {
        let usb = match (port.vid, port.pid) {
            (Some(vid), Some(pid)) => format!("{:04x}:{:04x}", vid, pid),
            _ => "-".to_string(),
        };
        let marker = if is_mkr_wifi_1010(port) {
            "  <- MKR WiFi 1010"
        } else {
            ""
        };
        println!(
            "  {:<20} {:<10} {}{}",
            port.name,
            usb,
            port.product.as_deref().unwrap_or(""),
            marker
        );
    }

    Ok(())
}
