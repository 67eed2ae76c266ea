// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! External uploader command construction.

use std::fmt;

use crate::target::{CERT_DOMAIN, FQBN, TLS_PORT};

/// A program plus its argument vector.
///
/// Hosts spawn `program` with `args` directly. [`fmt::Display`] renders the
/// space-joined command line used in logs and messages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploaderCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl UploaderCommand {
    /// `<program> certificates flash --fqbn <FQBN> --address <port> --url <domain>:443`
    pub fn certificate_flash(program: &str, port: &str) -> Self {
        let args = [
            "certificates",
            "flash",
            "--fqbn",
            FQBN,
            "--address",
            port,
            "--url",
            certificate_url().as_str(),
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        Self {
            program: program.to_string(),
            args,
        }
    }
}

impl fmt::Display for UploaderCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// `host:port` the uploader fetches the certificate chain from.
pub fn certificate_url() -> String {
    format!("{}:{}", CERT_DOMAIN, TLS_PORT)
}
