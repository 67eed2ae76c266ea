// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! The `certificate` target: flash the root certificate for [`CERT_DOMAIN`]
//! into the NINA module through the external uploader.

use std::io::{self, Write};

use crate::command::UploaderCommand;
use crate::env::BuildEnv;
use crate::error::UploadError;
use crate::target::CERT_DOMAIN;

/// Guidance printed when no upload port is configured.
pub const MISSING_PORT_HELP: &[&str] = &[
    "",
    "UPLOAD_PORT not set. Connect the board and run for example:",
    "  nina-cert-upload ports                      (lists attached boards)",
    "  nina-cert-upload --detect certificate       (uses the attached board)",
    "  nina-cert-upload -p <PORT> certificate      (once the port is known)",
    "  UPLOAD_PORT=<PORT> nina-cert-upload certificate",
    "Or set upload_port in nina-cert.toml, e.g.: upload_port = \"COM3\"",
    "",
];

/// Remediation printed when the uploader cannot be run.
pub const TOOL_FAILURE_HELP: &[&str] = &[
    "",
    "Error: could not run arduino-fwuploader.",
    "Install the tool: npm install -g @arduino/arduino-fwuploader",
    "Or use the Arduino IDE: Tools -> Upload Root Certificates",
    "",
];

/// Target action. Prints guidance on failure and returns the exit status.
pub fn run_certificate_upload(env: &mut dyn BuildEnv, out: &mut dyn Write) -> i32 {
    match certificate_upload(env, out) {
        Ok(status) => status,
        Err(err) => {
            log::debug!("certificate upload failed: {}", DisplayChain(&err));
            let help = match err {
                UploadError::MissingPort => MISSING_PORT_HELP,
                UploadError::ToolInvocation { .. } => TOOL_FAILURE_HELP,
            };
            // Output errors are ignored; the exit status still reports failure.
            let _ = write_lines(out, help);
            1
        }
    }
}

/// Resolve the port, print the status line and run the uploader.
pub fn certificate_upload(
    env: &mut dyn BuildEnv,
    out: &mut dyn Write,
) -> Result<i32, UploadError> {
    let port = env
        .upload_port()
        .filter(|p| !p.is_empty())
        .ok_or(UploadError::MissingPort)?;

    let cmd = UploaderCommand::certificate_flash(&env.uploader(), &port);

    let _ = writeln!(
        out,
        "Uploading SSL certificate for {} to the NINA module on {} ...",
        CERT_DOMAIN, port
    );
    let _ = writeln!(out, "(Close the Serial Monitor first if it is running.)");
    let _ = out.flush();

    log::debug!("executing: {}", cmd);
    env.execute(&cmd)
        .map_err(|source| UploadError::ToolInvocation {
            command: cmd.to_string(),
            source,
        })
}

fn write_lines(out: &mut dyn Write, lines: &[&str]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()
}

/// Formats an error followed by its source chain.
struct DisplayChain<'a>(&'a dyn std::error::Error);

impl std::fmt::Display for DisplayChain<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)?;
        let mut source = self.0.source();
        while let Some(err) = source {
            write!(f, ": {}", err)?;
            source = err.source();
        }
        Ok(())
    }
}
