// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Fixed board/domain constants and the custom target registry.

use std::io::Write;

use crate::certificate::run_certificate_upload;
use crate::env::BuildEnv;
use crate::error::RegistryError;

// --- Fixed constants ---

/// Host the firmware talks HTTPS to. Must match `SERVER_HOST` in the sketch.
pub const CERT_DOMAIN: &str = "bomberman.mercantec.tech";

/// Fully-qualified board name passed to the uploader.
pub const FQBN: &str = "arduino:samd:mkrwifi1010";

pub const TLS_PORT: u16 = 443;

/// Default external uploader program.
pub const UPLOADER_TOOL: &str = "arduino-fwuploader";

/// Name the certificate target is registered under.
pub const CERTIFICATE_TARGET: &str = "certificate";

/// Build-environment setting holding the board's upload port.
pub const UPLOAD_PORT_KEY: &str = "UPLOAD_PORT";

/// Signature of a target action. Returns the process exit status.
pub type TargetAction = fn(&mut dyn BuildEnv, &mut dyn Write) -> i32;

/// A named target that can be invoked from the command line.
#[derive(Clone)]
pub struct CustomTarget {
    pub name: &'static str,
    pub title: String,
    pub description: String,
    pub action: TargetAction,
}

impl std::fmt::Debug for CustomTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomTarget")
            .field("name", &self.name)
            .field("title", &self.title)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Registered targets, kept in registration order.
#[derive(Debug, Default)]
pub struct TargetRegistry {
    targets: Vec<CustomTarget>,
}

impl TargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a target. Names must be unique.
    pub fn add_custom_target(&mut self, target: CustomTarget) -> Result<(), RegistryError> {
        if self.get(target.name).is_some() {
            return Err(RegistryError::Duplicate(target.name.to_string()));
        }
        log::debug!("registered target `{}`", target.name);
        self.targets.push(target);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CustomTarget> {
        self.targets.iter().find(|t| t.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CustomTarget> {
        self.targets.iter()
    }

    /// Invoke the action of the target called `name`.
    pub fn run(
        &self,
        name: &str,
        env: &mut dyn BuildEnv,
        out: &mut dyn Write,
    ) -> Result<i32, RegistryError> {
        let target = self
            .get(name)
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))?;
        log::debug!("running target `{}`", target.name);
        Ok((target.action)(env, out))
    }
}

/// Register the `certificate` target.
pub fn register_certificate_target(registry: &mut TargetRegistry) -> Result<(), RegistryError> {
    registry.add_custom_target(CustomTarget {
        name: CERTIFICATE_TARGET,
        title: "Upload SSL certificate".to_string(),
        description: format!("Upload root certificate for {} to NINA (HTTPS)", CERT_DOMAIN),
        action: run_certificate_upload,
    })
}
