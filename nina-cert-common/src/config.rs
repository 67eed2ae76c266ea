// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Static project configuration (`nina-cert.toml`).
//!
//! ```toml
//! upload_port = "COM3"
//! uploader = "/opt/arduino/arduino-fwuploader"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "nina-cert.toml";

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Serial or network address of the board.
    #[serde(default)]
    pub upload_port: Option<String>,

    /// Uploader program, when not `arduino-fwuploader` on PATH.
    #[serde(default)]
    pub uploader: Option<PathBuf>,
}

impl ProjectConfig {
    /// Parse configuration text. `path` is only used for error messages.
    pub fn parse(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load a configuration file that must exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    /// Load `path` if it exists, otherwise return the empty configuration.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::parse(&text, path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Configured upload port, treating an empty string as unset.
    pub fn upload_port(&self) -> Option<&str> {
        self.upload_port.as_deref().filter(|p| !p.is_empty())
    }
}
