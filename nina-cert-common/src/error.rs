// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error types shared by the certificate target and its host.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Why running the external uploader failed.
///
/// The certificate target treats every variant the same way; the distinction
/// only shows up in log output.
#[derive(Debug, Error)]
pub enum ToolFailure {
    #[error("`{0}` was not found on PATH")]
    NotFound(String),

    #[error("failed to start uploader: {0}")]
    Spawn(#[from] io::Error),

    #[error("uploader exited with status {0}")]
    Exit(i32),

    #[error("uploader was terminated by a signal")]
    Signal,
}

/// Failure of the certificate upload target.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("UPLOAD_PORT is not set")]
    MissingPort,

    #[error("could not run `{command}`")]
    ToolInvocation {
        command: String,
        #[source]
        source: ToolFailure,
    },
}

/// Target registration and lookup errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("target `{0}` is already registered")]
    Duplicate(String),

    #[error("unknown target `{0}`")]
    Unknown(String),
}

/// Project configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration in {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
