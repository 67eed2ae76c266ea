// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Common types and logic for uploading the TLS root certificate to the NINA
//! network module of an Arduino MKR WiFi 1010.
//!
//! The host binary supplies a [`BuildEnv`] implementation (port lookup and
//! process execution); everything else here is independent of the host so it
//! can be tested with a fake environment.

pub mod certificate;
pub mod command;
pub mod config;
pub mod detect;
pub mod env;
pub mod error;
pub mod target;

// Re-export commonly used types
pub use certificate::{certificate_upload, run_certificate_upload};
pub use command::UploaderCommand;
pub use config::ProjectConfig;
pub use env::BuildEnv;
pub use error::{ConfigError, RegistryError, ToolFailure, UploadError};
pub use target::{register_certificate_target, CustomTarget, TargetRegistry};
pub use target::{CERTIFICATE_TARGET, CERT_DOMAIN, FQBN, TLS_PORT, UPLOADER_TOOL, UPLOAD_PORT_KEY};
