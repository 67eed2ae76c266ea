// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Build environment seen by target actions.

use crate::command::UploaderCommand;
use crate::error::ToolFailure;

/// What a target action may ask of its host.
pub trait BuildEnv {
    /// Configured upload port, if any. May be empty.
    fn upload_port(&self) -> Option<String>;

    /// Run `cmd` to completion and return its exit status.
    ///
    /// Implementations report a non-zero exit as [`ToolFailure::Exit`], so a
    /// successful return is always 0.
    fn execute(&mut self, cmd: &UploaderCommand) -> Result<i32, ToolFailure>;

    /// Program used as the uploader. Hosts may point it at a specific binary.
    fn uploader(&self) -> String {
        crate::target::UPLOADER_TOOL.to_string()
    }
}
