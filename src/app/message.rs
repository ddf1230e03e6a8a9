// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::ClassificationResult;
use crate::error::ApiError;
use crate::ui::{hero, navbar, upload};
use crate::workflow::{AttemptId, SelectedScan};
use std::path::PathBuf;
use std::time::Instant;

/// Runtime flags parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional MRI image to preselect at startup.
    pub file_path: Option<String>,
    /// `--api-url` override, highest precedence.
    pub api_url: Option<String>,
    /// `--config-dir` override for the settings file location.
    pub config_dir: Option<PathBuf>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Upload(upload::Message),
    /// Result from the open file dialog; `None` means the user cancelled.
    FileDialogResult(Option<SelectedScan>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// Bytes of a dropped or preselected file finished loading.
    FileLoaded(Result<SelectedScan, String>),
    /// A classification attempt resolved.
    ClassificationCompleted {
        attempt: AttemptId,
        result: Result<ClassificationResult, ApiError>,
    },
    /// Periodic tick driving the loading spinner.
    Tick(Instant),
}
