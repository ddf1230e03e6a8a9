// SPDX-License-Identifier: MPL-2.0
//! Upload-and-classify workflow state.
//!
//! This is the single source of truth for what the upload section shows:
//! which scan is selected, its preview, and where the current submission
//! attempt stands. The four analysis phases are a tagged union so impossible
//! combinations (loading + error at once, stale result during a new loading
//! phase) cannot be represented.
//!
//! Submission attempts are tagged with a monotonically increasing id. A
//! completion that does not carry the id of the in-flight attempt is stale
//! and must be discarded; the network call behind it is never aborted at the
//! transport level.

use crate::domain::ClassificationResult;
use crate::error::ApiError;
use iced::widget::image::Handle;
use std::sync::Arc;

/// Message shown when submit is pressed with no scan selected.
pub const MISSING_FILE_MESSAGE: &str = "Please upload an MRI image.";

/// Generic message for any failed analysis. The underlying cause is logged,
/// never shown verbatim.
pub const ANALYZE_FAILED_MESSAGE: &str = "Failed to analyze the image. Please try again.";

/// A user-selected MRI image: raw bytes plus the metadata the multipart
/// request preserves.
#[derive(Debug, Clone)]
pub struct SelectedScan {
    /// Original file name, e.g. `scan_042.jpg`.
    pub file_name: String,
    /// Content type sent with the multipart part.
    pub mime_type: String,
    /// Raw file bytes. Shared so handing a copy to the request task is cheap.
    pub bytes: Arc<Vec<u8>>,
}

impl SelectedScan {
    /// Builds a scan from raw bytes, guessing the content type from the file
    /// name extension and falling back to sniffing the bytes themselves.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mut mime_type = mime_from_file_name(&file_name).to_string();
        if mime_type == "application/octet-stream" {
            if let Ok(format) = image_rs::guess_format(&bytes) {
                mime_type = format.to_mime_type().to_string();
            }
        }
        Self {
            file_name,
            mime_type,
            bytes: Arc::new(bytes),
        }
    }

    /// File size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// Content type for a file name, based on its extension. The picker filters
/// to images already; unknown extensions fall back to a generic binary type.
fn mime_from_file_name(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "dcm" | "dicom" => "application/dicom",
        _ => "application/octet-stream",
    }
}

/// Identifier for one submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttemptId(u64);

/// Where the current analysis stands. Exactly one variant holds at any time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum WorkflowState {
    /// Nothing submitted yet, or the context was reset by a new selection.
    #[default]
    Idle,
    /// A submission is in flight.
    Loading { attempt: AttemptId },
    /// The most recent attempt succeeded.
    Success(ClassificationResult),
    /// The most recent attempt failed; the submit control is re-enabled.
    Failure(String),
}

/// Outcome of asking the workflow to start a submission.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// A request should be dispatched for this attempt with this scan.
    Started {
        attempt: AttemptId,
        scan: SelectedScan,
    },
    /// No scan selected: the workflow moved to `Failure` and no network call
    /// may be made.
    MissingFile,
    /// A submission is already in flight; nothing changed.
    AlreadyLoading,
}

/// Selection + submission state for the upload section.
#[derive(Debug, Default)]
pub struct Workflow {
    selected: Option<SelectedScan>,
    preview: Option<Handle>,
    state: WorkflowState,
    attempt_counter: u64,
}

impl Workflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new selection, derives its preview from the same bytes, and
    /// resets the analysis to `Idle`: a new scan always invalidates the
    /// previous result or error.
    pub fn select_file(&mut self, scan: SelectedScan) {
        self.preview = Some(Handle::from_bytes(scan.bytes.as_ref().clone()));
        self.selected = Some(scan);
        self.state = WorkflowState::Idle;
    }

    /// Removes the selection and its preview in one transition. The analysis
    /// state is deliberately untouched: a displayed result still describes
    /// the scan that produced it. Only a new selection resets it.
    pub fn clear_file(&mut self) {
        self.selected = None;
        self.preview = None;
    }

    /// Starts a submission attempt, enforcing the preconditions of the
    /// submit control: never while loading, never without a scan.
    pub fn begin_submission(&mut self) -> SubmitOutcome {
        if self.is_loading() {
            return SubmitOutcome::AlreadyLoading;
        }
        let Some(scan) = self.selected.clone() else {
            self.state = WorkflowState::Failure(MISSING_FILE_MESSAGE.to_string());
            return SubmitOutcome::MissingFile;
        };

        self.attempt_counter += 1;
        let attempt = AttemptId(self.attempt_counter);
        // Entering Loading clears any previous Success/Failure payload.
        self.state = WorkflowState::Loading { attempt };
        SubmitOutcome::Started { attempt, scan }
    }

    /// Applies the outcome of a finished attempt. Returns `false` when the
    /// outcome was stale (a newer attempt superseded it) and nothing changed.
    pub fn complete_submission(
        &mut self,
        attempt: AttemptId,
        outcome: Result<ClassificationResult, ApiError>,
    ) -> bool {
        let current = match self.state {
            WorkflowState::Loading { attempt } => attempt,
            _ => {
                log::debug!("discarding completion for settled attempt {:?}", attempt);
                return false;
            }
        };
        if current != attempt {
            log::debug!(
                "discarding stale completion {:?}, current is {:?}",
                attempt,
                current
            );
            return false;
        }

        self.state = match outcome {
            Ok(result) => {
                log::info!(
                    "classification: {} ({:.1}%)",
                    result.normalized_class(),
                    result.confidence
                );
                WorkflowState::Success(result)
            }
            Err(err) => {
                log::error!("classification failed ({}): {}", err.category(), err);
                WorkflowState::Failure(ANALYZE_FAILED_MESSAGE.to_string())
            }
        };
        true
    }

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn selected(&self) -> Option<&SelectedScan> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> Option<&Handle> {
        self.preview.as_ref()
    }

    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, WorkflowState::Loading { .. })
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.has_selection() && !self.is_loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::PredictResponse;

    fn scan(name: &str) -> SelectedScan {
        SelectedScan::from_bytes(name, vec![0u8; 16])
    }

    fn result(class: &str, confidence: f32) -> ClassificationResult {
        PredictResponse {
            class: class.to_string(),
            confidence,
        }
        .into()
    }

    #[test]
    fn mime_guessing_covers_common_scan_formats() {
        assert_eq!(scan("brain.jpg").mime_type, "image/jpeg");
        assert_eq!(scan("brain.PNG").mime_type, "image/png");
        assert_eq!(scan("brain.dcm").mime_type, "application/dicom");
        assert_eq!(scan("brain").mime_type, "application/octet-stream");
    }

    #[test]
    fn unknown_extension_falls_back_to_byte_sniffing() {
        // PNG magic bytes without a telling extension.
        let bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        let scan = SelectedScan::from_bytes("export.scan", bytes);
        assert_eq!(scan.mime_type, "image/png");
    }

    #[test]
    fn select_file_sets_preview_and_resets_state() {
        let mut wf = Workflow::new();
        wf.select_file(scan("a.png"));
        assert!(wf.has_selection());
        assert!(wf.preview().is_some());
        assert_eq!(*wf.state(), WorkflowState::Idle);
    }

    #[test]
    fn new_selection_invalidates_previous_result() {
        let mut wf = Workflow::new();
        wf.select_file(scan("a.png"));
        let SubmitOutcome::Started { attempt, .. } = wf.begin_submission() else {
            panic!("expected submission to start");
        };
        assert!(wf.complete_submission(attempt, Ok(result("Mild Demented", 87.0))));
        assert!(matches!(wf.state(), WorkflowState::Success(_)));

        wf.select_file(scan("b.png"));
        assert_eq!(*wf.state(), WorkflowState::Idle);
        assert_eq!(wf.selected().unwrap().file_name, "b.png");
    }

    #[test]
    fn clear_file_drops_preview_with_selection() {
        let mut wf = Workflow::new();
        wf.select_file(scan("a.png"));
        wf.clear_file();
        assert!(!wf.has_selection());
        assert!(wf.preview().is_none());
    }

    #[test]
    fn clear_file_keeps_result() {
        let mut wf = Workflow::new();
        wf.select_file(scan("a.png"));
        let SubmitOutcome::Started { attempt, .. } = wf.begin_submission() else {
            panic!("expected submission to start");
        };
        wf.complete_submission(attempt, Ok(result("Non Demented", 95.0)));

        wf.clear_file();
        assert!(matches!(wf.state(), WorkflowState::Success(_)));
    }

    #[test]
    fn submission_without_file_fails_locally() {
        let mut wf = Workflow::new();
        assert!(matches!(wf.begin_submission(), SubmitOutcome::MissingFile));
        assert_eq!(
            *wf.state(),
            WorkflowState::Failure(MISSING_FILE_MESSAGE.to_string())
        );
    }

    #[test]
    fn submission_passes_through_loading() {
        let mut wf = Workflow::new();
        wf.select_file(scan("a.png"));
        assert!(wf.can_submit());

        let SubmitOutcome::Started { attempt, scan } = wf.begin_submission() else {
            panic!("expected submission to start");
        };
        assert_eq!(scan.file_name, "a.png");
        assert!(wf.is_loading());
        assert!(!wf.can_submit());

        assert!(wf.complete_submission(attempt, Ok(result("Mild Demented", 87.0))));
        match wf.state() {
            WorkflowState::Success(r) => {
                assert_eq!(r.class, "Mild Demented");
                assert_eq!(r.confidence, 87.0);
            }
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn second_submission_while_loading_is_rejected() {
        let mut wf = Workflow::new();
        wf.select_file(scan("a.png"));
        let SubmitOutcome::Started { attempt, .. } = wf.begin_submission() else {
            panic!("expected submission to start");
        };
        assert!(matches!(
            wf.begin_submission(),
            SubmitOutcome::AlreadyLoading
        ));
        // Still the same in-flight attempt.
        assert_eq!(*wf.state(), WorkflowState::Loading { attempt });
    }

    #[test]
    fn failure_maps_to_generic_message_and_reenables_submit() {
        let mut wf = Workflow::new();
        wf.select_file(scan("a.png"));
        let SubmitOutcome::Started { attempt, .. } = wf.begin_submission() else {
            panic!("expected submission to start");
        };
        assert!(wf.complete_submission(attempt, Err(ApiError::Status(500))));
        assert_eq!(
            *wf.state(),
            WorkflowState::Failure(ANALYZE_FAILED_MESSAGE.to_string())
        );
        // Selection is retained so the user can retry without re-picking.
        assert!(wf.can_submit());
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut wf = Workflow::new();
        wf.select_file(scan("a.png"));

        // Attempt A starts, then is superseded. (The UI disables submit
        // while loading, but a failure re-enables it mid-flight of nothing;
        // simulate supersession by resolving A as failed, resubmitting, and
        // letting A's duplicate completion arrive late.)
        let SubmitOutcome::Started { attempt: a, .. } = wf.begin_submission() else {
            panic!("expected submission to start");
        };
        assert!(wf.complete_submission(a, Err(ApiError::Transport("reset".into()))));

        let SubmitOutcome::Started { attempt: b, .. } = wf.begin_submission() else {
            panic!("expected submission to start");
        };
        assert_ne!(a, b);

        // A's outcome arrives again after B started: must not apply.
        assert!(!wf.complete_submission(a, Ok(result("Moderate Demented", 60.0))));
        assert_eq!(*wf.state(), WorkflowState::Loading { attempt: b });

        // B's outcome wins.
        assert!(wf.complete_submission(b, Ok(result("Mild Demented", 87.0))));
        match wf.state() {
            WorkflowState::Success(r) => assert_eq!(r.class, "Mild Demented"),
            other => panic!("expected Success, got {:?}", other),
        }
    }

    #[test]
    fn completion_after_terminal_state_is_discarded() {
        let mut wf = Workflow::new();
        wf.select_file(scan("a.png"));
        let SubmitOutcome::Started { attempt, .. } = wf.begin_submission() else {
            panic!("expected submission to start");
        };
        assert!(wf.complete_submission(attempt, Ok(result("Non Demented", 99.0))));
        // A duplicate resolution of the same attempt must not re-apply.
        assert!(!wf.complete_submission(attempt, Err(ApiError::Status(500))));
        assert!(matches!(wf.state(), WorkflowState::Success(_)));
    }
}
