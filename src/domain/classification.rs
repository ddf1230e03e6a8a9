// SPDX-License-Identifier: MPL-2.0
//! Classification result returned by the remote inference service.
//!
//! The service reports a free-form stage label plus a confidence percentage.
//! Four labels are known and get dedicated badge styling; anything else is
//! displayed verbatim with a neutral badge, since the wire contract only
//! promises "a string".

use serde::Deserialize;

/// One prediction from the remote CNN: stage label + confidence in percent.
///
/// Immutable once created; a new successful call replaces it wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    /// Stage label as reported by the service, e.g. "Mild Demented".
    pub class: String,
    /// Confidence in percent, clamped to [0, 100].
    pub confidence: f32,
}

/// Raw wire shape of a successful `/predict` response.
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub class: String,
    pub confidence: f32,
}

impl From<PredictResponse> for ClassificationResult {
    fn from(raw: PredictResponse) -> Self {
        if !(0.0..=100.0).contains(&raw.confidence) {
            log::warn!(
                "confidence {} out of range for class {:?}, clamping",
                raw.confidence,
                raw.class
            );
        }
        Self {
            class: raw.class,
            confidence: raw.confidence.clamp(0.0, 100.0),
        }
    }
}

impl ClassificationResult {
    /// Confidence as a fill fraction in [0.0, 1.0] for the meter widget.
    pub fn confidence_fraction(&self) -> f32 {
        self.confidence / 100.0
    }

    /// Normalized form of the label, used to key badge styling.
    pub fn normalized_class(&self) -> String {
        normalize_label(&self.class)
    }

    /// The known stage this label maps to, if any.
    pub fn stage(&self) -> Option<Stage> {
        Stage::from_label(&self.class)
    }
}

/// Lower-cases a label and collapses whitespace runs into single hyphens
/// ("Mild Demented" -> "mild-demented"). Used as a stable key for badge
/// styling and log lines.
pub fn normalize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    let mut in_gap = false;
    for ch in label.trim().chars() {
        if ch.is_whitespace() {
            in_gap = true;
        } else {
            if in_gap && !out.is_empty() {
                out.push('-');
            }
            in_gap = false;
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        }
    }
    out
}

/// The four Alzheimer's progression stages the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NonDemented,
    VeryMildDemented,
    MildDemented,
    ModerateDemented,
}

impl Stage {
    /// All stages in progression order, used by the About section strip.
    pub const ALL: [Stage; 4] = [
        Stage::NonDemented,
        Stage::VeryMildDemented,
        Stage::MildDemented,
        Stage::ModerateDemented,
    ];

    /// Maps a service label onto a known stage. Matching is done on the
    /// normalized form so casing and spacing variations are tolerated.
    pub fn from_label(label: &str) -> Option<Stage> {
        match normalize_label(label).as_str() {
            "non-demented" | "nondemented" => Some(Stage::NonDemented),
            "very-mild-demented" | "very-mild" => Some(Stage::VeryMildDemented),
            "mild-demented" | "mild" => Some(Stage::MildDemented),
            "moderate-demented" | "moderate" => Some(Stage::ModerateDemented),
            _ => None,
        }
    }

    /// Short display name used in the progression strip.
    pub fn short_name(&self) -> &'static str {
        match self {
            Stage::NonDemented => "Non-Demented",
            Stage::VeryMildDemented => "Very Mild",
            Stage::MildDemented => "Mild",
            Stage::ModerateDemented => "Moderate",
        }
    }
}
