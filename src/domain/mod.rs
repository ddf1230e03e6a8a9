// SPDX-License-Identifier: MPL-2.0
//! Domain types shared across the workflow and the UI.

pub mod classification;

pub use classification::{normalize_label, ClassificationResult, Stage};
