// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across sections.

pub mod confidence_meter;
pub mod error_banner;
