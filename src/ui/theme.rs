// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers and the theme mode preference.

use crate::domain::Stage;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// User preference for the application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Effective Iced theme. System falls back to dark.
    pub fn to_iced_theme(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark | ThemeMode::System => iced::Theme::Dark,
        }
    }
}

/// Standard color for error text and accents.
pub fn error_color() -> Color {
    palette::ERROR_500
}

/// Standard color for success text.
pub fn success_color() -> Color {
    palette::SUCCESS_500
}

/// Standard color for muted/secondary text.
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Badge and progression-strip color for a known stage; unknown labels get a
/// neutral brand color.
pub fn stage_color(stage: Option<Stage>) -> Color {
    match stage {
        Some(Stage::NonDemented) => palette::STAGE_NON_DEMENTED,
        Some(Stage::VeryMildDemented) => palette::STAGE_VERY_MILD,
        Some(Stage::MildDemented) => palette::STAGE_MILD,
        Some(Stage::ModerateDemented) => palette::STAGE_MODERATE,
        None => palette::PRIMARY_500,
    }
}
