// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles for cards, panels, and badges.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Border, Color, Theme};

/// Card surface with subtle background and rounded border, used by feature
/// cards and section panels.
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::MD.into(),
            width: 1.0,
            color: theme.extended_palette().background.strong.color,
        },
        ..Default::default()
    }
}

/// Dashed-feel drop area for the file selector.
pub fn drop_area(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            radius: radius::LG.into(),
            width: 2.0,
            color: theme.extended_palette().background.strong.color,
        },
        ..Default::default()
    }
}

/// Navbar background strip.
pub fn toolbar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        border: Border {
            width: 1.0,
            color: theme.extended_palette().background.strong.color,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pill-shaped badge tinted with the given accent color.
pub fn badge(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(
            Color {
                a: opacity::OVERLAY_SUBTLE,
                ..accent
            }
            .into(),
        ),
        border: Border {
            radius: radius::FULL.into(),
            width: 1.0,
            color: accent,
        },
        text_color: Some(accent),
        ..Default::default()
    }
}

/// Solid track behind the confidence fill.
pub fn meter_track(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.strong.color.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Filled portion of the confidence meter.
pub fn meter_fill(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(accent.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
