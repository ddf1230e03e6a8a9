// SPDX-License-Identifier: MPL-2.0
//! Inline alert banner for user-facing error and warning messages.
//!
//! Shows a severity-colored accent border, a "!" glyph, and the message.
//! Used below the upload form for validation and analysis failures.

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use iced::widget::{container, Container, Row, Text};
use iced::{alignment, Border, Color, Element, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl Severity {
    pub fn color(&self) -> Color {
        match self {
            Severity::Error => palette::ERROR_500,
            Severity::Warning => palette::WARNING_500,
        }
    }
}

/// Renders an inline banner with the given severity and message.
pub fn view<'a, Message: 'a>(severity: Severity, message: &str) -> Element<'a, Message> {
    let accent = severity.color();

    let glyph = Text::new("!")
        .size(typography::TITLE_SM)
        .style(move |_theme: &Theme| iced::widget::text::Style {
            color: Some(accent),
        });

    let body = Text::new(message.to_string()).size(typography::BODY);

    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(glyph)
        .push(body);

    Container::new(row)
        .padding([spacing::XS, spacing::SM])
        .style(move |theme: &Theme| container::Style {
            background: Some(Color { a: 0.12, ..accent }.into()),
            border: Border {
                color: accent,
                width: 1.0,
                radius: radius::SM.into(),
            },
            text_color: Some(theme.palette().text),
            ..Default::default()
        })
        .into()
}
