// SPDX-License-Identifier: MPL-2.0
//! Horizontal confidence meter.
//!
//! The fill width scales linearly with the confidence value: 0–100 maps to
//! 0–100% of the track. The accent color follows the predicted stage.

use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Color, Element, Length};

/// Renders the labelled meter: "Confidence: 87%" above a partially filled
/// track.
pub fn view<'a, Message: 'a>(confidence: f32, accent: Color) -> Element<'a, Message> {
    let label = Text::new(format!("Confidence: {:.0}%", confidence)).size(typography::BODY);

    let fill = Container::new(
        Space::new()
            .width(Length::Fixed(fill_width(confidence)))
            .height(Length::Fixed(sizing::CONFIDENCE_BAR_HEIGHT)),
    )
    .style(styles::container::meter_fill(accent));

    let track = Container::new(
        Row::new().push(fill).push(
            Space::new()
                .width(Length::Fill)
                .height(Length::Fixed(sizing::CONFIDENCE_BAR_HEIGHT)),
        ),
    )
    .width(Length::Fixed(sizing::CONFIDENCE_BAR_WIDTH))
    .style(styles::container::meter_track);

    Column::new()
        .spacing(spacing::XS)
        .push(label)
        .push(track)
        .into()
}

/// Fill width in track units for a confidence percentage. Split out so the
/// linear scaling is testable without a renderer.
pub fn fill_width(confidence: f32) -> f32 {
    sizing::CONFIDENCE_BAR_WIDTH * (confidence / 100.0).clamp(0.0, 1.0)
}
