// SPDX-License-Identifier: MPL-2.0
//! "About" section: what the disease is, what the classifier offers, and a
//! strip visualizing the four stages of progression.

use crate::domain::Stage;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

struct FeatureCard {
    title: &'static str,
    body: &'static str,
}

const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        title: "Advanced Analysis",
        body: "Utilizes convolutional neural networks for classification of Alzheimer's \
               stages from MRI scans with a focus on achieving high accuracy across all \
               stages.",
    },
    FeatureCard {
        title: "Early Detection",
        body: "Identifies subtle changes in brain structure indicative of early-stage \
               Alzheimer's that might be missed in routine examinations.",
    },
    FeatureCard {
        title: "Comprehensive Insights",
        body: "Provides detailed analysis with confidence scores for different stages of \
               Alzheimer's progression.",
    },
];

/// Render the about section. Purely presentational.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let heading = Text::new("About Alzheimer's Disease").size(typography::TITLE_LG);

    let description = Text::new(
        "Alzheimer's is a progressive neurodegenerative disorder affecting memory, \
         thinking, and behavior. Early detection significantly improves management and \
         care planning, providing patients and families valuable time to prepare and make \
         informed decisions.",
    )
    .size(typography::BODY_LG);

    let mut cards = Row::new().spacing(spacing::MD);
    for card in &FEATURE_CARDS {
        cards = cards.push(feature_card(card));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(sizing::SECTION_MAX_WIDTH)
        .push(heading)
        .push(
            Container::new(description)
                .max_width(sizing::CONTENT_MAX_WIDTH)
                .align_x(Horizontal::Center),
        )
        .push(cards)
        .push(progression_strip());

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}

fn feature_card<'a, Message: 'a>(card: &FeatureCard) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(card.title).size(typography::TITLE_MD))
        .push(Text::new(card.body).size(typography::BODY));

    container(column)
        .width(Length::FillPortion(1))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

/// Four colored circles joined by connectors, one per stage.
fn progression_strip<'a, Message: 'a>() -> Element<'a, Message> {
    let title = Text::new("Understanding The Progression").size(typography::TITLE_MD);

    let mut strip = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center);

    for (index, stage) in Stage::ALL.iter().enumerate() {
        if index > 0 {
            strip = strip.push(connector());
        }
        strip = strip.push(stage_item(*stage));
    }

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(strip)
        .into()
}

fn stage_item<'a, Message: 'a>(stage: Stage) -> Element<'a, Message> {
    let accent = theme::stage_color(Some(stage));

    let circle = container(Space::new().width(0.0).height(0.0))
        .width(sizing::STAGE_CIRCLE)
        .height(sizing::STAGE_CIRCLE)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(accent.into()),
            border: Border {
                radius: (sizing::STAGE_CIRCLE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(circle)
        .push(Text::new(stage.short_name()).size(typography::CAPTION))
        .into()
}

fn connector<'a, Message: 'a>() -> Element<'a, Message> {
    container(Space::new().width(sizing::STAGE_CONNECTOR_WIDTH).height(2.0))
        .style(|theme: &Theme| iced::widget::container::Style {
            background: Some(theme.extended_palette().background.strong.color.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn about_section_renders() {
        let _element: Element<'_, ()> = view();
    }

    #[test]
    fn feature_cards_cover_analysis_detection_and_insights() {
        let titles: Vec<&str> = FEATURE_CARDS.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["Advanced Analysis", "Early Detection", "Comprehensive Insights"]
        );
    }
}
