// SPDX-License-Identifier: MPL-2.0
//! "System Design" section: the four-step analysis workflow and a figure of
//! the CNN model layers.

use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

struct WorkflowStep {
    title: &'static str,
    body: &'static str,
}

const WORKFLOW_STEPS: [WorkflowStep; 4] = [
    WorkflowStep {
        title: "Data Preparation",
        body: "MRI images undergo preprocessing including normalization, noise reduction, \
               and standardization.",
    },
    WorkflowStep {
        title: "Feature Extraction",
        body: "Convolutional layers identify critical patterns and biomarkers in brain \
               structure.",
    },
    WorkflowStep {
        title: "CNN Processing",
        body: "Deep learning model analyzes extracted features to classify the image.",
    },
    WorkflowStep {
        title: "Classification",
        body: "Final classification with confidence scores for each Alzheimer's stage.",
    },
];

struct ModelLayer {
    name: &'static str,
    shape: Option<&'static str>,
}

const MODEL_LAYERS: [ModelLayer; 7] = [
    ModelLayer {
        name: "Input Layer",
        shape: Some("224\u{D7}224\u{D7}3"),
    },
    ModelLayer {
        name: "Conv2D",
        shape: Some("32 filters"),
    },
    ModelLayer {
        name: "MaxPooling",
        shape: None,
    },
    ModelLayer {
        name: "Conv2D",
        shape: Some("64 filters"),
    },
    ModelLayer {
        name: "MaxPooling",
        shape: None,
    },
    ModelLayer {
        name: "Dense",
        shape: Some("128 units"),
    },
    ModelLayer {
        name: "Output",
        shape: Some("4 classes"),
    },
];

/// Render the system design section. Purely presentational.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    let heading = Text::new("System Design & Architecture").size(typography::TITLE_LG);

    let description = Text::new(
        "Our Alzheimer's detection system leverages a sophisticated architecture designed \
         for accuracy and reliability. The modular approach ensures seamless integration \
         of data preparation, feature extraction, and prediction.",
    )
    .size(typography::BODY_LG);

    let mut steps = Column::new().spacing(spacing::MD);
    for (index, step) in WORKFLOW_STEPS.iter().enumerate() {
        steps = steps.push(workflow_step(index + 1, step));
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
        .push(steps)
        .push(model_figure());

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}

fn workflow_step<'a, Message: 'a>(number: usize, step: &WorkflowStep) -> Element<'a, Message> {
    let number_circle = container(
        Text::new(number.to_string())
            .size(typography::TITLE_SM)
            .style(|_theme: &Theme| iced::widget::text::Style {
                color: Some(palette::WHITE),
            }),
    )
    .width(sizing::STAGE_CIRCLE + spacing::XS)
    .height(sizing::STAGE_CIRCLE + spacing::XS)
    .align_x(Horizontal::Center)
    .align_y(Vertical::Center)
    .style(|_theme: &Theme| iced::widget::container::Style {
        background: Some(palette::PRIMARY_500.into()),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    });

    let text = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(step.title).size(typography::TITLE_MD))
        .push(Text::new(step.body).size(typography::BODY));

    Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(number_circle)
        .push(text)
        .into()
}

/// Horizontal strip of boxes, one per model layer.
fn model_figure<'a, Message: 'a>() -> Element<'a, Message> {
    let title = Text::new("CNN Model Architecture").size(typography::TITLE_MD);

    let mut layers = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for layer in &MODEL_LAYERS {
        layers = layers.push(layer_box(layer));
    }

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(layers)
        .into()
}

fn layer_box<'a, Message: 'a>(layer: &ModelLayer) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(Text::new(layer.name).size(typography::BODY));

    if let Some(shape) = layer.shape {
        column = column.push(Text::new(shape).size(typography::CAPTION).style(
            |theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            },
        ));
    }

    container(column)
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::card)
        .into()
}
