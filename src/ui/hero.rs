// SPDX-License-Identifier: MPL-2.0
//! Landing section with the headline, call-to-action buttons, and the
//! collapsible project details panel behind "Learn More".

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::navbar::Section;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, container, Column, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the hero section.
pub struct ViewContext {
    pub show_learn_more: bool,
}

/// Messages emitted by the hero section.
#[derive(Debug, Clone)]
pub enum Message {
    TryItNow,
    ToggleLearnMore,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Section),
    None,
}

/// Process a hero message and return the corresponding event.
pub fn update(message: Message, show_learn_more: &mut bool) -> Event {
    match message {
        Message::TryItNow => Event::Navigate(Section::Upload),
        Message::ToggleLearnMore => {
            *show_learn_more = !*show_learn_more;
            Event::None
        }
    }
}

/// Render the hero section.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let title = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new("Alzheimer's")
                .size(typography::TITLE_XL)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::PRIMARY_400),
                }),
        )
        .push(Text::new("Detection").size(typography::TITLE_XL));

    let subtitle =
        Text::new("Empowering early diagnosis through advanced MRI analysis and deep learning")
            .size(typography::BODY_LG)
            .style(|theme: &Theme| iced::widget::text::Style {
                color: Some(theme.extended_palette().background.weak.text),
            });

    let learn_more_label = if ctx.show_learn_more {
        "Learn More \u{25B4}"
    } else {
        "Learn More \u{25BE}"
    };

    let actions = Row::new()
        .spacing(spacing::SM)
        .push(
            button(Text::new("Try It Now").size(typography::BODY))
                .on_press(Message::TryItNow)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        )
        .push(
            button(Text::new(learn_more_label).size(typography::BODY))
                .on_press(Message::ToggleLearnMore)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::secondary),
        );

    let mut content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(title)
        .push(subtitle)
        .push(actions);

    if ctx.show_learn_more {
        content = content.push(project_details());
    }

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}

/// Collapsible panel describing the project behind the classifier.
fn project_details<'a>() -> Element<'a, Message> {
    let overview = detail_block(
        "Project Overview",
        "This project addresses the crucial task of Alzheimer's Disease classification \
         using deep learning techniques. By leveraging a diverse dataset comprising four \
         classes - Non-Demented, Very Mild Demented, Mild Demented, and Moderate Demented - \
         our study evaluates CNN-based models to accurately diagnose different stages of \
         Alzheimer's.",
    );

    let significance = detail_block(
        "Research Significance",
        "Alzheimer's Disease is the most common form of dementia, affecting millions \
         worldwide. Early detection is critical for effective management and intervention. \
         This research focuses on using CNNs to improve diagnostic accuracy and enable \
         earlier intervention, potentially improving patient outcomes.",
    );

    let approach = detail_block(
        "Technical Approach",
        "Our system employs Convolutional Neural Networks (CNNs) trained on a dataset of \
         MRI brain scans. The study evaluates CNN architectures, including ResNet50, to \
         classify Alzheimer's stages with high accuracy and consistent performance metrics.",
    );

    let column = Column::new()
        .spacing(spacing::MD)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(overview)
        .push(significance)
        .push(approach);

    container(column)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn detail_block<'a>(heading: &'a str, body: &'a str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(Text::new(heading).size(typography::TITLE_SM))
        .push(Text::new(body).size(typography::BODY))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_it_now_navigates_to_upload() {
        let mut show = false;
        let event = update(Message::TryItNow, &mut show);
        assert!(matches!(event, Event::Navigate(Section::Upload)));
        assert!(!show);
    }

    #[test]
    fn learn_more_toggles() {
        let mut show = false;
        assert!(matches!(
            update(Message::ToggleLearnMore, &mut show),
            Event::None
        ));
        assert!(show);
        update(Message::ToggleLearnMore, &mut show);
        assert!(!show);
    }

    #[test]
    fn hero_renders_with_and_without_details() {
        let _closed = view(ViewContext {
            show_learn_more: false,
        });
        let _open = view(ViewContext {
            show_learn_more: true,
        });
    }
}
