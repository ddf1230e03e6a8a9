// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable document: hero, about, system design, and
//! upload sections under a fixed navbar, with a short footer at the end.

use super::update::PAGE_SCROLLABLE_ID;
use super::Message;
use crate::ui::components::error_banner;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::navbar::Section;
use crate::ui::{about_section, hero, navbar, system_section, theme, upload};
use crate::workflow::Workflow;
use iced::widget::{Column, Container, Id, Scrollable, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub workflow: &'a Workflow,
    /// Config-load problem to surface below the navbar, if any.
    pub config_warning: Option<&'a str>,
    pub active_section: Section,
    pub show_learn_more: bool,
    pub spinner_rotation: f32,
}

/// Renders the whole page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar = navbar::view(navbar::ViewContext {
        active_section: ctx.active_section,
    })
    .map(Message::Navbar);

    let hero = hero::view(hero::ViewContext {
        show_learn_more: ctx.show_learn_more,
    })
    .map(Message::Hero);

    let upload = upload::view(upload::ViewContext {
        workflow: ctx.workflow,
        spinner_rotation: ctx.spinner_rotation,
    })
    .map(Message::Upload);

    let sections = Column::new()
        .width(Length::Fill)
        .push(hero)
        .push(about_section::view())
        .push(system_section::view())
        .push(upload)
        .push(footer());

    let page = Scrollable::new(sections)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layout = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(navbar);

    if let Some(message) = ctx.config_warning {
        layout = layout.push(
            Container::new(error_banner::view(error_banner::Severity::Warning, message))
                .width(Length::Fill)
                .padding([spacing::XS, spacing::LG]),
        );
    }

    layout.push(page).into()
}

fn footer<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new("NeuroLens").size(typography::TITLE_SM))
        .push(
            Text::new("Alzheimer's Detection using Deep Learning and Neural Networks")
                .size(typography::CAPTION)
                .color(theme::muted_text_color()),
        );

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::LG, spacing::LG])
        .align_x(Horizontal::Center)
        .style(|theme: &iced::Theme| iced::widget::container::Style {
            background: Some(theme.extended_palette().background.weak.color.into()),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_renders_in_every_workflow_state() {
        let workflow = Workflow::new();
        let _element = view(ViewContext {
            workflow: &workflow,
            config_warning: None,
            active_section: Section::Home,
            show_learn_more: true,
            spinner_rotation: 0.0,
        });
    }

    #[test]
    fn page_renders_with_config_warning_banner() {
        let workflow = Workflow::new();
        let _element = view(ViewContext {
            workflow: &workflow,
            config_warning: Some("could not parse settings.toml, using defaults"),
            active_section: Section::Home,
            show_learn_more: false,
            spinner_rotation: 0.0,
        });
    }
}
