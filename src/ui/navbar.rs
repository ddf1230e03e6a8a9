// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar with the brand mark and section links.
//!
//! Clicking a link scrolls the page to the matching section; the link for
//! the section currently in view is highlighted.

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length, Theme,
};

/// The four sections of the page, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    System,
    Upload,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::System,
        Section::Upload,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::System => "System Design",
            Section::Upload => "Analyze",
        }
    }

    /// Vertical scroll fraction of this section within the page.
    pub fn scroll_fraction(&self) -> f32 {
        match self {
            Section::Home => 0.0,
            Section::About => 0.28,
            Section::System => 0.58,
            Section::Upload => 1.0,
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext {
    pub active_section: Section,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Section),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    Navigate(Section),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, active_section: &mut Section) -> Event {
    match message {
        Message::Navigate(section) => {
            *active_section = section;
            Event::Navigate(section)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let brand = Text::new("NeuroLens")
        .size(typography::TITLE_SM)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::PRIMARY_400),
        });

    let mut links = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for section in Section::ALL {
        let active = section == ctx.active_section;
        links = links.push(
            button(Text::new(section.label()).size(typography::BODY))
                .on_press(Message::Navigate(section))
                .padding([spacing::XS, spacing::SM])
                .style(styles::button::nav_link(active)),
        );
    }

    let bar = Row::new()
        .spacing(spacing::LG)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(iced::widget::space::horizontal())
        .push(links);

    Container::new(bar)
        .width(Length::Fill)
        .style(styles::container::toolbar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigate_updates_active_section() {
        let mut active = Section::Home;
        let event = update(Message::Navigate(Section::Upload), &mut active);
        assert_eq!(active, Section::Upload);
        assert!(matches!(event, Event::Navigate(Section::Upload)));
    }

    #[test]
    fn sections_are_ordered_by_scroll_fraction() {
        let fractions: Vec<f32> = Section::ALL.iter().map(|s| s.scroll_fraction()).collect();
        for pair in fractions.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Section::ALL[0].scroll_fraction(), 0.0);
        assert_eq!(Section::ALL[3].scroll_fraction(), 1.0);
    }

    #[test]
    fn navbar_view_renders() {
        let ctx = ViewContext {
            active_section: Section::Home,
        };
        let _element = view(ctx);
    }
}
