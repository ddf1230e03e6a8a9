// SPDX-License-Identifier: MPL-2.0
//! Upload section: file selector, submit controls, and the results panel.
//!
//! The results panel mirrors the workflow state exactly: a microscope-style
//! placeholder when idle, the spinner while analyzing, the classification
//! card on success, and an inline banner on failure.

use crate::ui::components::{confidence_meter, error_banner};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::AnimatedSpinner;
use crate::workflow::{Workflow, WorkflowState};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, image::Image, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the upload section.
pub struct ViewContext<'a> {
    pub workflow: &'a Workflow,
    /// Spinner rotation in radians, advanced by the tick subscription.
    pub spinner_rotation: f32,
}

/// Messages emitted by the upload section.
#[derive(Debug, Clone)]
pub enum Message {
    PickFile,
    ClearFile,
    Submit,
}

/// Render the upload section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Text::new("Analyze MRI Scan").size(typography::TITLE_LG);

    let description = Text::new(
        "Upload an MRI brain scan image for analysis. Our AI model will classify the \
         image and provide detailed insights about potential Alzheimer's indicators.",
    )
    .size(typography::BODY_LG);

    let panels = Row::new()
        .spacing(spacing::LG)
        .push(upload_panel(&ctx))
        .push(results_panel(&ctx));

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
        .push(panels);

    Container::new(content)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .align_x(Horizontal::Center)
        .into()
}

/// Left panel: drop area, file details, error banner, and submit button.
fn upload_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let workflow = ctx.workflow;

    let drop_content: Element<'_, Message> = match workflow.preview() {
        Some(handle) => Image::new(handle.clone())
            .height(sizing::PREVIEW_MAX_HEIGHT)
            .into(),
        None => Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new("\u{2B06}").size(sizing::ICON_XL))
            .push(Text::new("Click or drag to upload MRI image").size(typography::BODY))
            .push(
                Text::new("Supports: JPG, PNG, DICOM")
                    .size(typography::CAPTION)
                    .color(theme::muted_text_color()),
            )
            .into(),
    };

    let drop_area = button(
        Container::new(drop_content)
            .width(Length::Fill)
            .height(sizing::DROP_AREA_HEIGHT)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::drop_area),
    )
    .on_press(Message::PickFile)
    .padding(0.0)
    .style(styles::button::text_button);

    let mut column = Column::new().spacing(spacing::SM).push(drop_area);

    if let Some(scan) = workflow.selected() {
        let details = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Text::new("\u{2713}")
                    .size(typography::BODY)
                    .color(theme::success_color()),
            )
            .push(Text::new(scan.file_name.clone()).size(typography::BODY))
            .push(iced::widget::space::horizontal())
            .push(
                button(Text::new("Remove").size(typography::BODY))
                    .on_press(Message::ClearFile)
                    .padding([spacing::XXS, spacing::XS])
                    .style(styles::button::text_button),
            );
        column = column.push(details);
    }

    if let WorkflowState::Failure(message) = workflow.state() {
        column = column.push(error_banner::view(error_banner::Severity::Error, message));
    }

    let submit_label = if workflow.is_loading() {
        "Analyzing..."
    } else {
        "Analyze Image"
    };
    let mut submit = button(Text::new(submit_label).size(typography::BODY))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);
    if workflow.can_submit() {
        submit = submit.on_press(Message::Submit);
    }

    column = column.push(submit);

    container(column)
        .width(Length::FillPortion(3))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

/// Right panel: placeholder, spinner, or the classification card.
fn results_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let workflow = ctx.workflow;

    let body: Element<'_, Message> = match workflow.state() {
        WorkflowState::Loading { .. } => Column::new()
            .spacing(spacing::MD)
            .align_x(Horizontal::Center)
            .push(AnimatedSpinner::new(ctx.spinner_rotation).into_element())
            .push(Text::new("Analyzing MRI scan...").size(typography::BODY))
            .into(),
        WorkflowState::Success(result) => result_card(result),
        WorkflowState::Idle | WorkflowState::Failure(_) => Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new("\u{1F52C}").size(sizing::ICON_XL))
            .push(
                Text::new("Upload an MRI scan to see the analysis results")
                    .size(typography::BODY)
                    .color(theme::muted_text_color()),
            )
            .into(),
    };

    container(
        Container::new(body)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .height(Length::Fill),
    )
    .width(Length::Fixed(sizing::RESULTS_PANEL_WIDTH))
    .height(sizing::DROP_AREA_HEIGHT + 2.0 * spacing::LG)
    .padding(spacing::LG)
    .style(styles::container::card)
    .into()
}

/// Classification card: stage badge plus the confidence meter.
fn result_card<'a>(result: &crate::domain::ClassificationResult) -> Element<'a, Message> {
    let accent = theme::stage_color(result.stage());

    let badge = container(Text::new(result.class.clone()).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::container::badge(accent));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(Text::new("Classification").size(typography::TITLE_SM))
        .push(badge);

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(Text::new("Analysis Results").size(typography::TITLE_MD))
        .push(header)
        .push(confidence_meter::view(result.confidence, accent))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClassificationResult;
    use crate::workflow::SelectedScan;

    fn workflow_with_file() -> Workflow {
        let mut workflow = Workflow::new();
        workflow.select_file(SelectedScan::from_bytes("scan.png", vec![0x89, 0x50]));
        workflow
    }

    #[test]
    fn renders_empty_state() {
        let workflow = Workflow::new();
        let _element = view(ViewContext {
            workflow: &workflow,
            spinner_rotation: 0.0,
        });
    }

    #[test]
    fn renders_preview_and_file_details() {
        let workflow = workflow_with_file();
        assert!(workflow.preview().is_some());
        let _element = view(ViewContext {
            workflow: &workflow,
            spinner_rotation: 0.0,
        });
    }

    #[test]
    fn renders_loading_state() {
        let mut workflow = workflow_with_file();
        workflow.begin_submission();
        assert!(workflow.is_loading());
        let _element = view(ViewContext {
            workflow: &workflow,
            spinner_rotation: 1.2,
        });
    }

    #[test]
    fn renders_success_state() {
        let mut workflow = workflow_with_file();
        let attempt = match workflow.begin_submission() {
            crate::workflow::SubmitOutcome::Started { attempt, .. } => attempt,
            other => panic!("unexpected outcome: {other:?}"),
        };
        workflow.complete_submission(
            attempt,
            Ok(ClassificationResult {
                class: "Mild Demented".into(),
                confidence: 87.0,
            }),
        );
        let _element = view(ViewContext {
            workflow: &workflow,
            spinner_rotation: 0.0,
        });
    }
}
