// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application update loop.
//!
//! Each handler borrows the state it touches through `UpdateContext` and
//! returns the follow-up task, keeping `App::update` a thin dispatcher.

use super::Message;
use crate::api::{self, PredictClient};
use crate::ui::navbar::Section;
use crate::ui::{hero, navbar, upload};
use crate::workflow::{SelectedScan, SubmitOutcome, Workflow};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::path::PathBuf;
use std::time::Duration;

/// Id of the single page scrollable, shared with `view.rs`.
pub const PAGE_SCROLLABLE_ID: &str = "page-scrollable";

/// Mutable borrows of the application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub workflow: &'a mut Workflow,
    pub client: &'a PredictClient,
    pub min_latency: Duration,
    pub active_section: &'a mut Section,
    pub show_learn_more: &'a mut bool,
}

/// Handles navbar messages, scrolling to the selected section.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.active_section) {
        navbar::Event::Navigate(section) => scroll_to_section(section),
    }
}

/// Handles hero messages ("Try It Now", "Learn More").
pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match hero::update(message, ctx.show_learn_more) {
        hero::Event::Navigate(section) => {
            *ctx.active_section = section;
            scroll_to_section(section)
        }
        hero::Event::None => Task::none(),
    }
}

/// Handles upload-section messages: file picking, clearing, and submission.
pub fn handle_upload_message(
    ctx: &mut UpdateContext<'_>,
    message: upload::Message,
) -> Task<Message> {
    match message {
        upload::Message::PickFile => open_file_dialog(),
        upload::Message::ClearFile => {
            ctx.workflow.clear_file();
            Task::none()
        }
        upload::Message::Submit => submit(ctx),
    }
}

/// Starts a submission if the workflow allows it.
fn submit(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.workflow.begin_submission() {
        SubmitOutcome::Started { attempt, scan } => {
            let client = ctx.client.clone();
            let delay = ctx.min_latency;
            Task::perform(
                api::classify_after_delay(client, scan, delay),
                move |result| Message::ClassificationCompleted { attempt, result },
            )
        }
        SubmitOutcome::MissingFile | SubmitOutcome::AlreadyLoading => Task::none(),
    }
}

/// Opens the image picker and reads the chosen file off the UI thread.
fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async move {
            let handle = rfd::AsyncFileDialog::new()
                .set_title("Select MRI Image")
                .add_filter(
                    "Images",
                    &["jpg", "jpeg", "png", "gif", "webp", "bmp", "tif", "tiff", "dcm"],
                )
                .pick_file()
                .await?;

            let bytes = handle.read().await;
            Some(SelectedScan::from_bytes(handle.file_name(), bytes))
        },
        Message::FileDialogResult,
    )
}

/// Reads a dropped or preselected file into a scan.
pub fn handle_file_dropped(path: PathBuf) -> Task<Message> {
    Task::perform(
        async move {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "scan".to_string());
            match tokio::fs::read(&path).await {
                Ok(bytes) => Ok(SelectedScan::from_bytes(file_name, bytes)),
                Err(e) => Err(format!("{}: {e}", path.display())),
            }
        },
        Message::FileLoaded,
    )
}

/// Scrolls the page to the given section.
fn scroll_to_section(section: Section) -> Task<Message> {
    operation::snap_to(
        Id::new(PAGE_SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: section.scroll_fraction(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(
        workflow: &'a mut Workflow,
        client: &'a PredictClient,
        active_section: &'a mut Section,
        show_learn_more: &'a mut bool,
    ) -> UpdateContext<'a> {
        UpdateContext {
            workflow,
            client,
            min_latency: Duration::ZERO,
            active_section,
            show_learn_more,
        }
    }

    fn test_client() -> PredictClient {
        PredictClient::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("client")
    }

    #[test]
    fn submit_without_file_sets_validation_error() {
        let mut workflow = Workflow::new();
        let client = test_client();
        let mut section = Section::Home;
        let mut learn_more = false;
        let mut ctx = context(&mut workflow, &client, &mut section, &mut learn_more);

        let _task = handle_upload_message(&mut ctx, upload::Message::Submit);

        assert!(matches!(
            workflow.state(),
            crate::workflow::WorkflowState::Failure(msg)
                if msg == crate::workflow::MISSING_FILE_MESSAGE
        ));
    }

    #[test]
    fn clear_file_resets_selection() {
        let mut workflow = Workflow::new();
        workflow.select_file(SelectedScan::from_bytes("scan.png", vec![1, 2, 3]));
        let client = test_client();
        let mut section = Section::Home;
        let mut learn_more = false;
        let mut ctx = context(&mut workflow, &client, &mut section, &mut learn_more);

        let _task = handle_upload_message(&mut ctx, upload::Message::ClearFile);

        assert!(!workflow.has_selection());
        assert!(workflow.preview().is_none());
    }

    #[test]
    fn hero_try_it_now_activates_upload_section() {
        let mut workflow = Workflow::new();
        let client = test_client();
        let mut section = Section::Home;
        let mut learn_more = false;
        let mut ctx = context(&mut workflow, &client, &mut section, &mut learn_more);

        let _task = handle_hero_message(&mut ctx, hero::Message::TryItNow);

        assert_eq!(section, Section::Upload);
    }
}
