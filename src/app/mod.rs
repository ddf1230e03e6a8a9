// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page sections.
//!
//! The `App` struct wires together the workflow, the HTTP client, and the
//! section views, and translates messages into side effects like dispatching
//! a classification request. Policy decisions (endpoint resolution, minimum
//! perceived latency) stay close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::PredictClient;
use crate::config;
use crate::ui::navbar::Section;
use crate::ui::theme::ThemeMode;
use crate::workflow::Workflow;
use iced::{window, Element, Subscription, Task, Theme};
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

const APP_NAME: &str = "NeuroLens";

/// Radians the spinner advances per animation tick.
const SPINNER_STEP: f32 = 0.55;

/// Root Iced application state.
pub struct App {
    workflow: Workflow,
    client: PredictClient,
    /// Minimum perceived latency applied before each request.
    min_latency: Duration,
    theme_mode: ThemeMode,
    /// Problem found while loading the config file, shown as a warning banner.
    config_warning: Option<String>,
    /// Navbar link currently highlighted.
    active_section: Section,
    /// Whether the hero's project details panel is expanded.
    show_learn_more: bool,
    /// Spinner rotation in radians, advanced by `Message::Tick`.
    spinner_rotation: f32,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", self.workflow.state())
            .field("has_selection", &self.workflow.has_selection())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        let client = PredictClient::new(config.resolved_base_url(), config.request_timeout())
            .expect("HTTP client construction failed");
        Self {
            workflow: Workflow::new(),
            client,
            min_latency: Duration::ZERO,
            theme_mode: ThemeMode::System,
            config_warning: None,
            active_section: Section::Home,
            show_learn_more: false,
            spinner_rotation: 0.0,
        }
    }
}

impl App {
    /// Initializes application state from the config file and `Flags`, and
    /// optionally kicks off loading a preselected image.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load_with_override(flags.config_dir.clone());
        if let Some(warning) = &config_warning {
            log::warn!("{warning}");
        }

        // Endpoint precedence: command-line flag, then environment variable,
        // then the config file, then the built-in default.
        let base_url = flags
            .api_url
            .as_deref()
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| config.resolved_base_url());

        let client = PredictClient::new(&base_url, config.request_timeout())
            .expect("HTTP client construction failed");
        log::info!("classification endpoint: {}", client.predict_url());

        let app = App {
            workflow: Workflow::new(),
            client,
            min_latency: config.min_latency(),
            theme_mode: config.general.theme_mode,
            config_warning,
            active_section: Section::Home,
            show_learn_more: false,
            spinner_rotation: 0.0,
        };

        let task = match flags.file_path {
            Some(path) => update::handle_file_dropped(std::path::PathBuf::from(path)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match self.workflow.selected() {
            Some(scan) => format!("{} - {APP_NAME}", scan.file_name),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.workflow.is_loading()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            workflow: &mut self.workflow,
            client: &self.client,
            min_latency: self.min_latency,
            active_section: &mut self.active_section,
            show_learn_more: &mut self.show_learn_more,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Upload(upload_message) => {
                update::handle_upload_message(&mut ctx, upload_message)
            }
            Message::FileDialogResult(selection) => {
                if let Some(scan) = selection {
                    self.apply_selection(scan);
                }
                Task::none()
            }
            Message::FileDropped(path) => update::handle_file_dropped(path),
            Message::FileLoaded(result) => {
                match result {
                    Ok(scan) => self.apply_selection(scan),
                    Err(detail) => log::warn!("could not read image file: {detail}"),
                }
                Task::none()
            }
            Message::ClassificationCompleted { attempt, result } => {
                self.workflow.complete_submission(attempt, result);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.spinner_rotation =
                    (self.spinner_rotation + SPINNER_STEP) % std::f32::consts::TAU;
                Task::none()
            }
        }
    }

    /// Applies a newly loaded file. A pick made while a request is in flight
    /// still lands: `select_file` resets the analysis to `Idle`, and the
    /// superseded attempt's completion is discarded by its stale id.
    fn apply_selection(&mut self, scan: crate::workflow::SelectedScan) {
        log::info!("selected {} ({} bytes)", scan.file_name, scan.size());
        self.workflow.select_file(scan);
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            workflow: &self.workflow,
            config_warning: self.config_warning.as_deref(),
            active_section: self.active_section,
            show_learn_more: self.show_learn_more,
            spinner_rotation: self.spinner_rotation,
        })
    }
}
