// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources: native window events (file drops) and a periodic tick that
//! runs only while a request is in flight, to animate the spinner.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Interval between spinner animation frames.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Listens for files dropped on the window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(iced::window::Event::FileDropped(path)) => {
            Some(Message::FileDropped(path))
        }
        _ => None,
    })
}

/// Ticks while an analysis is running so the spinner keeps turning.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
