// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, window) into app messages and drives the
//! periodic tick that advances fades, simulated loads, and toast expiry.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// Window close requests are intercepted on every screen so teardown can
/// run; everything else is routed as a raw event only when no widget
/// consumed it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }

        match status {
            event::Status::Ignored => Some(Message::RawEvent {
                window: window_id,
                event,
            }),
            event::Status::Captured => None,
        }
    })
}

/// Creates a periodic tick subscription, active only while something needs
/// to advance: a fullscreen fade, an in-flight page load, or a pending
/// notification.
pub fn create_tick_subscription(
    animating: bool,
    is_loading: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if animating || is_loading || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
