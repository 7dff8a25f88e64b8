// SPDX-License-Identifier: MPL-2.0
//! Back-navigation dispatch.
//!
//! A back action runs through an ordered chain of handlers, each of which
//! either consumes the action or passes it down:
//!
//! 1. an active fullscreen session consumes it as an exit request;
//! 2. document history consumes it as a history-back move;
//! 3. otherwise it propagates to the platform default (closing the window).

use crate::document::DocumentView;
use crate::ui::fullscreen::{presenter::Effect, Presenter};
use std::time::Instant;

/// What the back action was consumed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    /// The fullscreen session started exiting.
    ExitedFullscreen,
    /// The document view navigated one history entry back.
    WentBack,
    /// Nothing consumed the action; the platform default applies.
    Propagate,
}

/// Runs the back action through the handler chain.
pub fn dispatch(
    presenter: &mut Presenter,
    document: &mut dyn DocumentView,
    now: Instant,
) -> (BackOutcome, Vec<Effect>) {
    if presenter.is_fullscreen() {
        return (BackOutcome::ExitedFullscreen, presenter.exit_requested(now));
    }

    if document.can_go_back() {
        document.go_back();
        return (BackOutcome::WentBack, Vec::new());
    }

    (BackOutcome::Propagate, Vec::new())
}
