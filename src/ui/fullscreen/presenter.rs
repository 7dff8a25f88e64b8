// SPDX-License-Identifier: MPL-2.0
//! Fullscreen presentation state machine.
//!
//! The presenter owns the transition between inline (windowed) browsing and
//! fullscreen presentation of a single engine-supplied custom view. State is
//! a tagged enum holding its payload only where one exists, so an
//! inconsistent "fullscreen flag set but no view held" combination cannot be
//! represented.
//!
//! Events come from three sources: the document view (show/hide custom view),
//! user input (back navigation), and the window (resize, teardown). Side
//! effects are returned as [`Effect`] values for the app update loop to
//! execute; whether the inline chrome or the overlay container is rendered is
//! derived from the presenter by `view()`.
//!
//! The dismissal callback handed in with the view fires exactly once per
//! entered session, always on the transition back to inline — either when the
//! exit fade completes, or synchronously on forced teardown.

use super::fade::Fade;
use crate::document::{CustomView, DismissCallback};
use std::time::{Duration, Instant};

/// Externally observable presentation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inline,
    EnteringFullscreen,
    Fullscreen,
    ExitingFullscreen,
}

/// Side effects for the host to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Put the window into fullscreen mode and hide system chrome.
    ApplyFullscreenChrome,
    /// Restore windowed mode and system chrome.
    RestoreWindowChrome,
    /// Re-attach the held view so it fills the container (after a resize).
    RelayoutFullscreenView,
}

/// One fullscreen presentation: the engine's view plus its dismissal callback.
struct Session {
    view: CustomView,
    on_hidden: Option<DismissCallback>,
}

impl Session {
    fn new(view: CustomView, on_hidden: DismissCallback) -> Self {
        Self {
            view,
            on_hidden: Some(on_hidden),
        }
    }

    /// Notifies the engine that its view is gone. Idempotent: the callback is
    /// taken on first use, so a second finish cannot fire it again.
    fn finish(&mut self) {
        if let Some(on_hidden) = self.on_hidden.take() {
            on_hidden();
        }
    }
}

enum State {
    Inline,
    Entering { session: Session, fade: Fade },
    Active { session: Session },
    Exiting { session: Session, fade: Fade },
}

impl State {
    fn session(&self) -> Option<&Session> {
        match self {
            State::Inline => None,
            State::Entering { session, .. }
            | State::Active { session }
            | State::Exiting { session, .. } => Some(session),
        }
    }
}

pub struct Presenter {
    state: State,
    fade_duration: Duration,
}

impl Presenter {
    #[must_use]
    pub fn new(fade_duration: Duration) -> Self {
        Self {
            state: State::Inline,
            fade_duration,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Inline => Phase::Inline,
            State::Entering { .. } => Phase::EnteringFullscreen,
            State::Active { .. } => Phase::Fullscreen,
            State::Exiting { .. } => Phase::ExitingFullscreen,
        }
    }

    /// Whether a fullscreen session exists. Back navigation is intercepted
    /// whenever this holds.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        !matches!(self.state, State::Inline)
    }

    /// Whether the inline chrome (document view, button bar, address bar,
    /// progress indicator) should be rendered.
    #[must_use]
    pub fn inline_ui_visible(&self) -> bool {
        matches!(self.state, State::Inline)
    }

    /// The view currently being presented, if any.
    #[must_use]
    pub fn active_view(&self) -> Option<&CustomView> {
        self.state.session().map(|session| &session.view)
    }

    /// Opacity of the fullscreen container at `now`.
    #[must_use]
    pub fn overlay_opacity(&self, now: Instant) -> f32 {
        match &self.state {
            State::Inline => 0.0,
            State::Active { .. } => 1.0,
            State::Entering { fade, .. } | State::Exiting { fade, .. } => fade.opacity(now),
        }
    }

    /// Whether a transition is in flight and ticks are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(
            self.state,
            State::Entering { .. } | State::Exiting { .. }
        )
    }

    /// The document view asked to present `view` full screen.
    ///
    /// If a session is already active it is finalized synchronously first
    /// (chrome restored, callback fired, no animation) and the new request is
    /// dropped; the caller re-requests once it observes the exit. A request
    /// arriving while an exit fade is still in flight is rejected outright.
    pub fn enter_requested(
        &mut self,
        view: CustomView,
        on_hidden: DismissCallback,
        now: Instant,
    ) -> Vec<Effect> {
        match self.phase() {
            Phase::Inline => {
                self.state = State::Entering {
                    session: Session::new(view, on_hidden),
                    fade: Fade::fade_in(now, self.fade_duration),
                };
                vec![Effect::ApplyFullscreenChrome]
            }
            Phase::EnteringFullscreen | Phase::Fullscreen => self.finish_session(),
            Phase::ExitingFullscreen => Vec::new(),
        }
    }

    /// The document view (or the user) asked to leave fullscreen.
    ///
    /// Starts the exit fade; chrome is restored and the callback fired when
    /// the fade completes. A duplicate request, or one arriving with nothing
    /// presented, is a no-op rather than an error: rendering engines are
    /// known to signal hide more than once.
    pub fn exit_requested(&mut self, now: Instant) -> Vec<Effect> {
        match std::mem::replace(&mut self.state, State::Inline) {
            State::Entering { session, .. } | State::Active { session } => {
                self.state = State::Exiting {
                    session,
                    fade: Fade::fade_out(now, self.fade_duration),
                };
                Vec::new()
            }
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    /// Advances any in-flight transition.
    pub fn tick(&mut self, now: Instant) -> Vec<Effect> {
        match std::mem::replace(&mut self.state, State::Inline) {
            State::Entering { session, fade } => {
                if fade.is_complete(now) {
                    self.state = State::Active { session };
                } else {
                    self.state = State::Entering { session, fade };
                }
                Vec::new()
            }
            State::Exiting { mut session, fade } => {
                if fade.is_complete(now) {
                    session.finish();
                    vec![Effect::RestoreWindowChrome]
                } else {
                    self.state = State::Exiting { session, fade };
                    Vec::new()
                }
            }
            other => {
                self.state = other;
                Vec::new()
            }
        }
    }

    /// The hosting window is going away: force inline state without waiting
    /// for any animation, still notifying the engine.
    pub fn host_destroyed(&mut self) -> Vec<Effect> {
        self.finish_session()
    }

    /// The window geometry changed (the desktop analogue of rotation). The
    /// held view is re-attached so it fills the container; state is
    /// unchanged.
    pub fn orientation_changed(&mut self) -> Vec<Effect> {
        if self.state.session().is_some() {
            vec![Effect::RelayoutFullscreenView]
        } else {
            Vec::new()
        }
    }

    /// Synchronously ends the current session, if any.
    fn finish_session(&mut self) -> Vec<Effect> {
        match std::mem::replace(&mut self.state, State::Inline) {
            State::Inline => Vec::new(),
            State::Entering { mut session, .. }
            | State::Active { mut session }
            | State::Exiting { mut session, .. } => {
                session.finish();
                vec![Effect::RestoreWindowChrome]
            }
        }
    }
}
