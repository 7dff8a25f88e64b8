// SPDX-License-Identifier: MPL-2.0
//! The document view port.
//!
//! The shell does not render web content itself; everything between a URL and
//! pixels is delegated to a document view behind the [`DocumentView`] trait.
//! The trait captures exactly the surface the shell consumes: imperative
//! commands (load, reload, history moves) and a stream of engine-driven
//! events polled by the update loop (progress, page completion, load
//! failures, and custom-view show/hide requests for embedded video).
//!
//! [`headless::HeadlessDocument`] is the built-in implementation: it keeps a
//! real navigation history and simulates the page lifecycle so the shell is
//! runnable and testable without an engine.

pub mod headless;
pub mod url;

pub use headless::HeadlessDocument;

use crate::error::LoadError;
use std::fmt;

/// Notification handle the document view hands out together with a custom
/// view. The presenter must call it exactly once, after the view has been
/// taken down, so the engine can release its playback resources.
pub type DismissCallback = Box<dyn FnOnce() + Send>;

/// An engine-supplied view to be shown full screen, typically video playback.
///
/// The view is owned by the document view; the shell only holds it while it
/// is being presented and must never outlive the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomView {
    /// Engine-assigned identifier, unique per session.
    pub id: u64,
    /// Display label, usually the media title.
    pub title: String,
}

/// Settings applied to the document view when the shell creates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSettings {
    /// Whether script execution is enabled.
    pub javascript_enabled: bool,
    /// User-agent string reported to servers.
    pub user_agent: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            javascript_enabled: true,
            user_agent: crate::app::config::DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Events emitted by the document view, drained via [`DocumentView::poll_events`].
pub enum DocumentEvent {
    /// Load progress in percent, `0..=100`.
    ProgressChanged(u8),
    /// A page finished loading and committed to history.
    PageFinished { url: String, title: Option<String> },
    /// A load was aborted; the previous page, if any, stays up.
    LoadFailed { url: String, error: LoadError },
    /// The engine asks the shell to present `view` full screen.
    ShowCustomView {
        view: CustomView,
        on_hidden: DismissCallback,
    },
    /// The engine asks the shell to take the current custom view down.
    HideCustomView,
}

impl fmt::Debug for DocumentEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentEvent::ProgressChanged(p) => write!(f, "ProgressChanged({p})"),
            DocumentEvent::PageFinished { url, title } => f
                .debug_struct("PageFinished")
                .field("url", url)
                .field("title", title)
                .finish(),
            DocumentEvent::LoadFailed { url, error } => f
                .debug_struct("LoadFailed")
                .field("url", url)
                .field("error", error)
                .finish(),
            DocumentEvent::ShowCustomView { view, .. } => f
                .debug_struct("ShowCustomView")
                .field("view", view)
                .finish_non_exhaustive(),
            DocumentEvent::HideCustomView => write!(f, "HideCustomView"),
        }
    }
}

/// The rendering surface the shell drives.
///
/// All methods are synchronous commands; anything the engine wants to tell
/// the shell comes back through [`poll_events`](Self::poll_events), which the
/// update loop drains after every command and on every tick.
pub trait DocumentView {
    /// Starts loading `url`, replacing any load already in flight.
    fn load(&mut self, url: &str);

    /// Reloads the current page, if any.
    fn reload(&mut self);

    /// Whether there is a history entry behind the current page.
    fn can_go_back(&self) -> bool;

    /// Navigates one history entry back. No-op without history.
    fn go_back(&mut self);

    /// Whether there is a history entry ahead of the current page.
    fn can_go_forward(&self) -> bool;

    /// Navigates one history entry forward. No-op without forward history.
    fn go_forward(&mut self);

    /// URL of the committed page, if any.
    fn current_url(&self) -> Option<&str>;

    /// Title of the committed page, if any.
    fn title(&self) -> Option<&str>;

    /// Whether a load is in flight.
    fn is_loading(&self) -> bool;

    /// Asks the engine to offer its current media as a fullscreen custom
    /// view. The request is answered asynchronously with
    /// [`DocumentEvent::ShowCustomView`], or ignored when there is nothing
    /// to present.
    fn request_custom_view(&mut self);

    /// Drains pending engine events. Implementations may advance internal
    /// state here; the shell polls on every tick, so this doubles as the
    /// simulation pump for engines without their own thread.
    fn poll_events(&mut self) -> Vec<DocumentEvent>;

    /// Releases engine resources. The document view must not be used again.
    fn destroy(&mut self);
}
