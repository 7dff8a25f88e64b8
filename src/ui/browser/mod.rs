// SPDX-License-Identifier: MPL-2.0
//! Browser screen component.
//!
//! Owns the inline chrome state (address input, page title, load progress)
//! and translates widget messages into effects for the app update loop. The
//! document view itself lives with the app; this component only renders what
//! the document reports and asks for navigation through [`Effect`] values.

pub mod address_bar;
pub mod pane;
pub mod toolbar;

use crate::document::{url, CustomView};
use crate::i18n::fluent::I18n;
use iced::widget::Column;
use iced::{Element, Length};

/// Inline chrome state for the browser screen.
#[derive(Debug, Default)]
pub struct State {
    /// Current contents of the address input.
    pub address_input: String,
    /// URL of the committed page, mirrored from the document view.
    pub current_url: Option<String>,
    /// Title of the committed page, mirrored from the document view.
    pub page_title: Option<String>,
    /// Load progress in percent while a load is in flight.
    pub progress: Option<u8>,
}

/// Messages emitted by the browser chrome widgets.
#[derive(Debug, Clone)]
pub enum Message {
    AddressChanged(String),
    AddressSubmitted,
    ClearAddress,
    Back,
    Forward,
    Reload,
    /// Ask the engine to present its media full screen.
    EnterFullscreen,
    OpenFavorites,
    OpenSettings,
}

/// Effects the app update loop executes against the document view or the
/// screen router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    LoadUrl(String),
    HistoryBack,
    HistoryForward,
    Reload,
    RequestCustomView,
    OpenFavorites,
    OpenSettings,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a chrome message and returns the resulting effect.
    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::AddressChanged(value) => {
                self.address_input = value;
                Effect::None
            }
            Message::AddressSubmitted => Effect::LoadUrl(url::normalize(&self.address_input)),
            Message::ClearAddress => {
                self.address_input.clear();
                Effect::None
            }
            Message::Back => Effect::HistoryBack,
            Message::Forward => Effect::HistoryForward,
            Message::Reload => Effect::Reload,
            Message::EnterFullscreen => Effect::RequestCustomView,
            Message::OpenFavorites => Effect::OpenFavorites,
            Message::OpenSettings => Effect::OpenSettings,
        }
    }

    /// Mirrors a progress report from the document view. The indicator is
    /// shown while a load is in flight and hidden once it reaches 100.
    pub fn apply_progress(&mut self, progress: u8) {
        if progress >= 100 {
            self.progress = None;
        } else {
            self.progress = Some(progress);
        }
    }

    /// Mirrors a committed page: the address input follows the final URL,
    /// the way mobile shells overwrite whatever the user typed.
    pub fn apply_page_finished(&mut self, page_url: String, title: Option<String>) {
        self.address_input = page_url.clone();
        self.current_url = Some(page_url);
        self.page_title = title;
        self.progress = None;
    }

    /// Clears the progress indicator after a failed load.
    pub fn apply_load_failed(&mut self) {
        self.progress = None;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.progress.is_some()
    }
}

/// Contextual data needed to render the browser screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    /// The custom view being presented full screen, if any.
    pub fullscreen_view: Option<&'a CustomView>,
    /// Fullscreen container opacity for the current frame.
    pub overlay_opacity: f32,
}

/// Renders the browser screen: either the fullscreen container, or the
/// inline chrome stacked over the document pane. The two are never shown
/// together.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if let Some(custom_view) = ctx.fullscreen_view {
        return pane::fullscreen_view(custom_view, ctx.overlay_opacity, ctx.i18n);
    }

    let mut content = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(address_bar::view(ctx.i18n, &ctx.state.address_input))
        .push(toolbar::view(ctx.i18n, ctx.can_go_back, ctx.can_go_forward));

    if let Some(progress) = ctx.state.progress {
        content = content.push(pane::progress_view(progress));
    }

    content.push(pane::document_view(ctx.i18n, ctx.state)).into()
}
