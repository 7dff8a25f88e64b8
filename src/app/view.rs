// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen and stacks the toast overlay on top. The
//! browser screen derives everything fullscreen-related from the presenter:
//! inline chrome is rendered iff the presenter is inline, and the overlay
//! container follows the presenter's fade opacity.

use super::{Message, Screen};
use crate::app::persisted_state::AppState;
use crate::document::DocumentView;
use crate::i18n::fluent::I18n;
use crate::ui::browser;
use crate::ui::favorites;
use crate::ui::fullscreen::Presenter;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::settings;
use iced::widget::Stack;
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub browser: &'a browser::State,
    pub settings: &'a settings::State,
    pub document: &'a dyn DocumentView,
    pub presenter: &'a Presenter,
    pub persisted: &'a AppState,
    pub notifications: &'a Manager,
}

/// Renders the current application view based on the active screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let current_view: Element<'_, Message> = match ctx.screen {
        Screen::Browser => view_browser(&ctx),
        Screen::Settings => view_settings(&ctx),
        Screen::Favorites => view_favorites(&ctx),
    };

    let toast_overlay = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(current_view)
        .push(toast_overlay)
        .into()
}

fn view_browser<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    browser::view(browser::ViewContext {
        i18n: ctx.i18n,
        state: ctx.browser,
        can_go_back: ctx.document.can_go_back(),
        can_go_forward: ctx.document.can_go_forward(),
        fullscreen_view: ctx.presenter.active_view(),
        overlay_opacity: ctx.presenter.overlay_opacity(Instant::now()),
    })
    .map(Message::Browser)
}

fn view_settings<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    settings::view(settings::ViewContext {
        i18n: ctx.i18n,
        state: ctx.settings,
    })
    .map(Message::Settings)
}

fn view_favorites<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    favorites::view(favorites::ViewContext {
        i18n: ctx.i18n,
        favorites: &ctx.persisted.favorites,
        current_url: ctx.browser.current_url.as_deref(),
    })
    .map(Message::Favorites)
}
