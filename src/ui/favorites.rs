// SPDX-License-Identifier: MPL-2.0
//! Favorites screen: a thin list editor over the persisted favorites.
//!
//! The list itself lives in the persisted application state; this screen
//! renders it and translates button presses into events the app applies.

use crate::app::persisted_state::Favorite;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, text, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages emitted by the favorites widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// Bookmark the page currently shown in the browser.
    AddCurrent,
    /// Open the favorite at this list index.
    Open(usize),
    /// Remove the favorite at this list index.
    Remove(usize),
    Done,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    AddCurrent,
    Open(usize),
    Remove(usize),
    CloseRequested,
}

/// Translates a favorites message into an application event.
pub fn update(message: Message) -> Event {
    match message {
        Message::AddCurrent => Event::AddCurrent,
        Message::Open(index) => Event::Open(index),
        Message::Remove(index) => Event::Remove(index),
        Message::Done => Event::CloseRequested,
    }
}

/// Contextual data needed to render the favorites screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub favorites: &'a [Favorite],
    /// URL of the page currently shown in the browser, if any.
    pub current_url: Option<&'a str>,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let title = Text::new(i18n.tr("favorites-title")).size(typography::TITLE_LG);

    let already_bookmarked = ctx
        .current_url
        .is_some_and(|url| ctx.favorites.iter().any(|f| f.url == url));
    let add_label = Text::new(i18n.tr("favorites-add-current")).size(typography::BODY);
    let add_button = if ctx.current_url.is_some() && !already_bookmarked {
        button(add_label)
            .on_press(Message::AddCurrent)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::primary)
    } else {
        button(add_label)
            .padding([spacing::XS, spacing::SM])
            .style(styles::button::disabled)
    };

    let done_button = button(Text::new(i18n.tr("favorites-back-button")).size(typography::BODY))
        .on_press(Message::Done)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::toolbar);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(add_button)
        .push(done_button);

    let list: Element<'a, Message> = if ctx.favorites.is_empty() {
        Container::new(
            Text::new(i18n.tr("favorites-empty-state"))
                .size(typography::BODY_LG)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        )
        .width(Length::Fill)
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .into()
    } else {
        let rows = ctx
            .favorites
            .iter()
            .enumerate()
            .map(|(index, favorite)| favorite_row(i18n, index, favorite))
            .collect::<Vec<_>>();
        scrollable(Column::with_children(rows).spacing(spacing::XS)).into()
    };

    let content = Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(list);

    Container::new(
        Container::new(content)
            .padding(spacing::XL)
            .width(Length::Fill)
            .style(|theme: &Theme| styles::container::panel(theme)),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG)
    .into()
}

fn favorite_row<'a>(i18n: &'a I18n, index: usize, favorite: &'a Favorite) -> Element<'a, Message> {
    let labels = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(favorite.title.clone()).size(typography::BODY_LG))
        .push(
            Text::new(favorite.url.clone())
                .size(typography::CAPTION)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    let open_button = button(Text::new(i18n.tr("favorites-open-button")).size(typography::BODY))
        .on_press(Message::Open(index))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::primary);

    let remove_button =
        button(Text::new(i18n.tr("favorites-remove-button")).size(typography::BODY))
            .on_press(Message::Remove(index))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::button::toolbar);

    Row::new()
        .spacing(spacing::SM)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(labels)
        .push(open_button)
        .push(remove_button)
        .into()
}
