// SPDX-License-Identifier: MPL-2.0
//! Button bar: history navigation, reload, fullscreen, favorites, settings.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view<'a>(i18n: &'a I18n, can_go_back: bool, can_go_forward: bool) -> Element<'a, Message> {
    let back_button = history_button(i18n.tr("toolbar-back"), Message::Back, can_go_back);
    let forward_button =
        history_button(i18n.tr("toolbar-forward"), Message::Forward, can_go_forward);

    let reload_button = chrome_button(i18n.tr("toolbar-reload"), Message::Reload);
    let fullscreen_button =
        chrome_button(i18n.tr("toolbar-fullscreen"), Message::EnterFullscreen);
    let favorites_button = chrome_button(i18n.tr("toolbar-favorites"), Message::OpenFavorites);
    let settings_button = chrome_button(i18n.tr("toolbar-settings"), Message::OpenSettings);

    let row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XXS, spacing::XS])
        .align_y(alignment::Vertical::Center)
        .push(back_button)
        .push(forward_button)
        .push(reload_button)
        .push(Space::new().width(Length::Fill))
        .push(fullscreen_button)
        .push(favorites_button)
        .push(settings_button);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| styles::container::chrome_bar(theme))
        .into()
}

fn chrome_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::toolbar)
        .into()
}

/// History buttons gray out instead of disappearing when there is nowhere
/// to go, matching what users expect from browser chrome.
fn history_button<'a>(label: String, message: Message, enabled: bool) -> Element<'a, Message> {
    let base = button(Text::new(label).size(typography::BODY)).padding([spacing::XXS, spacing::XS]);

    if enabled {
        base.on_press(message).style(styles::button::toolbar).into()
    } else {
        base.style(styles::button::disabled).into()
    }
}
