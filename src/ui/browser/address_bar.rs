// SPDX-License-Identifier: MPL-2.0
//! Address bar: URL input plus go/clear buttons.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text_input, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

pub fn view<'a>(i18n: &'a I18n, address_input: &'a str) -> Element<'a, Message> {
    let placeholder = i18n.tr("address-placeholder");
    let input = text_input(&placeholder, address_input)
        .on_input(Message::AddressChanged)
        .on_submit(Message::AddressSubmitted)
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill);

    let go_button = button(Text::new(i18n.tr("address-go-button")).size(typography::BODY))
        .on_press(Message::AddressSubmitted)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::primary);

    let clear_button = button(Text::new(i18n.tr("address-clear-button")).size(typography::BODY))
        .on_press(Message::ClearAddress)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::toolbar);

    let row = Row::new()
        .spacing(spacing::XS)
        .padding(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(go_button)
        .push(clear_button);

    Container::new(row)
        .width(Length::Fill)
        .style(|theme: &Theme| styles::container::chrome_bar(theme))
        .into()
}
