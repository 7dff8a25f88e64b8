// SPDX-License-Identifier: MPL-2.0
//! Document pane and fullscreen container rendering.
//!
//! The pane stands in for the rendered page: it shows what the document view
//! reports (title, URL, load state). The fullscreen container renders the
//! engine-supplied custom view over the whole window at the presenter's
//! current fade opacity.

use super::{Message, State};
use crate::document::CustomView;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{progress_bar, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Thin progress indicator shown under the chrome while a load is in flight.
pub fn progress_view<'a>(progress: u8) -> Element<'a, Message> {
    progress_bar(0.0..=100.0, f32::from(progress))
        .girth(Length::Fixed(sizing::PROGRESS_BAR_HEIGHT))
        .into()
}

/// The inline document surface.
pub fn document_view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    match (&state.current_url, state.is_loading()) {
        (None, false) => {
            content = content.push(
                Text::new(i18n.tr("pane-empty-state"))
                    .size(typography::BODY_LG)
                    .style(secondary_text),
            );
        }
        (None, true) => {
            content = content.push(
                Text::new(i18n.tr("pane-loading"))
                    .size(typography::BODY_LG)
                    .style(secondary_text),
            );
        }
        (Some(url), loading) => {
            let title = state
                .page_title
                .clone()
                .unwrap_or_else(|| i18n.tr("pane-untitled"));
            content = content
                .push(Text::new(title).size(typography::TITLE_MD))
                .push(
                    Text::new(url.clone())
                        .size(typography::CAPTION)
                        .style(secondary_text),
                );
            if loading {
                content = content.push(
                    Text::new(i18n.tr("pane-loading"))
                        .size(typography::BODY)
                        .style(secondary_text),
                );
            }
        }
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|theme: &Theme| styles::container::document_pane(theme))
        .into()
}

/// The fullscreen container: the custom view over a black surface, faded to
/// the presenter's current opacity.
pub fn fullscreen_view<'a>(
    custom_view: &'a CustomView,
    overlay_opacity: f32,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let title_color = Color {
        a: overlay_opacity,
        ..palette::WHITE
    };
    let hint_color = Color {
        a: overlay_opacity * opacity::OVERLAY_STRONG,
        ..palette::GRAY_200
    };

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(custom_view.title.clone())
                .size(typography::TITLE_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(title_color),
                }),
        )
        .push(
            Text::new(i18n.tr("fullscreen-exit-hint"))
                .size(typography::BODY)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(hint_color),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::fullscreen_overlay(overlay_opacity))
        .into()
}

fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.weak.text),
    }
}
