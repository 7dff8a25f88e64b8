// SPDX-License-Identifier: MPL-2.0
//! `iced_surf` is a lightweight browser shell built with the Iced GUI framework.
//!
//! The shell provides the windowed chrome (address bar, navigation buttons,
//! progress indicator), a fullscreen presentation mode for engine-supplied
//! views, internationalization with Fluent, and user preference management.
//! Web rendering itself is delegated to a pluggable document view; a
//! headless simulation ships in-tree.

#![doc(html_root_url = "https://docs.rs/iced_surf/0.2.0")]

pub mod app;
pub mod document;
pub mod error;
pub mod i18n;
pub mod ui;
