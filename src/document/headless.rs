// SPDX-License-Identifier: MPL-2.0
//! Built-in document view with a simulated page lifecycle.
//!
//! `HeadlessDocument` keeps real navigation history (linear back/forward
//! stacks, forward entries truncated by a fresh load) and fakes the rest of
//! the engine: a load advances its progress a fixed step every poll and
//! commits with a title derived from the host. Custom-view sessions hand out
//! a dismissal callback wired to a shared flag so tests can observe that the
//! shell acknowledged the dismissal exactly once.

use super::url;
use super::{CustomView, DocumentEvent, DocumentSettings, DocumentView};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Progress gained per poll while a load is in flight.
const PROGRESS_STEP: u8 = 25;

/// A load in flight.
struct LoadInFlight {
    url: String,
    progress: u8,
    /// Whether completion pushes a new history entry (false for reload and
    /// history moves, which only re-commit an existing entry).
    commits_entry: bool,
}

pub struct HeadlessDocument {
    settings: DocumentSettings,
    /// Navigation history, oldest first.
    history: Vec<String>,
    /// Index of the committed entry in `history`, if any.
    current: Option<usize>,
    title: Option<String>,
    loading: Option<LoadInFlight>,
    events: VecDeque<DocumentEvent>,
    /// Set by the dismissal callback of the most recent custom view.
    custom_view_dismissed: Arc<AtomicBool>,
    next_view_id: u64,
    destroyed: bool,
}

impl HeadlessDocument {
    #[must_use]
    pub fn new(settings: DocumentSettings) -> Self {
        Self {
            settings,
            history: Vec::new(),
            current: None,
            title: None,
            loading: None,
            events: VecDeque::new(),
            custom_view_dismissed: Arc::new(AtomicBool::new(false)),
            next_view_id: 0,
            destroyed: false,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    /// Whether the shell has acknowledged dismissal of the last custom view.
    #[must_use]
    pub fn custom_view_dismissed(&self) -> bool {
        self.custom_view_dismissed.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Simulates the page itself leaving fullscreen (e.g. the user pressing
    /// the in-page exit button), which surfaces as a hide request.
    pub fn dismiss_custom_view(&mut self) {
        self.events.push_back(DocumentEvent::HideCustomView);
    }

    /// Drives every pending load to completion. Test convenience.
    pub fn finish_pending_loads(&mut self) -> Vec<DocumentEvent> {
        let mut drained = Vec::new();
        while self.loading.is_some() {
            drained.extend(self.poll_events());
        }
        drained.extend(self.poll_events());
        drained
    }

    fn start_load(&mut self, url: String, commits_entry: bool) {
        if let Err(error) = url::validate(&url) {
            self.events.push_back(DocumentEvent::LoadFailed { url, error });
            return;
        }

        self.loading = Some(LoadInFlight {
            url,
            progress: 0,
            commits_entry,
        });
        self.events.push_back(DocumentEvent::ProgressChanged(0));
    }

    fn advance_load(&mut self) {
        let Some(load) = self.loading.as_mut() else {
            return;
        };

        load.progress = load.progress.saturating_add(PROGRESS_STEP).min(100);
        let progress = load.progress;
        self.events
            .push_back(DocumentEvent::ProgressChanged(progress));

        if progress == 100 {
            if let Some(load) = self.loading.take() {
                self.commit(load);
            }
        }
    }

    fn commit(&mut self, load: LoadInFlight) {
        if load.commits_entry {
            // A fresh load invalidates everything ahead of the current entry.
            if let Some(index) = self.current {
                self.history.truncate(index + 1);
            }
            self.history.push(load.url.clone());
            self.current = Some(self.history.len() - 1);
        }

        let title = url::derive_title(&load.url);
        self.title = Some(title.clone());
        self.events.push_back(DocumentEvent::PageFinished {
            url: load.url,
            title: Some(title),
        });
    }
}

impl Default for HeadlessDocument {
    fn default() -> Self {
        Self::new(DocumentSettings::default())
    }
}

impl DocumentView for HeadlessDocument {
    fn load(&mut self, url: &str) {
        if self.destroyed {
            return;
        }
        self.start_load(url.to_string(), true);
    }

    fn reload(&mut self) {
        let Some(url) = self.current_url().map(str::to_string) else {
            return;
        };
        self.start_load(url, false);
    }

    fn can_go_back(&self) -> bool {
        matches!(self.current, Some(index) if index > 0)
    }

    fn go_back(&mut self) {
        let Some(index) = self.current.filter(|index| *index > 0) else {
            return;
        };
        self.current = Some(index - 1);
        self.start_load(self.history[index - 1].clone(), false);
    }

    fn can_go_forward(&self) -> bool {
        matches!(self.current, Some(index) if index + 1 < self.history.len())
    }

    fn go_forward(&mut self) {
        let Some(index) = self
            .current
            .filter(|index| index + 1 < self.history.len())
        else {
            return;
        };
        self.current = Some(index + 1);
        self.start_load(self.history[index + 1].clone(), false);
    }

    fn current_url(&self) -> Option<&str> {
        self.current.map(|index| self.history[index].as_str())
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn is_loading(&self) -> bool {
        self.loading.is_some()
    }

    fn request_custom_view(&mut self) {
        if self.destroyed || self.current.is_none() {
            return;
        }

        self.next_view_id += 1;
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| "media".to_string());
        let view = CustomView {
            id: self.next_view_id,
            title,
        };

        let dismissed = Arc::new(AtomicBool::new(false));
        self.custom_view_dismissed = dismissed.clone();
        let on_hidden = Box::new(move || {
            dismissed.store(true, Ordering::SeqCst);
        });

        self.events
            .push_back(DocumentEvent::ShowCustomView { view, on_hidden });
    }

    fn poll_events(&mut self) -> Vec<DocumentEvent> {
        self.advance_load();
        self.events.drain(..).collect()
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.loading = None;
        self.events.clear();
    }
}
