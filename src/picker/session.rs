//! Picker state machine.

use std::path::PathBuf;

use crate::error::Result;
use crate::store::BookmarkStore;
use crate::ui::UserInterface;

use super::{PickerBackend, PickerEvent, PickerMode, PickerView, SessionOutcome};

/// Where a session is in its lifecycle.
///
/// `Listing` and `Deleting` are live; the rest are terminal and accept no
/// further events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for input over the current list.
    Listing,
    /// Removing the bookmark under the cursor and reloading the list.
    Deleting,
    /// A bookmark was confirmed.
    Resolved(PathBuf),
    /// The user backed out.
    Cancelled,
    /// The list is empty, at entry or after deletions.
    Empty,
}

/// One run of the interactive picker.
pub struct SelectionSession<'a> {
    store: &'a BookmarkStore,
    mode: PickerMode,
    items: Vec<PathBuf>,
    cursor: usize,
    state: SessionState,
}

impl<'a> SelectionSession<'a> {
    /// Start a session over the store's current bookmarks.
    pub fn new(store: &'a BookmarkStore, mode: PickerMode) -> Self {
        let items = store.list();
        let state = if items.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Listing
        };

        Self {
            store,
            mode,
            items,
            cursor: 0,
            state,
        }
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Bookmarks as currently listed.
    pub fn items(&self) -> &[PathBuf] {
        &self.items
    }

    /// Index of the highlighted bookmark.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The frame a backend should draw for the current state.
    pub fn view(&self) -> PickerView<'_> {
        PickerView {
            mode: &self.mode,
            items: &self.items,
            cursor: self.cursor,
        }
    }

    /// The outcome, once the session has reached a terminal state.
    pub fn outcome(&self) -> Option<SessionOutcome> {
        match &self.state {
            SessionState::Listing | SessionState::Deleting => None,
            SessionState::Resolved(path) => Some(SessionOutcome::Resolved {
                path: path.clone(),
                mode: self.mode.clone(),
            }),
            SessionState::Cancelled => Some(SessionOutcome::Cancelled),
            SessionState::Empty => Some(SessionOutcome::Empty),
        }
    }

    /// Apply one event.
    ///
    /// Events that arrive after the session has ended are ignored.
    pub fn handle(&mut self, event: PickerEvent, ui: &mut dyn UserInterface) -> Result<()> {
        if self.state != SessionState::Listing {
            return Ok(());
        }

        let len = self.items.len();
        match event {
            PickerEvent::Up => self.cursor = (self.cursor + len - 1) % len,
            PickerEvent::Down => self.cursor = (self.cursor + 1) % len,
            PickerEvent::Select => {
                self.state = SessionState::Resolved(self.items[self.cursor].clone());
            }
            PickerEvent::Cancel => self.state = SessionState::Cancelled,
            PickerEvent::Delete => self.delete_current(ui)?,
        }

        tracing::debug!("Picker {:?} -> {:?} at {}", event, self.state, self.cursor);
        Ok(())
    }

    /// Remove the highlighted bookmark, then reload from the store.
    fn delete_current(&mut self, ui: &mut dyn UserInterface) -> Result<()> {
        self.state = SessionState::Deleting;
        let target = self.items[self.cursor].clone();

        if self.store.remove(&target)? {
            ui.success(&format!("Deleted: {}", target.display()));
        }

        self.items = self.store.list();
        if self.items.is_empty() {
            ui.message("No more parked directories.");
            self.cursor = 0;
            self.state = SessionState::Empty;
        } else {
            self.cursor = self.cursor.min(self.items.len() - 1);
            self.state = SessionState::Listing;
        }
        Ok(())
    }

    /// Drive the session with `backend` until it ends.
    ///
    /// After a delete the backend is closed and redrawn from scratch over
    /// the reloaded list. The backend is closed on every exit path.
    pub fn run(
        mut self,
        backend: &mut dyn PickerBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<SessionOutcome> {
        let result = self.drive(backend, ui);
        let closed = backend.close();
        let outcome = result?;
        closed?;
        Ok(outcome)
    }

    fn drive(
        &mut self,
        backend: &mut dyn PickerBackend,
        ui: &mut dyn UserInterface,
    ) -> Result<SessionOutcome> {
        loop {
            if let Some(outcome) = self.outcome() {
                return Ok(outcome);
            }

            backend.render(&self.view())?;
            let event = backend.next_event()?;
            if event == PickerEvent::Delete {
                backend.close()?;
            }
            self.handle(event, ui)?;
        }
    }
}
