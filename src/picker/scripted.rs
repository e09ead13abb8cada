//! Scripted picker backend for tests.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::error::Result;

use super::{PickerBackend, PickerEvent, PickerMode, PickerView};

/// A frame captured by [`ScriptedPicker`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedView {
    pub mode: PickerMode,
    pub items: Vec<PathBuf>,
    pub cursor: usize,
}

/// Backend that replays a fixed list of events and records every frame.
///
/// Running out of events is an error, so a test that forgets to end the
/// session fails instead of hanging.
#[derive(Debug, Default)]
pub struct ScriptedPicker {
    events: VecDeque<PickerEvent>,
    renders: Vec<RenderedView>,
    closes: usize,
}

impl ScriptedPicker {
    /// Create a backend that will emit `events` in order.
    pub fn new(events: impl IntoIterator<Item = PickerEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Frames drawn so far.
    pub fn renders(&self) -> &[RenderedView] {
        &self.renders
    }

    /// How many times the picker was torn down.
    pub fn closes(&self) -> usize {
        self.closes
    }

    /// Events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl PickerBackend for ScriptedPicker {
    fn render(&mut self, view: &PickerView<'_>) -> Result<()> {
        self.renders.push(RenderedView {
            mode: view.mode.clone(),
            items: view.items.to_vec(),
            cursor: view.cursor,
        });
        Ok(())
    }

    fn next_event(&mut self) -> Result<PickerEvent> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("picker script exhausted").into())
    }

    fn close(&mut self) -> Result<()> {
        self.closes += 1;
        Ok(())
    }
}
