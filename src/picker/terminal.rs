//! Terminal picker backend.

use console::{truncate_str, Key, Term};
use std::io::{self, Write};

use crate::error::Result;
use crate::ui::{should_use_colors, DriveTheme};

use super::{hint_for, PickerBackend, PickerEvent, PickerView};

/// Lines used by the prompt and the footer around the list.
const CHROME_LINES: usize = 3;

/// Source of key presses.
type KeyReader = Box<dyn FnMut() -> io::Result<Key>>;

/// Draws the picker on stderr and reads keys from the terminal.
///
/// Stdout is left alone so the chosen path is the only thing printed there.
/// Keys are read raw, so Ctrl-C arrives as a key and cancels the session
/// instead of killing the process with the cursor still hidden.
pub struct TerminalPicker {
    term: Term,
    theme: DriveTheme,
    drawn: usize,
    keys: KeyReader,
}

impl TerminalPicker {
    /// Create a picker on stderr.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            DriveTheme::new()
        } else {
            DriveTheme::plain()
        };

        let term = Term::stderr();
        let reader = term.clone();
        Self::with_keys(term, theme, Box::new(move || reader.read_key_raw()))
    }

    fn with_keys(term: Term, theme: DriveTheme, keys: KeyReader) -> Self {
        Self {
            term,
            theme,
            drawn: 0,
            keys,
        }
    }

    /// Whether keys can be captured at all.
    pub fn is_available(&self) -> bool {
        self.term.is_term()
    }

    /// The lines of one frame for a terminal of `rows` x `cols`.
    ///
    /// Every line fits on one terminal row, so clearing the previous frame
    /// by line count never leaves wrapped remnants behind.
    fn frame(&self, view: &PickerView<'_>, rows: usize, cols: usize) -> Vec<String> {
        let height = rows.saturating_sub(CHROME_LINES + 1).max(1);
        let start = window_start(view.cursor, height);
        let width = cols.saturating_sub(1).max(1);

        let mut lines = Vec::with_capacity(height + CHROME_LINES);
        lines.push(
            self.theme
                .prompt
                .apply_to(view.mode.prompt(&self.theme))
                .to_string(),
        );
        for (idx, path) in view.items.iter().enumerate().skip(start).take(height) {
            let label = path.display().to_string();
            lines.push(
                self.theme
                    .format_row(&label, &hint_for(path), idx == view.cursor),
            );
        }
        lines.push(String::new());
        lines.push(format!("  {}", self.theme.dim.apply_to(view.mode.footer())));

        lines
            .iter()
            .map(|line| truncate_str(line, width, "…").into_owned())
            .collect()
    }

    fn clear(&mut self) -> Result<()> {
        if self.drawn > 0 {
            self.term.clear_last_lines(self.drawn)?;
            self.drawn = 0;
        }
        Ok(())
    }
}

impl Default for TerminalPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// First visible row so that `cursor` stays inside a window of `height` rows.
fn window_start(cursor: usize, height: usize) -> usize {
    if cursor >= height {
        cursor + 1 - height
    } else {
        0
    }
}

fn map_key(key: Key) -> Option<PickerEvent> {
    match key {
        Key::ArrowUp | Key::Char('k') => Some(PickerEvent::Up),
        Key::ArrowDown | Key::Char('j') | Key::Tab => Some(PickerEvent::Down),
        Key::Enter => Some(PickerEvent::Select),
        Key::Char('d') => Some(PickerEvent::Delete),
        Key::Escape | Key::Char('q') | Key::CtrlC => Some(PickerEvent::Cancel),
        _ => None,
    }
}

impl PickerBackend for TerminalPicker {
    fn render(&mut self, view: &PickerView<'_>) -> Result<()> {
        self.clear()?;
        self.term.hide_cursor()?;

        let (rows, cols) = self.term.size();
        let lines = self.frame(view, rows as usize, cols as usize);
        for line in &lines {
            writeln!(self.term, "{}", line)?;
        }
        self.drawn = lines.len();
        Ok(())
    }

    fn next_event(&mut self) -> Result<PickerEvent> {
        loop {
            if let Some(event) = map_key((self.keys)()?) {
                return Ok(event);
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        self.clear()?;
        self.term.show_cursor()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_vim_keys_navigate() {
        assert_eq!(map_key(Key::ArrowUp), Some(PickerEvent::Up));
        assert_eq!(map_key(Key::Char('k')), Some(PickerEvent::Up));
        assert_eq!(map_key(Key::ArrowDown), Some(PickerEvent::Down));
        assert_eq!(map_key(Key::Char('j')), Some(PickerEvent::Down));
    }

    #[test]
    fn enter_selects_and_d_deletes() {
        assert_eq!(map_key(Key::Enter), Some(PickerEvent::Select));
        assert_eq!(map_key(Key::Char('d')), Some(PickerEvent::Delete));
    }

    #[test]
    fn escape_q_and_ctrl_c_cancel() {
        assert_eq!(map_key(Key::Escape), Some(PickerEvent::Cancel));
        assert_eq!(map_key(Key::Char('q')), Some(PickerEvent::Cancel));
        assert_eq!(map_key(Key::CtrlC), Some(PickerEvent::Cancel));
    }

    #[test]
    fn other_keys_ignored() {
        assert_eq!(map_key(Key::Char('x')), None);
        assert_eq!(map_key(Key::Backspace), None);
    }

    #[test]
    fn window_follows_cursor() {
        assert_eq!(window_start(0, 5), 0);
        assert_eq!(window_start(4, 5), 0);
        assert_eq!(window_start(5, 5), 1);
        assert_eq!(window_start(9, 5), 5);
    }

    #[cfg(unix)]
    mod session {
        use super::super::*;
        use crate::picker::{PickerMode, SelectionSession, SessionOutcome};
        use crate::store::BookmarkStore;
        use crate::ui::MockUI;
        use std::fs::{self, File};
        use std::path::PathBuf;
        use tempfile::TempDir;

        /// A picker drawing into a file and reading `keys` in order.
        fn scripted(temp: &TempDir, keys: Vec<Key>) -> (TerminalPicker, PathBuf) {
            let screen = temp.path().join("screen");
            let write = File::create(&screen).unwrap();
            let read = File::open(&screen).unwrap();
            let term = Term::read_write_pair(read, write);

            let mut keys = keys.into_iter();
            let reader: KeyReader = Box::new(move || {
                keys.next()
                    .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
            });
            (
                TerminalPicker::with_keys(term, DriveTheme::plain(), reader),
                screen,
            )
        }

        fn parked(temp: &TempDir) -> BookmarkStore {
            let store = BookmarkStore::open(temp.path().join("paths.json"));
            store.add(temp.path()).unwrap();
            store
        }

        #[test]
        fn ctrl_c_cancels_the_session() {
            let temp = TempDir::new().unwrap();
            let store = parked(&temp);
            let (mut picker, screen) = scripted(&temp, vec![Key::Char('x'), Key::CtrlC]);
            let mut ui = MockUI::new();

            let outcome = SelectionSession::new(&store, PickerMode::Navigate)
                .run(&mut picker, &mut ui)
                .unwrap();

            assert_eq!(outcome, SessionOutcome::Cancelled);
            assert!(fs::read_to_string(screen)
                .unwrap()
                .contains("Select a directory:"));
            assert_eq!(store.list().len(), 1);
        }

        #[test]
        fn unknown_keys_are_skipped_until_a_mapped_one() {
            let temp = TempDir::new().unwrap();
            let (mut picker, _) = scripted(
                &temp,
                vec![Key::Unknown, Key::Char('x'), Key::Backspace, Key::Enter],
            );

            assert_eq!(picker.next_event().unwrap(), PickerEvent::Select);
            assert!(picker.next_event().is_err());
        }

        #[test]
        fn long_rows_are_cut_to_the_terminal_width() {
            let temp = TempDir::new().unwrap();
            let (picker, _) = scripted(&temp, Vec::new());
            let long = PathBuf::from(format!("/{}", "deep/".repeat(40)));
            let items = vec![long.clone(), PathBuf::from("/srv")];
            let view = PickerView {
                mode: &PickerMode::Navigate,
                items: &items,
                cursor: 0,
            };

            let lines = picker.frame(&view, 24, 40);

            assert!(lines
                .iter()
                .all(|line| console::measure_text_width(line) < 40));
            assert!(lines[1].ends_with('…'));
            assert!(lines[2].contains("/srv"));
        }

        #[test]
        fn frame_height_follows_terminal_rows() {
            let temp = TempDir::new().unwrap();
            let (picker, _) = scripted(&temp, Vec::new());
            let items: Vec<PathBuf> = (0..20).map(|i| PathBuf::from(format!("/d{}", i))).collect();
            let view = PickerView {
                mode: &PickerMode::Navigate,
                items: &items,
                cursor: 19,
            };

            let lines = picker.frame(&view, 10, 80);

            // prompt, six rows, blank, footer
            assert_eq!(lines.len(), 9);
            assert!(lines[6].contains("/d19"));
        }
    }
}
