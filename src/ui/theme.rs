//! Visual theme and styling.

use console::Style;

/// Drive's visual theme.
#[derive(Debug, Clone)]
pub struct DriveTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for the picker prompt line (bold).
    pub prompt: Style,
    /// Style for the command a shell wrapper will run (cyan).
    pub command: Style,
    /// Style for the row under the cursor (cyan bold).
    pub cursor: Style,
    /// Style for contextual hints (dim).
    pub hint: Style,
}

impl Default for DriveTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl DriveTheme {
    /// Create the default Drive theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            prompt: Style::new().bold(),
            command: Style::new().cyan(),
            cursor: Style::new().cyan().bold(),
            hint: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            prompt: Style::new(),
            command: Style::new(),
            cursor: Style::new(),
            hint: Style::new(),
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format one picker row.
    pub fn format_row(&self, label: &str, hint: &str, selected: bool) -> String {
        if selected {
            format!(
                "{} {} {}",
                self.cursor.apply_to("❯"),
                self.cursor.apply_to(label),
                self.hint.apply_to(hint)
            )
        } else {
            format!("  {} {}", label, self.hint.apply_to(hint))
        }
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stderr().is_term()
}
