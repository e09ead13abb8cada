//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

use crate::error::{DriveError, Result};

use super::{Prompt, PromptResult};

/// Convert dialoguer errors to DriveError.
fn map_dialoguer_err(e: dialoguer::Error) -> DriveError {
    DriveError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user to pick one option.
///
/// Esc and `q` resolve to [`PromptResult::Cancelled`].
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let labels: Vec<_> = prompt.options.iter().map(|o| o.label.as_str()).collect();

    let selection = Select::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .default(0)
        .interact_on_opt(term)
        .map_err(map_dialoguer_err)?;

    Ok(match selection {
        Some(idx) => PromptResult::Selected(prompt.options[idx].value.clone()),
        None => PromptResult::Cancelled,
    })
}
