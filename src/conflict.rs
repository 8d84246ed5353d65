use anyhow::{Context, Result};
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// What the user chose to do about a target that already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
    Overwrite,
    Rename,
    Cancel,
}

/// Result of resolving a conflict: the path to actually use, or a clean
/// cancel (which is a no-op, not an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Proceed(String),
    Cancelled,
}

const CHOICES: [&str; 3] = ["Overwrite", "Rename", "Cancel"];

/// Asks how to proceed with the existing `target`. Picking `Rename` collects
/// the replacement path immediately, defaulting to the original.
pub fn resolve(target: &str) -> Result<Resolution> {
    let theme = ColorfulTheme::default();
    let choice = Select::with_theme(&theme)
        .with_prompt(format!("Target '{target}' already exists"))
        .items(&CHOICES)
        .default(0)
        .interact()
        .context("conflict prompt failed")?;

    match action_at(choice) {
        ConflictAction::Overwrite => Ok(Resolution::Proceed(target.to_string())),
        ConflictAction::Cancel => Ok(Resolution::Cancelled),
        ConflictAction::Rename => {
            let renamed: String = Input::with_theme(&theme)
                .with_prompt("New target path")
                .default(target.to_string())
                .interact_text()
                .context("rename prompt failed")?;
            Ok(Resolution::Proceed(renamed))
        }
    }
}

fn action_at(index: usize) -> ConflictAction {
    match index {
        0 => ConflictAction::Overwrite,
        1 => ConflictAction::Rename,
        _ => ConflictAction::Cancel,
    }
}
