use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::{Confirm, Input, Password, Select, theme::ColorfulTheme};

use crate::conflict::{self, Resolution};
use crate::format::{self, FileKind};
use crate::ops;
use crate::plan::OperationKind;

/// Format choices offered for compression, recommended formats first.
const FORMAT_MENU: [(&str, FileKind); 7] = [
    ("tar.gz (gzip compression)", FileKind::TarGz),
    ("zip (supports password)", FileKind::Zip),
    ("7z (supports password)", FileKind::SevenZip),
    ("tar (no compression)", FileKind::Tar),
    ("tar.bz2 (bzip2 compression)", FileKind::TarBz2),
    ("tar.xz (xz compression)", FileKind::TarXz),
    ("rar (decompression only recommended)", FileKind::Rar),
];

/// Guided flow: announce what the source is, let the user adjust the
/// inferred operation, collect the remaining inputs and run the job.
pub fn run(
    source: Option<String>,
    target: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", "Interactive mode".bold());

    let source = match source {
        Some(source) if !source.is_empty() => source,
        _ => Input::with_theme(&theme)
            .with_prompt("Source path")
            .interact_text()
            .context("source prompt failed")?,
    };

    let source_kind = format::source_kind(&source)?;
    println!("Source: {} ({})", source.cyan(), source_kind.as_str());

    let inferred = if source_kind.is_archive() {
        OperationKind::Decompress
    } else {
        OperationKind::Compress
    };
    let operation = confirm_operation(&theme, inferred)?;

    let mut password = password;
    match operation {
        OperationKind::Compress => {
            let chosen_format = pick_format(&theme)?;
            let mut target = match target {
                Some(target) if !target.is_empty() => target,
                _ => Input::with_theme(&theme)
                    .with_prompt("Target archive path")
                    .interact_text()
                    .context("target prompt failed")?,
            };
            if chosen_format.supports_password() && password.is_none() {
                password = maybe_set_password(&theme)?;
            }
            if Path::new(&target).exists() {
                match conflict::resolve(&target)? {
                    Resolution::Proceed(path) => target = path,
                    Resolution::Cancelled => {
                        println!("{}", "Operation canceled".yellow());
                        return Ok(());
                    }
                }
            }
            let delete_source = confirm_delete(&theme, &source)?;
            ops::compress(&source, &target, chosen_format, password.as_deref())?;
            if delete_source {
                delete_path(&source);
            }
        }
        OperationKind::Decompress => {
            if password.is_none() && source_kind.supports_password() {
                let has_password = Confirm::with_theme(&theme)
                    .with_prompt("Does the archive require a password?")
                    .default(false)
                    .interact()
                    .context("password prompt failed")?;
                if has_password {
                    password = Some(prompt_password()?);
                }
            }
            let mut target = match target {
                Some(target) if !target.is_empty() => target,
                _ => Input::with_theme(&theme)
                    .with_prompt("Target directory")
                    .default(".".to_string())
                    .interact_text()
                    .context("target prompt failed")?,
            };
            // An existing plain file in the way is a conflict the user can
            // resolve by renaming the destination.
            if Path::new(&target).exists() && !Path::new(&target).is_dir() {
                match conflict::resolve(&target)? {
                    Resolution::Proceed(path) => target = path,
                    Resolution::Cancelled => {
                        println!("{}", "Operation canceled".yellow());
                        return Ok(());
                    }
                }
            }
            let delete_source = confirm_delete(&theme, &source)?;
            ops::decompress(&source, &target, source_kind, password.as_deref())?;
            if delete_source {
                delete_path(&source);
            }
        }
    }
    Ok(())
}

/// Hidden-input password prompt, shared with the `-p` command-line flag.
pub fn prompt_password() -> Result<String> {
    Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter password")
        .interact()
        .context("password input failed")
}

fn confirm_operation(theme: &ColorfulTheme, inferred: OperationKind) -> Result<OperationKind> {
    let detected = match inferred {
        OperationKind::Compress => "compress",
        OperationKind::Decompress => "decompress",
    };
    let change = Confirm::with_theme(theme)
        .with_prompt(format!("Detected operation: {detected}. Change it?"))
        .default(false)
        .interact()
        .context("operation prompt failed")?;
    if !change {
        return Ok(inferred);
    }
    let choice = Select::with_theme(theme)
        .with_prompt("Operation")
        .items(&["Compress", "Decompress"])
        .default(0)
        .interact()
        .context("operation prompt failed")?;
    Ok(if choice == 0 {
        OperationKind::Compress
    } else {
        OperationKind::Decompress
    })
}

fn pick_format(theme: &ColorfulTheme) -> Result<FileKind> {
    let labels: Vec<&str> = FORMAT_MENU.iter().map(|(label, _)| *label).collect();
    let choice = Select::with_theme(theme)
        .with_prompt("Compression format")
        .items(&labels)
        .default(0)
        .interact()
        .context("format prompt failed")?;
    Ok(FORMAT_MENU[choice].1)
}

fn maybe_set_password(theme: &ColorfulTheme) -> Result<Option<String>> {
    let wants_password = Confirm::with_theme(theme)
        .with_prompt("Set a password for the archive?")
        .default(false)
        .interact()
        .context("password prompt failed")?;
    if !wants_password {
        return Ok(None);
    }
    let password = Password::with_theme(theme)
        .with_prompt("Enter password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .context("password input failed")?;
    Ok(Some(password))
}

fn confirm_delete(theme: &ColorfulTheme, source: &str) -> Result<bool> {
    Confirm::with_theme(theme)
        .with_prompt(format!("Delete source '{source}' after the operation?"))
        .default(false)
        .interact()
        .context("delete prompt failed")
}

// Deletion failures downgrade to a warning; the archive operation itself
// already succeeded.
fn delete_path(source: &str) {
    let path = Path::new(source);
    let removed = if path.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    match removed {
        Ok(()) => println!("Source deleted"),
        Err(err) => eprintln!(
            "{} failed to delete '{}': {}",
            "warning:".yellow(),
            source,
            err
        ),
    }
}
