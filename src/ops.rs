use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use indicatif::ProgressBar;

use crate::command;
use crate::error::{Error, Result};
use crate::format::FileKind;
use crate::plan::OperationKind;
use crate::runner;

/// Compresses `source` into the archive at `target` with the backend for
/// `format`.
pub fn compress(source: &str, target: &str, format: FileKind, password: Option<&str>) -> Result<()> {
    let job = command::build(format, OperationKind::Compress, source, target, password)?;
    execute(job, "Compressing...")
}

/// Unpacks the `kind` archive at `source` into the directory `target`,
/// creating the directory first when it does not exist.
pub fn decompress(source: &str, target: &str, kind: FileKind, password: Option<&str>) -> Result<()> {
    ensure_target_dir(target)?;
    let job = command::build(kind, OperationKind::Decompress, source, target, password)?;
    execute(job, "Decompressing...")
}

fn execute(job: command::ArchiveJob, message: &'static str) -> Result<()> {
    let spinner = ProgressBar::new_spinner().with_message(message);
    spinner.enable_steady_tick(Duration::from_millis(120));
    let outcome = runner::run(&job);
    spinner.finish_and_clear();

    let outcome = outcome?;
    if !outcome.success() {
        return Err(Error::OperationFailed {
            tool: job.tool,
            code: outcome.exit_code,
        });
    }
    println!("{}", "Operation complete".green());
    Ok(())
}

// create_dir_all treats "already exists as a directory" as success, which
// also absorbs a concurrent create between the planner's check and here.
fn ensure_target_dir(target: &str) -> Result<()> {
    if Path::new(target).is_dir() {
        return Ok(());
    }
    fs::create_dir_all(target).map_err(|err| match err.kind() {
        io::ErrorKind::PermissionDenied => Error::PermissionDenied(target.to_string()),
        io::ErrorKind::StorageFull => Error::NotEnoughSpace,
        _ => Error::InvalidTarget {
            path: target.to_string(),
            reason: err.to_string(),
        },
    })
}
