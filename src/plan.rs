use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::format::{self, FileKind};

/// Direction of an archive job. Ambiguous inputs never produce a value of
/// this type; [`recognize`] fails instead of returning a half-determined
/// plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Compress,
    Decompress,
}

/// Outcome of planning one invocation: what the source is, what the target
/// extension suggests, and which way the job runs.
#[derive(Debug, Clone, Copy)]
pub struct RecognitionResult {
    pub source_kind: FileKind,
    pub target_hint: FileKind,
    pub operation: OperationKind,
}

/// Decides whether the pair of paths means compression or decompression.
///
/// A non-archive source can only be compressed, and only into a target whose
/// extension names a supported archive format. An archive source can only be
/// decompressed, and only into a directory (existing or to be created).
pub fn recognize(source: &str, target: &str) -> Result<RecognitionResult> {
    let source_kind = format::source_kind(source)?;

    if target.is_empty() {
        return Err(Error::MissingArgs("target path missing".into()));
    }

    // Headers are irrelevant for a target that may not exist yet.
    let target_hint = format::classify_by_extension(target);

    if source_kind.is_archive() {
        let target_path = Path::new(target);
        if target_path.exists() && !target_path.is_dir() {
            return Err(Error::InvalidTarget {
                path: target.to_string(),
                reason: "target for decompression must be a directory".into(),
            });
        }
        return Ok(RecognitionResult {
            source_kind,
            target_hint,
            operation: OperationKind::Decompress,
        });
    }

    if Path::new(target).is_dir() {
        return Err(Error::UnknownFormat(format!(
            "'{target}' is an existing directory, name an archive file to compress into"
        )));
    }
    if !target_hint.is_archive() {
        return Err(Error::UnknownFormat(format!(
            "target '{target}' has no recognized archive extension"
        )));
    }

    Ok(RecognitionResult {
        source_kind,
        target_hint,
        operation: OperationKind::Compress,
    })
}

/// Rejects a job whose source and target resolve to the same filesystem
/// object. Paths that cannot be canonicalized (typically a target that does
/// not exist yet) are trivially distinct.
pub fn ensure_distinct(source: &str, target: &str) -> Result<()> {
    let (Ok(source), Ok(target)) = (fs::canonicalize(source), fs::canonicalize(target)) else {
        return Ok(());
    };
    if source == target {
        return Err(Error::SamePath);
    }
    Ok(())
}
