use std::path::PathBuf;

use colored::Colorize;

use crate::error::{Error, Result};
use crate::format::FileKind;
use crate::paths;
use crate::plan::OperationKind;

/// One fully determined external-tool invocation. Arguments stay discrete
/// elements all the way to process creation, and the working directory rides
/// along as spawn metadata rather than a `cd` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveJob {
    pub tool: String,
    pub args: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

/// Builds the invocation for `kind` in the given direction and probes the
/// search path for its backend binary.
pub fn build(
    kind: FileKind,
    operation: OperationKind,
    source: &str,
    target: &str,
    password: Option<&str>,
) -> Result<ArchiveJob> {
    let mut job = match operation {
        OperationKind::Compress => compress_job(kind, source, target, password),
        OperationKind::Decompress => decompress_job(kind, source, target, password),
    }?;
    job.tool = locate_tool(&job.tool)?;
    Ok(job)
}

// `unrar` is often packaged separately from `rar`, and the `rar` binary
// understands the same extraction syntax.
fn locate_tool(tool: &str) -> Result<String> {
    if which::which(tool).is_ok() {
        return Ok(tool.to_string());
    }
    if tool == "unrar" && which::which("rar").is_ok() {
        return Ok("rar".to_string());
    }
    Err(Error::ToolNotFound(tool.to_string()))
}

fn compress_job(
    kind: FileKind,
    source: &str,
    target: &str,
    password: Option<&str>,
) -> Result<ArchiveJob> {
    let base = paths::base_directory(source);
    let item = paths::item_name(source);
    let target = paths::absolutize(target)?;

    let job = match kind {
        FileKind::Tar | FileKind::TarGz | FileKind::TarBz2 | FileKind::TarXz => {
            warn_password_ignored(password);
            // tar changes directory itself via -C, so no working_dir here.
            ArchiveJob {
                tool: "tar".to_string(),
                args: vec![
                    tar_mode_flag(kind, OperationKind::Compress),
                    target,
                    "-C".to_string(),
                    base,
                    item,
                ],
                working_dir: None,
            }
        }
        FileKind::Zip => {
            let mut args = Vec::new();
            if let Some(password) = password {
                args.push("-P".to_string());
                args.push(password.to_string());
            }
            args.push("-r".to_string());
            args.push(target);
            args.push(item);
            ArchiveJob {
                tool: "zip".to_string(),
                args,
                working_dir: Some(PathBuf::from(base)),
            }
        }
        FileKind::SevenZip => {
            let mut args = vec!["a".to_string()];
            if let Some(password) = password {
                args.push(format!("-p{password}"));
            }
            args.push(target);
            args.push(item);
            ArchiveJob {
                tool: "7z".to_string(),
                args,
                working_dir: Some(PathBuf::from(base)),
            }
        }
        FileKind::Rar => {
            let mut args = vec!["a".to_string()];
            if let Some(password) = password {
                args.push(format!("-p{password}"));
            }
            args.push(target);
            args.push(item);
            ArchiveJob {
                tool: "rar".to_string(),
                args,
                working_dir: Some(PathBuf::from(base)),
            }
        }
        _ => {
            return Err(Error::UnknownFormat(format!(
                "cannot compress into a {}",
                kind.as_str()
            )));
        }
    };
    Ok(job)
}

fn decompress_job(
    kind: FileKind,
    source: &str,
    target: &str,
    password: Option<&str>,
) -> Result<ArchiveJob> {
    let source = paths::absolutize(source)?;
    let target = paths::absolutize(target)?;

    let job = match kind {
        FileKind::Tar | FileKind::TarGz | FileKind::TarBz2 | FileKind::TarXz => {
            warn_password_ignored(password);
            ArchiveJob {
                tool: "tar".to_string(),
                args: vec![
                    tar_mode_flag(kind, OperationKind::Decompress),
                    source,
                    "-C".to_string(),
                    target,
                ],
                working_dir: None,
            }
        }
        FileKind::Zip => {
            let mut args = Vec::new();
            if let Some(password) = password {
                args.push("-P".to_string());
                args.push(password.to_string());
            }
            // -o: overwrite existing files without asking.
            args.push("-o".to_string());
            args.push(source);
            args.push("-d".to_string());
            args.push(target);
            ArchiveJob {
                tool: "unzip".to_string(),
                args,
                working_dir: None,
            }
        }
        FileKind::Rar => {
            let mut args = vec!["x".to_string()];
            if let Some(password) = password {
                args.push(format!("-p{password}"));
            }
            args.push("-o+".to_string());
            args.push(source);
            args.push(target);
            ArchiveJob {
                tool: "unrar".to_string(),
                args,
                working_dir: None,
            }
        }
        FileKind::SevenZip => {
            let mut args = vec!["x".to_string()];
            if let Some(password) = password {
                args.push(format!("-p{password}"));
            }
            args.push(source);
            args.push(format!("-o{target}"));
            args.push("-y".to_string());
            ArchiveJob {
                tool: "7z".to_string(),
                args,
                working_dir: None,
            }
        }
        _ => {
            return Err(Error::UnknownFormat(format!(
                "cannot decompress a {}",
                kind.as_str()
            )));
        }
    };
    Ok(job)
}

fn tar_mode_flag(kind: FileKind, operation: OperationKind) -> String {
    let direction = match operation {
        OperationKind::Compress => "c",
        OperationKind::Decompress => "x",
    };
    let codec = match kind {
        FileKind::TarGz => "z",
        FileKind::TarBz2 => "j",
        FileKind::TarXz => "J",
        _ => "",
    };
    format!("-{direction}{codec}f")
}

fn warn_password_ignored(password: Option<&str>) {
    if password.is_some() {
        eprintln!(
            "{}",
            "warning: tar formats do not support password protection, the password will be ignored"
                .yellow()
        );
    }
}
