use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use crate::error::{Error, Result};

/// Classification of a filesystem path: a plain file, a directory, or one
/// specific archive format. Produced once per invocation and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    RegularFile,
    Directory,
    Tar,
    TarGz,
    TarBz2,
    TarXz,
    Zip,
    Rar,
    SevenZip,
    Unknown,
}

impl FileKind {
    pub fn is_archive(self) -> bool {
        !matches!(
            self,
            FileKind::RegularFile | FileKind::Directory | FileKind::Unknown
        )
    }

    pub fn supports_password(self) -> bool {
        matches!(self, FileKind::Zip | FileKind::SevenZip | FileKind::Rar)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::RegularFile => "regular file",
            FileKind::Directory => "directory",
            FileKind::Tar => "tar archive",
            FileKind::TarGz => "tar.gz archive",
            FileKind::TarBz2 => "tar.bz2 archive",
            FileKind::TarXz => "tar.xz archive",
            FileKind::Zip => "zip archive",
            FileKind::Rar => "rar archive",
            FileKind::SevenZip => "7z archive",
            FileKind::Unknown => "unknown",
        }
    }
}

/// Classifies a path by its extension alone, case-insensitively.
///
/// A bare `.gz`/`.bz2`/`.xz` suffix is ambiguous until the stem is known to
/// end in `.tar`, so those suffixes go through the double-extension check
/// instead of matching directly.
pub fn classify_by_extension(path: &str) -> FileKind {
    let path = Path::new(path);
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FileKind::Unknown;
    };
    match ext.to_ascii_lowercase().as_str() {
        "tar" => FileKind::Tar,
        "tgz" => FileKind::TarGz,
        "tbz2" | "tbz" => FileKind::TarBz2,
        "txz" => FileKind::TarXz,
        "zip" => FileKind::Zip,
        "rar" => FileKind::Rar,
        "7z" => FileKind::SevenZip,
        "gz" if stem_is_tar(path) => FileKind::TarGz,
        "bz2" if stem_is_tar(path) => FileKind::TarBz2,
        "xz" if stem_is_tar(path) => FileKind::TarXz,
        _ => FileKind::Unknown,
    }
}

fn stem_is_tar(path: &Path) -> bool {
    path.file_stem()
        .map(Path::new)
        .and_then(|stem| stem.extension())
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("tar"))
}

/// Classifies a file by its magic bytes. An unreadable file or one shorter
/// than four bytes is `Unknown`, never an error.
pub fn classify_by_header(path: &str) -> FileKind {
    let Ok(mut file) = File::open(path) else {
        return FileKind::Unknown;
    };
    let mut header = [0u8; 8];
    let len = read_up_to(&mut file, &mut header);
    if len < 4 {
        return FileKind::Unknown;
    }

    if header.starts_with(&[0x50, 0x4B]) {
        return FileKind::Zip;
    }
    if header.starts_with(b"Rar!") {
        return FileKind::Rar;
    }
    if header.starts_with(&[0x37, 0x7A, 0xBC, 0xAF]) {
        return FileKind::SevenZip;
    }
    if header.starts_with(&[0x1F, 0x8B]) {
        return FileKind::TarGz;
    }
    if header.starts_with(b"BZh") {
        return FileKind::TarBz2;
    }
    if len >= 6 && header.starts_with(&[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00]) {
        return FileKind::TarXz;
    }

    // Uncompressed tar has no leading magic number; the only reliable
    // signature is the ustar member-header marker at byte offset 257.
    let mut ustar = [0u8; 5];
    if file.seek(SeekFrom::Start(257)).is_ok()
        && read_up_to(&mut file, &mut ustar) == ustar.len()
        && &ustar == b"ustar"
    {
        return FileKind::Tar;
    }

    FileKind::Unknown
}

fn read_up_to(file: &mut File, buf: &mut [u8]) -> usize {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) | Err(_) => break,
            Ok(n) => filled += n,
        }
    }
    filled
}

/// Determines what an existing source path is: directories short-circuit,
/// files go through extension then header sniffing and fall back to
/// `RegularFile`. A missing or special path is a hard error.
pub fn source_kind(path: &str) -> Result<FileKind> {
    let fs_path = Path::new(path);
    if !fs_path.exists() {
        return Err(Error::InvalidSource {
            path: path.to_string(),
            reason: "no such path".into(),
        });
    }
    if is_directory(fs_path) {
        return Ok(FileKind::Directory);
    }
    if fs_path.is_file() {
        let kind = match classify_by_extension(path) {
            FileKind::Unknown => classify_by_header(path),
            kind => kind,
        };
        return Ok(match kind {
            FileKind::Unknown => FileKind::RegularFile,
            kind => kind,
        });
    }
    Err(Error::InvalidSource {
        path: path.to_string(),
        reason: "not a regular file or directory".into(),
    })
}

// Canonicalization can fail on permission quirks or mid-operation renames;
// classification falls back to a direct metadata check rather than aborting.
fn is_directory(path: &Path) -> bool {
    fs::canonicalize(path)
        .map(|resolved| resolved.is_dir())
        .unwrap_or_else(|_| path.is_dir())
}
