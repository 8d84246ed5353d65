use std::path::Path;

use crate::error::Result;

/// The single path element an archiving tool is told to add, relative to
/// [`base_directory`]. A trailing separator on the raw path means "archive
/// the contents of this directory", which makes the item `.` and shifts the
/// base directory into the directory itself. That is how `mydir/` ends up
/// with its contents at the archive root while `mydir` ends up as a named
/// folder one level down.
pub fn item_name(raw: &str) -> String {
    decompose(raw).1
}

/// The directory an archiving tool changes into before touching
/// [`item_name`], so archives never embed the full ancestry of the source.
pub fn base_directory(raw: &str) -> String {
    decompose(raw).0
}

fn decompose(raw: &str) -> (String, String) {
    if raw == "." || raw == "./" || raw == ".\\" {
        return (".".to_string(), ".".to_string());
    }
    if is_root(raw) {
        // A root has no basename; the root string itself is the item.
        return (".".to_string(), raw.to_string());
    }
    if raw.ends_with('/') || raw.ends_with('\\') {
        // Strip exactly one trailing separator.
        let base = &raw[..raw.len() - 1];
        return (base.to_string(), ".".to_string());
    }

    let path = Path::new(raw);
    match path.file_name() {
        Some(name) => {
            let base = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    parent.to_string_lossy().into_owned()
                }
                _ => ".".to_string(),
            };
            (base, name.to_string_lossy().into_owned())
        }
        None => (".".to_string(), raw.to_string()),
    }
}

fn is_root(raw: &str) -> bool {
    if raw == "/" || raw == "\\" {
        return true;
    }
    // Bare drive letters ("C:", "C:\", "C:/") count as roots too.
    let bytes = raw.as_bytes();
    matches!(bytes.len(), 2 | 3)
        && bytes[0].is_ascii_alphabetic()
        && bytes[1] == b':'
        && (bytes.len() == 2 || bytes[2] == b'/' || bytes[2] == b'\\')
}

/// Absolute form of a possibly relative path, without requiring it to exist.
/// Tool invocations carry absolute paths so a working-directory change
/// cannot reroute them.
pub fn absolutize(path: &str) -> Result<String> {
    let absolute = std::path::absolute(path)?;
    Ok(absolute.to_string_lossy().into_owned())
}
