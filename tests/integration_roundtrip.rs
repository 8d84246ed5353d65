use std::fs;
use std::path::Path;

use packmate::error::Error;
use packmate::format::FileKind;
use packmate::ops;
use tempfile::tempdir;

fn write_tree(root: &Path) {
    fs::create_dir_all(root.join("nested")).unwrap();
    fs::write(root.join("a.txt"), "alpha").unwrap();
    fs::write(root.join("nested/b.txt"), "beta").unwrap();
}

#[test]
#[ignore] // Requires tar on PATH
fn trailing_slash_archives_contents_without_a_wrapper() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("data");
    write_tree(&source);
    let archive = dir.path().join("data.tar.gz");

    let source_with_slash = format!("{}/", source.display());
    ops::compress(
        &source_with_slash,
        archive.to_str().unwrap(),
        FileKind::TarGz,
        None,
    )
    .unwrap();

    let out = dir.path().join("out");
    ops::decompress(
        archive.to_str().unwrap(),
        out.to_str().unwrap(),
        FileKind::TarGz,
        None,
    )
    .unwrap();

    assert!(out.join("a.txt").exists());
    assert!(out.join("nested/b.txt").exists());
    assert!(!out.join("data").exists());
}

#[test]
#[ignore] // Requires tar on PATH
fn no_trailing_slash_keeps_the_directory_as_a_named_entry() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("data");
    write_tree(&source);
    let archive = dir.path().join("data.tar.gz");

    ops::compress(
        source.to_str().unwrap(),
        archive.to_str().unwrap(),
        FileKind::TarGz,
        None,
    )
    .unwrap();

    let out = dir.path().join("out");
    ops::decompress(
        archive.to_str().unwrap(),
        out.to_str().unwrap(),
        FileKind::TarGz,
        None,
    )
    .unwrap();

    assert!(out.join("data/a.txt").exists());
    assert!(out.join("data/nested/b.txt").exists());
}

#[test]
#[ignore] // Requires tar on PATH
fn single_file_roundtrips_through_tar_gz() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("notes.txt");
    fs::write(&source, "remember the milk").unwrap();
    let archive = dir.path().join("notes.tar.gz");

    ops::compress(
        source.to_str().unwrap(),
        archive.to_str().unwrap(),
        FileKind::TarGz,
        None,
    )
    .unwrap();
    assert!(archive.exists());

    let out = dir.path().join("out");
    ops::decompress(
        archive.to_str().unwrap(),
        out.to_str().unwrap(),
        FileKind::TarGz,
        None,
    )
    .unwrap();
    assert_eq!(
        fs::read_to_string(out.join("notes.txt")).unwrap(),
        "remember the milk"
    );
}

#[test]
#[ignore] // Requires tar on PATH
fn corrupt_archive_reports_operation_failed() {
    let dir = tempdir().unwrap();
    let archive = dir.path().join("bad.tar.gz");
    fs::write(&archive, [0x1F, 0x8B, 0x01, 0x02, 0x03, 0x04]).unwrap();

    let out = dir.path().join("out");
    let err = ops::decompress(
        archive.to_str().unwrap(),
        out.to_str().unwrap(),
        FileKind::TarGz,
        None,
    )
    .unwrap_err();
    match err {
        Error::OperationFailed { tool, code } => {
            assert_eq!(tool, "tar");
            assert_ne!(code, 0);
        }
        other => panic!("expected OperationFailed, got {other:?}"),
    }
}

#[test]
#[ignore] // Requires zip and unzip on PATH
fn zip_roundtrips_a_directory() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("data");
    write_tree(&source);
    let archive = dir.path().join("data.zip");

    ops::compress(
        source.to_str().unwrap(),
        archive.to_str().unwrap(),
        FileKind::Zip,
        None,
    )
    .unwrap();

    let out = dir.path().join("out");
    ops::decompress(
        archive.to_str().unwrap(),
        out.to_str().unwrap(),
        FileKind::Zip,
        None,
    )
    .unwrap();

    assert!(out.join("data/a.txt").exists());
    assert!(out.join("data/nested/b.txt").exists());
}
