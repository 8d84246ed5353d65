use std::fs::File;
use std::io::Write;

use packmate::format::{self, FileKind};
use tempfile::tempdir;

#[test]
fn extension_classification_is_case_insensitive() {
    for path in ["backup.tar.gz", "backup.TAR.GZ", "backup.Tar.Gz"] {
        assert_eq!(
            format::classify_by_extension(path),
            FileKind::TarGz,
            "failed for {path}"
        );
    }
    assert_eq!(format::classify_by_extension("a.ZIP"), FileKind::Zip);
    assert_eq!(format::classify_by_extension("a.TBZ2"), FileKind::TarBz2);
    assert_eq!(format::classify_by_extension("a.7Z"), FileKind::SevenZip);
}

#[test]
fn empty_and_short_files_classify_as_unknown() {
    let dir = tempdir().unwrap();

    let empty = dir.path().join("empty.bin");
    File::create(&empty).unwrap();
    assert_eq!(
        format::classify_by_header(empty.to_str().unwrap()),
        FileKind::Unknown
    );

    let short = dir.path().join("short.bin");
    std::fs::write(&short, [0x50, 0x4B, 0x03]).unwrap();
    assert_eq!(
        format::classify_by_header(short.to_str().unwrap()),
        FileKind::Unknown
    );
}

#[test]
fn unreadable_path_classifies_as_unknown() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("never-created.bin");
    assert_eq!(
        format::classify_by_header(missing.to_str().unwrap()),
        FileKind::Unknown
    );
}

#[test]
fn magic_numbers_identify_each_format() {
    let dir = tempdir().unwrap();
    let cases: [(&str, &[u8], FileKind); 6] = [
        ("pk.bin", &[0x50, 0x4B, 0x03, 0x04], FileKind::Zip),
        ("rar.bin", b"Rar!\x1a\x07\x00", FileKind::Rar),
        ("7z.bin", &[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C], FileKind::SevenZip),
        ("gz.bin", &[0x1F, 0x8B, 0x08, 0x00], FileKind::TarGz),
        ("bz2.bin", b"BZh91AY", FileKind::TarBz2),
        ("xz.bin", &[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00], FileKind::TarXz),
    ];
    for (name, bytes, expected) in cases {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        assert_eq!(
            format::classify_by_header(path.to_str().unwrap()),
            expected,
            "failed for {name}"
        );
    }
}

#[test]
fn ustar_signature_at_offset_257_means_tar() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("member.bin");
    let mut file = File::create(&path).unwrap();
    file.write_all(&[0u8; 257]).unwrap();
    file.write_all(b"ustar\x00000").unwrap();
    drop(file);
    assert_eq!(
        format::classify_by_header(path.to_str().unwrap()),
        FileKind::Tar
    );
}

#[test]
fn header_sniffing_overrides_an_unrecognized_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("archive.unknownext");
    std::fs::write(&path, [0x50, 0x4B, 0x03, 0x04]).unwrap();
    assert_eq!(
        format::source_kind(path.to_str().unwrap()).unwrap(),
        FileKind::Zip
    );
}

#[test]
fn plain_content_with_no_extension_is_a_regular_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notes");
    std::fs::write(&path, "just some text").unwrap();
    assert_eq!(
        format::source_kind(path.to_str().unwrap()).unwrap(),
        FileKind::RegularFile
    );
}
