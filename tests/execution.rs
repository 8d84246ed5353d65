#![cfg(unix)]

use packmate::command::ArchiveJob;
use packmate::error::Error;
use packmate::runner;
use tempfile::tempdir;

fn shell_job(script: &str, working_dir: Option<std::path::PathBuf>) -> ArchiveJob {
    ArchiveJob {
        tool: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
        working_dir,
    }
}

#[test]
fn zero_exit_is_success() {
    let outcome = runner::run(&shell_job("exit 0", None)).unwrap();
    assert_eq!(outcome.exit_code, 0);
    assert!(!outcome.terminated_abnormally);
    assert!(outcome.success());
}

#[test]
fn nonzero_exit_code_is_reported_verbatim() {
    let outcome = runner::run(&shell_job("exit 2", None)).unwrap();
    assert_eq!(outcome.exit_code, 2);
    assert!(!outcome.terminated_abnormally);
    assert!(!outcome.success());
}

#[test]
fn working_directory_applies_to_the_child() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("marker"), "x").unwrap();
    let job = shell_job("test -e marker", Some(dir.path().to_path_buf()));
    assert!(runner::run(&job).unwrap().success());
}

#[test]
fn missing_tool_reports_tool_not_found() {
    let job = ArchiveJob {
        tool: "definitely-not-a-real-archiver-52b1".to_string(),
        args: vec![],
        working_dir: None,
    };
    let err = runner::run(&job).unwrap_err();
    match err {
        Error::ToolNotFound(tool) => assert_eq!(tool, "definitely-not-a-real-archiver-52b1"),
        other => panic!("expected ToolNotFound, got {other:?}"),
    }
}

#[test]
fn signal_termination_is_flagged_abnormal() {
    let outcome = runner::run(&shell_job("kill -KILL $$", None)).unwrap();
    assert!(outcome.terminated_abnormally);
    assert!(!outcome.success());
}
