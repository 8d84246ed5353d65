use std::io;
use std::process::{Command, ExitStatus};

use crate::command::ArchiveJob;
use crate::error::{Error, Result};

/// Child exit status normalized across platforms: a normal exit carries its
/// code, termination by signal (or a status the platform cannot report) is
/// flagged instead of being dressed up as a code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    pub exit_code: i32,
    pub terminated_abnormally: bool,
}

impl ExitOutcome {
    pub fn success(self) -> bool {
        self.exit_code == 0 && !self.terminated_abnormally
    }
}

impl From<ExitStatus> for ExitOutcome {
    fn from(status: ExitStatus) -> Self {
        match status.code() {
            Some(code) => ExitOutcome {
                exit_code: code,
                terminated_abnormally: false,
            },
            None => ExitOutcome {
                exit_code: -1,
                terminated_abnormally: true,
            },
        }
    }
}

/// Runs the job's tool with its exact argument vector and optional working
/// directory, blocking until the child exits. No shell is involved on any
/// platform, so filenames with spaces or metacharacters pass through
/// untouched. Stdout and stderr are inherited from the parent.
pub fn run(job: &ArchiveJob) -> Result<ExitOutcome> {
    let mut command = Command::new(&job.tool);
    command.args(&job.args);
    if let Some(dir) = &job.working_dir {
        command.current_dir(dir);
    }
    let status = command.status().map_err(|err| match err.kind() {
        // The search-path probe can go stale between build and spawn.
        io::ErrorKind::NotFound => Error::ToolNotFound(job.tool.clone()),
        _ => Error::OperationFailed {
            tool: job.tool.clone(),
            code: err.raw_os_error().unwrap_or(-1),
        },
    })?;
    Ok(ExitOutcome::from(status))
}
