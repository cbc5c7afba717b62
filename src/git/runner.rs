use crate::error::{Result, WeeklyError};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Runs a git query inside a working directory and returns its stdout.
pub trait GitRunner {
    fn run(&self, workdir: &Path, args: &[String]) -> Result<String>;
}

/// `git` on the command line. Every call passes its working directory
/// explicitly; the process cwd is never touched.
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new<S: Into<OsString>>(program: S) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn describe(&self, args: &[String]) -> String {
        let mut cmd = self.program.to_string_lossy().to_string();
        for arg in args {
            cmd.push(' ');
            cmd.push_str(arg);
        }
        cmd
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

impl GitRunner for GitCli {
    fn run(&self, workdir: &Path, args: &[String]) -> Result<String> {
        debug!(workdir = %workdir.display(), args = ?args, "running git");

        // Status text is matched against English markers.
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(workdir)
            .env("LC_ALL", "C")
            .env("GIT_PAGER", "cat")
            .output()
            .map_err(|e| WeeklyError::Subprocess {
                command: self.describe(args),
                reason: format!("could not be started: {e}"),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WeeklyError::Subprocess {
                command: self.describe(args),
                reason: format!("exited with {}: {}", output.status, stderr.trim()),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}
