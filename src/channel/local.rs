//! Channel that runs helpers on the local host

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, warn};

use crate::action::{Code, Response};
use crate::channel::{command_exists, Channel, CommandLine};
use crate::context::ExecutionContext;

#[derive(Debug, Clone)]
pub struct LocalChannel {
    script_path: PathBuf,
}

impl LocalChannel {
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
        }
    }
}

impl Channel for LocalChannel {
    fn run(&self, ctx: &ExecutionContext, program: &Path, args: &CommandLine) -> Response {
        debug!(
            program = %program.display(),
            args = %args,
            destroy = ctx.is_destroy(),
            "running helper"
        );

        let output = match Command::new(program).args(args.to_argv()).output() {
            Ok(output) => output,
            Err(e) => {
                warn!(program = %program.display(), error = %e, "failed to start helper");
                return Response::fail(
                    Code::ExecFailed,
                    format!("failed to run {}: {}", program.display(), e),
                );
            }
        };

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if output.status.success() {
            return Response::ok(stdout);
        }

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        let detail = if stderr.is_empty() { stdout } else { stderr };
        warn!(program = %program.display(), status = %output.status, "helper failed");
        Response::fail(
            Code::ExecFailed,
            format!("{} exited with {}: {}", program.display(), output.status, detail),
        )
    }

    fn script_path(&self) -> PathBuf {
        self.script_path.clone()
    }

    fn is_command_available(&self, name: &str) -> bool {
        command_exists(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn write_helper(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    fn test_run_success_passes_stdout() {
        let dir = TempDir::new().unwrap();
        let helper = write_helper(&dir, "chaos_echo", r#"echo "$@""#);
        let channel = LocalChannel::new(dir.path());

        let args = CommandLine::start().quoted("content", "HELLO WORLD");
        let resp = channel.run(&ExecutionContext::create(), &helper, &args);

        assert!(resp.is_success());
        assert_eq!(resp.result(), Some("--start --content HELLO WORLD"));
    }

    #[test]
    fn test_run_failure_reports_stderr() {
        let dir = TempDir::new().unwrap();
        let helper = write_helper(&dir, "chaos_fail", "echo boom >&2\nexit 3");
        let channel = LocalChannel::new(dir.path());

        let resp = channel.run(&ExecutionContext::create(), &helper, &CommandLine::stop());

        assert!(!resp.is_success());
        assert_eq!(resp.code(), Code::ExecFailed);
        assert!(resp.message().contains("boom"));
    }

    #[test]
    fn test_run_missing_program() {
        let dir = TempDir::new().unwrap();
        let channel = LocalChannel::new(dir.path());
        let missing = dir.path().join("chaos_missing");

        let resp = channel.run(&ExecutionContext::create(), &missing, &CommandLine::start());

        assert_eq!(resp.code(), Code::ExecFailed);
        assert!(resp.message().contains("failed to run"));
    }

    #[test]
    fn test_script_path() {
        let channel = LocalChannel::new("/opt/chaosblade/bin");
        assert_eq!(channel.script_path(), PathBuf::from("/opt/chaosblade/bin"));
    }
}
