//! Channels: the boundary between executors and the operating environment
//!
//! Every executor talks to the host through a [`Channel`]. The local
//! channel spawns helpers on this machine; the dry-run channel only
//! reports what would have been run.

pub mod command_line;
pub mod dry_run;
pub mod local;

pub use command_line::{CommandLine, Mode};
pub use dry_run::DryRunChannel;
pub use local::LocalChannel;

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::action::Response;
use crate::context::ExecutionContext;

#[cfg_attr(test, mockall::automock)]
pub trait Channel {
    /// Run `program` with `args` and report the outcome
    fn run(&self, ctx: &ExecutionContext, program: &Path, args: &CommandLine) -> Response;

    /// Directory the helper binaries live in
    fn script_path(&self) -> PathBuf;

    fn is_command_available(&self, name: &str) -> bool;
}

/// Resolve a command through the host shell's `command -v`
pub(crate) fn command_exists(name: &str) -> bool {
    Command::new("sh")
        .arg("-c")
        .arg(format!("command -v {}", shell_words::quote(name)))
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_exists() {
        assert!(command_exists("sh"));
        assert!(!command_exists("definitely_not_a_command_12345"));
    }

    #[test]
    fn test_command_exists_rejects_injection() {
        assert!(!command_exists("sh; true"));
    }
}
