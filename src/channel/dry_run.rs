//! Channel that reports helper invocations instead of running them

use std::path::{Path, PathBuf};

use tracing::info;

use crate::action::Response;
use crate::channel::{command_exists, Channel, CommandLine};
use crate::context::ExecutionContext;

#[derive(Debug, Clone)]
pub struct DryRunChannel {
    script_path: PathBuf,
}

impl DryRunChannel {
    pub fn new(script_path: impl Into<PathBuf>) -> Self {
        Self {
            script_path: script_path.into(),
        }
    }
}

impl Channel for DryRunChannel {
    fn run(&self, ctx: &ExecutionContext, program: &Path, args: &CommandLine) -> Response {
        let rendered = format!("{} {}", program.display(), args);
        info!(command = %rendered, destroy = ctx.is_destroy(), "dry run, helper not started");
        Response::ok(rendered)
    }

    fn script_path(&self) -> PathBuf {
        self.script_path.clone()
    }

    // Prerequisites are still checked against the host so a dry run surfaces them.
    fn is_command_available(&self, name: &str) -> bool {
        command_exists(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dry_run_renders_command() {
        let channel = DryRunChannel::new("/opt/chaosblade/bin");
        let program = channel.script_path().join("chaos_stopprocess");
        let args = CommandLine::stop().switch("debug", true);

        let resp = channel.run(&ExecutionContext::destroy("uid-1"), &program, &args);

        assert!(resp.is_success());
        assert_eq!(
            resp.result(),
            Some("/opt/chaosblade/bin/chaos_stopprocess --stop --debug=true")
        );
    }
}
