//! Process stop action: suspend matching processes until the fault is destroyed

use std::sync::Arc;

use tracing::debug;

use crate::action::{ActionSpec, Code, Executor, ExpModel, FlagSpec, Response};
use crate::channel::{Channel, CommandLine, Mode};
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::engine::actions::category;

pub const STOP_PROCESS_BIN: &str = "chaos_stopprocess";

const MATCHERS: &[FlagSpec] = &[
    FlagSpec::new("process", "Process name"),
    FlagSpec::new("process-cmd", "Process name in command"),
];

const FLAGS: &[FlagSpec] = &[FlagSpec::new(
    "ignore-not-found",
    "Return success even if no process matches",
)
.no_args()];

const EXAMPLE: &str = r#"
# Pause the process that contains the "SimpleHTTPServer" keyword
chaosctl create process stop --process SimpleHTTPServer

# Pause the Java process
chaosctl create process stop --process-cmd java

# Return success even if the process not found
chaosctl create process stop --process demo --ignore-not-found"#;

pub struct StopProcessActionSpec {
    long_desc: Option<String>,
    executor: StopProcessExecutor,
}

impl StopProcessActionSpec {
    pub fn new(config: &Config) -> Self {
        Self {
            long_desc: None,
            executor: StopProcessExecutor::new(config),
        }
    }

    pub fn with_channel(mut self, channel: Arc<dyn Channel>) -> Self {
        self.executor.set_channel(channel);
        self
    }

    pub fn with_long_desc(mut self, long_desc: impl Into<String>) -> Self {
        self.long_desc = Some(long_desc.into());
        self
    }
}

impl ActionSpec for StopProcessActionSpec {
    fn target(&self) -> &'static str {
        "process"
    }

    fn name(&self) -> &'static str {
        "stop"
    }

    fn aliases(&self) -> &[&'static str] {
        &["f"]
    }

    fn short_desc(&self) -> &'static str {
        "process fake death"
    }

    fn long_desc(&self) -> String {
        self.long_desc
            .clone()
            .unwrap_or_else(|| "process fake death by process id or process name".to_string())
    }

    fn matchers(&self) -> &[FlagSpec] {
        MATCHERS
    }

    fn flags(&self) -> &[FlagSpec] {
        FLAGS
    }

    fn programs(&self) -> &[&'static str] {
        &[STOP_PROCESS_BIN]
    }

    fn categories(&self) -> &[&'static str] {
        &[category::SYSTEM_PROCESS]
    }

    fn example(&self) -> &'static str {
        EXAMPLE
    }

    fn executor(&self) -> &dyn Executor {
        &self.executor
    }
}

pub struct StopProcessExecutor {
    channel: Option<Arc<dyn Channel>>,
    debug: bool,
}

impl StopProcessExecutor {
    pub fn new(config: &Config) -> Self {
        Self {
            channel: None,
            debug: config.debug,
        }
    }

    pub fn set_channel(&mut self, channel: Arc<dyn Channel>) {
        self.channel = Some(channel);
    }

    fn command_line(&self, mode: Mode, model: &ExpModel) -> Option<CommandLine> {
        let mut args = CommandLine::new(mode).switch("debug", self.debug);
        if let Some(process) = model.flag("process") {
            args = args.quoted("process", process);
        } else if let Some(process_cmd) = model.flag("process-cmd") {
            args = args.quoted("process-cmd", process_cmd);
        } else {
            return None;
        }
        if model.is_set("ignore-not-found") {
            args = args.switch("ignore-not-found", true);
        }
        Some(args)
    }
}

impl Executor for StopProcessExecutor {
    fn name(&self) -> &'static str {
        "stop"
    }

    fn exec(&self, uid: &str, ctx: &ExecutionContext, model: &ExpModel) -> Response {
        let Some(channel) = &self.channel else {
            return Response::fail(Code::ServerError, "channel is nil");
        };

        let mode = if ctx.is_destroy() { Mode::Stop } else { Mode::Start };
        let Some(args) = self.command_line(mode, model) else {
            return Response::fail(Code::IllegalParameters, "less process matcher");
        };

        let program = channel.script_path().join(STOP_PROCESS_BIN);
        debug!(uid, args = %args, "process stop");
        channel.run(ctx, &program, &args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::MockChannel;
    use std::path::{Path, PathBuf};

    const SCRIPT_PATH: &str = "/opt/chaosblade/bin";

    fn channel_expecting(expected: &'static str) -> Arc<dyn Channel> {
        let mut channel = MockChannel::new();
        channel
            .expect_script_path()
            .return_const(PathBuf::from(SCRIPT_PATH));
        channel
            .expect_run()
            .withf(move |_, program, args| {
                program == Path::new("/opt/chaosblade/bin/chaos_stopprocess")
                    && args.to_string() == expected
            })
            .times(1)
            .returning(|_, _, _| Response::ok("stopped"));
        Arc::new(channel)
    }

    fn channel_never_run() -> Arc<dyn Channel> {
        let mut channel = MockChannel::new();
        channel
            .expect_script_path()
            .return_const(PathBuf::from(SCRIPT_PATH));
        channel.expect_run().never();
        Arc::new(channel)
    }

    fn executor(channel: Arc<dyn Channel>) -> StopProcessExecutor {
        let mut executor = StopProcessExecutor::new(&Config::default());
        executor.set_channel(channel);
        executor
    }

    fn model() -> ExpModel {
        ExpModel::new("process", "stop")
    }

    #[test]
    fn test_missing_channel_is_server_error() {
        let executor = StopProcessExecutor::new(&Config::default());
        let resp = executor.exec(
            "uid",
            &ExecutionContext::create(),
            &model().with_flag("process", "SimpleHTTPServer"),
        );
        assert_eq!(resp.code(), Code::ServerError);
        assert_eq!(resp.message(), "channel is nil");
    }

    #[test]
    fn test_missing_matcher_is_illegal() {
        let executor = executor(channel_never_run());
        let resp = executor.exec("uid", &ExecutionContext::create(), &model());
        assert_eq!(resp.code(), Code::IllegalParameters);
        assert_eq!(resp.message(), "less process matcher");

        let resp = executor.exec(
            "uid",
            &ExecutionContext::destroy("uid"),
            &model().with_flag("process", "").with_flag("ignore-not-found", "true"),
        );
        assert_eq!(resp.code(), Code::IllegalParameters);
    }

    #[test]
    fn test_start_by_process_name() {
        let executor = executor(channel_expecting(
            r#"--start --debug=false --process "SimpleHTTPServer""#,
        ));
        let resp = executor.exec(
            "uid",
            &ExecutionContext::create(),
            &model().with_flag("process", "SimpleHTTPServer"),
        );
        assert!(resp.is_success());
        assert_eq!(resp.result(), Some("stopped"));
    }

    #[test]
    fn test_process_name_takes_precedence() {
        let executor = executor(channel_expecting(r#"--start --debug=false --process "nginx""#));
        let resp = executor.exec(
            "uid",
            &ExecutionContext::create(),
            &model()
                .with_flag("process", "nginx")
                .with_flag("process-cmd", "java"),
        );
        assert!(resp.is_success());
    }

    #[test]
    fn test_start_by_command_with_ignore_not_found() {
        let executor = executor(channel_expecting(
            r#"--start --debug=false --process-cmd "java -jar app.jar" --ignore-not-found=true"#,
        ));
        let resp = executor.exec(
            "uid",
            &ExecutionContext::create(),
            &model()
                .with_flag("process-cmd", "java -jar app.jar")
                .with_flag("ignore-not-found", "true"),
        );
        assert!(resp.is_success());
    }

    #[test]
    fn test_destroy_recovers_process() {
        let executor = executor(channel_expecting(r#"--stop --debug=false --process "demo""#));
        let resp = executor.exec(
            "uid",
            &ExecutionContext::destroy("uid"),
            &model().with_flag("process", "demo"),
        );
        assert!(resp.is_success());
    }

    #[test]
    fn test_debug_comes_from_config() {
        let mut executor = StopProcessExecutor::new(&Config {
            debug: true,
            ..Config::default()
        });
        executor.set_channel(channel_expecting(r#"--start --debug=true --process "demo""#));
        let resp = executor.exec(
            "uid",
            &ExecutionContext::create(),
            &model().with_flag("process", "demo"),
        );
        assert!(resp.is_success());
    }

    #[test]
    fn test_helper_failure_passes_through() {
        let mut channel = MockChannel::new();
        channel
            .expect_script_path()
            .return_const(PathBuf::from(SCRIPT_PATH));
        channel
            .expect_run()
            .times(1)
            .returning(|_, _, _| Response::fail(Code::ExecFailed, "process not found"));
        let executor = executor(Arc::new(channel));

        let resp = executor.exec(
            "uid",
            &ExecutionContext::create(),
            &model().with_flag("process", "ghost"),
        );
        assert_eq!(resp, Response::fail(Code::ExecFailed, "process not found"));
    }

    #[test]
    fn test_descriptor() {
        let spec = StopProcessActionSpec::new(&Config::default());
        assert_eq!(spec.target(), "process");
        assert!(spec.matches("stop"));
        assert!(spec.matches("f"));
        assert_eq!(spec.programs(), &[STOP_PROCESS_BIN]);
        assert_eq!(spec.long_desc(), "process fake death by process id or process name");
        assert!(spec.find_flag("ignore-not-found").unwrap().no_args);
        assert_eq!(spec.executor().name(), "stop");

        let spec = spec.with_long_desc("custom");
        assert_eq!(spec.long_desc(), "custom");
    }
}
