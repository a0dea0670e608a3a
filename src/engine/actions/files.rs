//! File append action: repeatedly append content to a file until the fault is destroyed

use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::action::{ActionSpec, Code, Executor, ExpModel, FlagSpec, Response};
use crate::channel::{Channel, CommandLine};
use crate::config::Config;
use crate::context::ExecutionContext;
use crate::engine::actions::category;

pub const APPEND_FILE_BIN: &str = "chaos_appendfile";

/// Host commands the append helper shells out to
const REQUIRED_COMMANDS: &[&str] = &["echo", "kill"];

const MATCHERS: &[FlagSpec] = &[FlagSpec::new("filepath", "The path of the target file").required()];

const FLAGS: &[FlagSpec] = &[
    FlagSpec::new("content", "append content").required(),
    FlagSpec::new("count", "the number of append count, default 1"),
    FlagSpec::new("interval", "append interval, default 1s"),
    FlagSpec::new(
        "escape",
        "symbols to escape, use --escape, at this --count is invalid",
    )
    .no_args(),
    FlagSpec::new("enable-base64", "append content enable base64 encoding").no_args(),
];

const EXAMPLE: &str = r#"
# Appends the content "HELLO WORLD" to the /home/logs/nginx.log file
chaosctl create file append --filepath=/home/logs/nginx.log --content="HELLO WORLD"

# Appends the content "HELLO WORLD" to the /home/logs/nginx.log file, interval 10 seconds
chaosctl create file append --filepath=/home/logs/nginx.log --content="HELLO WORLD" --interval 10

# Appends base64 encoded content to the /home/logs/nginx.log file
chaosctl create file append --filepath=/home/logs/nginx.log --content=SEVMTE8gV09STEQ= --enable-base64

# Mock an interface timeout exception
chaosctl create file append --filepath=/home/logs/nginx.log --content="@{DATE:+%Y-%m-%d %H:%M:%S} ERROR invoke getUser timeout [@{RANDOM:100-200}]ms abc  mock exception""#;

pub struct FileAppendActionSpec {
    executor: FileAppendExecutor,
}

impl FileAppendActionSpec {
    pub fn new(config: &Config) -> Self {
        Self {
            executor: FileAppendExecutor::new(config),
        }
    }

    pub fn with_channel(mut self, channel: Arc<dyn Channel>) -> Self {
        self.executor.set_channel(channel);
        self
    }
}

impl ActionSpec for FileAppendActionSpec {
    fn target(&self) -> &'static str {
        "file"
    }

    fn name(&self) -> &'static str {
        "append"
    }

    fn short_desc(&self) -> &'static str {
        "File content append"
    }

    fn long_desc(&self) -> String {
        "File content append. ".to_string()
    }

    fn matchers(&self) -> &[FlagSpec] {
        MATCHERS
    }

    fn flags(&self) -> &[FlagSpec] {
        FLAGS
    }

    fn programs(&self) -> &[&'static str] {
        &[APPEND_FILE_BIN]
    }

    fn categories(&self) -> &[&'static str] {
        &[category::SYSTEM_FILE]
    }

    fn example(&self) -> &'static str {
        EXAMPLE
    }

    fn executor(&self) -> &dyn Executor {
        &self.executor
    }
}

/// Validated start parameters
#[derive(Debug, PartialEq, Eq)]
struct AppendParams<'a> {
    filepath: &'a str,
    content: &'a str,
    count: u64,
    interval: u64,
    escape: bool,
    enable_base64: bool,
}

pub struct FileAppendExecutor {
    channel: Option<Arc<dyn Channel>>,
    debug: bool,
}

impl FileAppendExecutor {
    pub fn new(config: &Config) -> Self {
        Self {
            channel: None,
            debug: config.debug,
        }
    }

    pub fn set_channel(&mut self, channel: Arc<dyn Channel>) {
        self.channel = Some(channel);
    }

    fn start(
        &self,
        channel: &dyn Channel,
        uid: &str,
        ctx: &ExecutionContext,
        params: &AppendParams<'_>,
    ) -> Response {
        let mut args = CommandLine::start()
            .quoted("filepath", params.filepath)
            .quoted("content", params.content)
            .value("count", params.count)
            .value("interval", params.interval)
            .switch("debug", self.debug);
        if params.escape {
            args = args.switch("escape", true);
        }
        if params.enable_base64 {
            args = args.switch("enable-base64", true);
        }
        debug!(uid, args = %args, "file append start");
        channel.run(ctx, &channel.script_path().join(APPEND_FILE_BIN), &args)
    }

    fn stop(&self, channel: &dyn Channel, uid: &str, ctx: &ExecutionContext, filepath: &str) -> Response {
        let args = CommandLine::stop()
            .value("filepath", filepath)
            .switch("debug", self.debug);
        debug!(uid, args = %args, "file append stop");
        channel.run(ctx, &channel.script_path().join(APPEND_FILE_BIN), &args)
    }
}

impl Executor for FileAppendExecutor {
    fn name(&self) -> &'static str {
        "append"
    }

    fn exec(&self, uid: &str, ctx: &ExecutionContext, model: &ExpModel) -> Response {
        let Some(channel) = &self.channel else {
            return Response::fail(Code::ServerError, "channel is nil");
        };

        let Some(filepath) = model.flag("filepath") else {
            return Response::fail(Code::IllegalParameters, "less parameter: --filepath");
        };

        if let Some(missing) = REQUIRED_COMMANDS
            .iter()
            .find(|command| !channel.is_command_available(command))
        {
            return Response::fail(Code::CommandNotFound, format!("{} command not found", missing));
        }

        if ctx.is_destroy() {
            return self.stop(channel.as_ref(), uid, ctx, filepath);
        }

        match parse_start_params(filepath, model) {
            Ok(params) => self.start(channel.as_ref(), uid, ctx, &params),
            Err(resp) => resp,
        }
    }
}

fn parse_start_params<'a>(filepath: &'a str, model: &'a ExpModel) -> Result<AppendParams<'a>, Response> {
    let Some(content) = model.flag("content") else {
        return Err(Response::fail(Code::IllegalParameters, "less parameter: --content"));
    };
    let count = positive_or_default(model, "count")?;
    let interval = positive_or_default(model, "interval")?;

    if !Path::new(filepath).exists() {
        return Err(Response::fail(
            Code::IllegalParameters,
            format!("the {} file does not exist", filepath),
        ));
    }

    Ok(AppendParams {
        filepath,
        content,
        count,
        interval,
        escape: model.is_set("escape"),
        enable_base64: model.is_set("enable-base64"),
    })
}

/// Positive integer flag, 1 when absent
fn positive_or_default(model: &ExpModel, name: &str) -> Result<u64, Response> {
    match model.flag(name) {
        None => Ok(1),
        Some(raw) => raw.parse::<u64>().ok().filter(|n| *n >= 1).ok_or_else(|| {
            Response::fail(
                Code::IllegalParameters,
                format!("--{} value must be a positive integer", name),
            )
        }),
    }
}
