//! Structured argument lists for the external helpers
//!
//! Arguments are kept as typed entries so they can be handed to a process
//! spawner as an argv vector. The `Display` rendering is the single-string
//! form used for logs, dry runs and channels that can only pass a string.

use std::fmt;

/// Leading mode flag understood by every helper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Start,
    Stop,
}

impl Mode {
    fn as_flag(self) -> &'static str {
        match self {
            Mode::Start => "--start",
            Mode::Stop => "--stop",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Arg {
    Mode(Mode),
    /// `--name=true|false`
    Switch { name: String, value: bool },
    /// `--name "value"`
    Quoted { name: String, value: String },
    /// `--name value`, quoted only when the value needs it
    Bare { name: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    args: Vec<Arg>,
}

impl CommandLine {
    pub fn new(mode: Mode) -> Self {
        Self {
            args: vec![Arg::Mode(mode)],
        }
    }

    pub fn start() -> Self {
        Self::new(Mode::Start)
    }

    pub fn stop() -> Self {
        Self::new(Mode::Stop)
    }

    pub fn switch(mut self, name: &str, value: bool) -> Self {
        self.args.push(Arg::Switch {
            name: name.to_string(),
            value,
        });
        self
    }

    pub fn quoted(mut self, name: &str, value: &str) -> Self {
        self.args.push(Arg::Quoted {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn value(mut self, name: &str, value: impl ToString) -> Self {
        self.args.push(Arg::Bare {
            name: name.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn mode(&self) -> Option<Mode> {
        self.args.iter().find_map(|arg| match arg {
            Arg::Mode(mode) => Some(*mode),
            _ => None,
        })
    }

    /// Argument vector for spawning the helper directly, without a shell
    pub fn to_argv(&self) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() * 2);
        for arg in &self.args {
            match arg {
                Arg::Mode(mode) => argv.push(mode.as_flag().to_string()),
                Arg::Switch { name, value } => argv.push(format!("--{}={}", name, value)),
                Arg::Quoted { name, value } | Arg::Bare { name, value } => {
                    argv.push(format!("--{}", name));
                    argv.push(value.clone());
                }
            }
        }
        argv
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arg in &self.args {
            if !first {
                f.write_str(" ")?;
            }
            first = false;
            match arg {
                Arg::Mode(mode) => f.write_str(mode.as_flag())?,
                Arg::Switch { name, value } => write!(f, "--{}={}", name, value)?,
                Arg::Quoted { name, value } => write!(f, "--{} {}", name, double_quote(value))?,
                Arg::Bare { name, value } => {
                    write!(f, "--{} {}", name, shell_words::quote(value))?
                }
            }
        }
        Ok(())
    }
}

/// POSIX double quoting: only `"`, `\`, `$` and backtick stay special inside
fn double_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\' | '$' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}
