//! Action responses and response codes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome class of an action invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Code {
    Ok,
    IllegalParameters,
    ActionNotSupported,
    CommandNotFound,
    ServerError,
    ExecFailed,
}

impl Code {
    pub fn as_u16(self) -> u16 {
        match self {
            Code::Ok => 200,
            Code::IllegalParameters => 400,
            Code::ActionNotSupported => 404,
            Code::CommandNotFound => 424,
            Code::ServerError => 500,
            Code::ExecFailed => 510,
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Code::Ok => "ok",
            Code::IllegalParameters => "illegal parameters",
            Code::ActionNotSupported => "action not supported",
            Code::CommandNotFound => "command not found",
            Code::ServerError => "server error",
            Code::ExecFailed => "exec failed",
        };
        write!(f, "{} ({})", self.as_u16(), name)
    }
}

/// Result of an attempted action. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    code: Code,
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
}

impl Response {
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            code: Code::Ok,
            success: true,
            message: String::new(),
            result: Some(result.into()),
        }
    }

    pub fn fail(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            success: false,
            message: message.into(),
            result: None,
        }
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }
}
