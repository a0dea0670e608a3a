//! Flag declarations

use serde::Serialize;

/// A flag accepted by an action, declared statically alongside the action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagSpec {
    pub name: &'static str,
    pub desc: &'static str,
    pub required: bool,
    /// Boolean switch, takes no value on the command line
    pub no_args: bool,
}

impl FlagSpec {
    pub const fn new(name: &'static str, desc: &'static str) -> Self {
        Self {
            name,
            desc,
            required: false,
            no_args: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn no_args(mut self) -> Self {
        self.no_args = true;
        self
    }
}
