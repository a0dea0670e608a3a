//! Command line interface

pub mod args;
pub mod flags;

pub use args::{Args, SubCommand};
pub use flags::{action_command, parse_action_flags};
