//! Built-in actions (fault injections)

pub mod files;
pub mod process;

pub use files::{FileAppendActionSpec, FileAppendExecutor, APPEND_FILE_BIN};
pub use process::{StopProcessActionSpec, StopProcessExecutor, STOP_PROCESS_BIN};

/// Category tags attached to action descriptors
pub mod category {
    pub const SYSTEM_PROCESS: &str = "system_process";
    pub const SYSTEM_FILE: &str = "system_file";
}
