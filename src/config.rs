//! Runtime configuration shared by every executor

use std::path::PathBuf;

/// Directory the external chaos helpers are installed in when nothing else is configured
pub const DEFAULT_SCRIPT_PATH: &str = "/opt/chaosblade/bin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the external helper binaries
    pub script_path: PathBuf,
    /// Passed through to every helper as `--debug=<bool>`
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script_path: PathBuf::from(DEFAULT_SCRIPT_PATH),
            debug: false,
        }
    }
}
