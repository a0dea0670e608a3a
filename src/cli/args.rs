//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_SCRIPT_PATH};

#[derive(Parser)]
#[command(name = "chaosctl")]
#[command(author, version, about = "Inject and recover faults through chaos helper binaries", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Pass --debug=true to the helper binaries
    #[arg(long, global = true, env = "CHAOS_DEBUG")]
    pub debug: bool,

    /// Directory holding the helper binaries
    #[arg(long, global = true, env = "CHAOS_SCRIPT_PATH", default_value = DEFAULT_SCRIPT_PATH)]
    pub script_path: PathBuf,

    /// Show the helper invocation without running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Allow fault injection (create, destroy)
    #[arg(long, global = true)]
    pub allow_actions: bool,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Args {
    pub fn config(&self) -> Config {
        Config {
            script_path: self.script_path.clone(),
            debug: self.debug,
        }
    }
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Inject a fault
    Create {
        /// Resource kind, e.g. process or file
        target: String,

        /// Action name or alias, e.g. stop
        action: String,

        /// Action flags, e.g. --process nginx
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        flags: Vec<String>,
    },

    /// Recover a fault created earlier
    Destroy {
        /// Uid printed by create
        uid: String,

        /// Resource kind, e.g. process or file
        target: String,

        /// Action name or alias, e.g. stop
        action: String,

        /// The flags the fault was created with
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        flags: Vec<String>,
    },

    /// List registered actions
    List,

    /// Show the flags and examples of an action
    Describe {
        target: String,
        action: String,
    },
}
