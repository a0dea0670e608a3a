//! chaos-actions - fault-injection action specs driving external chaos helpers
//!
//! Each action declares the flags it accepts and knows how to turn a resolved
//! set of flags into a `--start` or `--stop` invocation of its helper binary.
//! Actions are registered in a [`Catalog`] and run through a [`Channel`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use chaos_actions::{Catalog, Config, ExecutionContext, ExpModel, LocalChannel};
//!
//! let config = Config::default();
//! let channel = Arc::new(LocalChannel::new(config.script_path.clone()));
//! let catalog = Catalog::with_defaults(&config, channel).unwrap();
//!
//! let model = ExpModel::new("process", "stop").with_flag("process", "SimpleHTTPServer");
//! let resp = catalog.dispatch("6a1f", &ExecutionContext::create(), &model);
//! println!("{:?}", resp);
//! ```

pub mod action;
pub mod channel;
pub mod cli;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod output;

pub use action::{ActionInfo, ActionSpec, Code, Executor, ExpModel, FlagSpec, Response};
pub use channel::{Channel, CommandLine, DryRunChannel, LocalChannel, Mode};
pub use config::Config;
pub use context::{ExecutionContext, Phase};
pub use engine::{
    create_experiment, destroy_experiment, Catalog, ExecutionOptions, ExperimentResult, ResultData,
};
pub use error::{ChaosError, Result};
pub use output::{format_output, OutputFormat};
