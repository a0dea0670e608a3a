//! Execution engine: action catalog, built-in actions and experiment entry points

pub mod actions;
pub mod catalog;
pub mod executor;

pub use catalog::Catalog;
pub use executor::{
    create_experiment, destroy_experiment, ExecutionOptions, ExperimentResult, ResultData,
};
