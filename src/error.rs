//! Error types for chaos-actions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChaosError {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Invalid flag name: {0}")]
    InvalidFlagName(String),

    #[error("Unknown action: {target} {action}")]
    UnknownAction { target: String, action: String },

    #[error("Argument error: {0}")]
    ArgumentError(String),

    #[error("Actions not enabled. Use --allow-actions to inject faults, or --dry-run to preview them")]
    ActionsDisabled,
}

pub type Result<T> = std::result::Result<T, ChaosError>;
