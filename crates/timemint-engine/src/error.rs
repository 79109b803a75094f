//! Error types for timemint-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    #[error("Invalid horizon: {0}")]
    InvalidHorizon(String),

    #[error("Invalid wire slot: {0}")]
    InvalidWireSlot(String),

    #[error("Invalid event payload: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
