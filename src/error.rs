//! Error types for template loading and store access.
//!
//! Color resolution itself never fails; only storage and preset lookups do.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes reported for failed loader runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Store file missing or unreadable (-1)
    StoreUnavailable = -1,
    /// Store file could not be decoded (-2)
    StoreCorrupt = -2,
    /// Project not present in the store (E100)
    ProjectNotFound = 100,
    /// Category referenced by a row is missing (E101)
    CategoryNotFound = 101,
    /// Task referenced by an update is missing (E102)
    TaskNotFound = 102,
    /// Preset name not recognised (E200)
    UnknownPreset = 200,
    /// Malformed hex color (E300)
    InvalidColor = 300,
}

/// Main error type for store and loader operations.
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("Project {project_id} not found")]
    ProjectNotFound { project_id: u64 },

    #[error("Category {category_id} not found")]
    CategoryNotFound { category_id: u64 },

    #[error("Task {task_id} not found")]
    TaskNotFound { task_id: u64 },

    #[error("Unknown template preset '{name}' (available: {available})")]
    UnknownPreset { name: String, available: String },

    #[error("Store file {path} is corrupt: {message}")]
    StoreCorrupt { path: PathBuf, message: String },

    #[error("Row ids exhausted: store already uses id {max_id}")]
    IdsExhausted { max_id: u64 },

    #[error("Invalid hex color '{value}'")]
    InvalidColor { value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PaletteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PaletteError::ProjectNotFound { .. } => ErrorCode::ProjectNotFound,
            PaletteError::CategoryNotFound { .. } => ErrorCode::CategoryNotFound,
            PaletteError::TaskNotFound { .. } => ErrorCode::TaskNotFound,
            PaletteError::UnknownPreset { .. } => ErrorCode::UnknownPreset,
            PaletteError::StoreCorrupt { .. } => ErrorCode::StoreCorrupt,
            PaletteError::IdsExhausted { .. } => ErrorCode::StoreCorrupt,
            PaletteError::InvalidColor { .. } => ErrorCode::InvalidColor,
            PaletteError::Io(_) => ErrorCode::StoreUnavailable,
            PaletteError::Json(_) => ErrorCode::StoreCorrupt,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for store and loader operations.
pub type Result<T> = std::result::Result<T, PaletteError>;
