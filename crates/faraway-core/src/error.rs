//! Application error types with rich context

use thiserror::Error;

use crate::types::{ItemId, PanelId, PanelKey, MAX_QUANTITY, MIN_QUANTITY};

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // ─────────────────────────────────────────────────────────────
    // Validation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Item description must not be empty")]
    EmptyDescription,

    #[error("Quantity {quantity} is outside {}..={}", MIN_QUANTITY, MAX_QUANTITY)]
    QuantityOutOfRange { quantity: u32 },

    #[error("A step sequence needs at least one message")]
    EmptySequence,

    // ─────────────────────────────────────────────────────────────
    // Lookup Errors
    // ─────────────────────────────────────────────────────────────
    #[error("No item with id {id}")]
    ItemNotFound { id: ItemId },

    #[error("No panel with id {id}")]
    PanelNotFound { id: PanelId },

    #[error("No panel with key {key}")]
    PanelKeyNotFound { key: PanelKey },

    // ─────────────────────────────────────────────────────────────
    // Panel Identity Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Panel id {id} is declared more than once")]
    DuplicatePanelId { id: PanelId },

    #[error("Panel at position {index} has no declared id")]
    MissingPanelId { index: usize },

    // ─────────────────────────────────────────────────────────────
    // Informational
    // ─────────────────────────────────────────────────────────────
    #[error("Nothing to clear: the list is already empty")]
    NothingToClear,

    // ─────────────────────────────────────────────────────────────
    // Confirmation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("A confirmation is already pending")]
    ConfirmationPending,

    #[error("No confirmation is pending")]
    NoConfirmationPending,

    // ─────────────────────────────────────────────────────────────
    // Host Input Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid command: {message}")]
    InvalidCommand { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn invalid_command(message: impl Into<String>) -> Self {
        Self::InvalidCommand {
            message: message.into(),
        }
    }

    pub fn item_not_found(id: ItemId) -> Self {
        Self::ItemNotFound { id }
    }

    pub fn panel_not_found(id: PanelId) -> Self {
        Self::PanelNotFound { id }
    }

    pub fn quantity_out_of_range(quantity: u32) -> Self {
        Self::QuantityOutOfRange { quantity }
    }

    /// Check if this error is a notice rather than a failure
    pub fn is_informational(&self) -> bool {
        matches!(self, Error::NothingToClear)
    }

    /// Check if this error means the input was refused and state is untouched
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::EmptyDescription
                | Error::QuantityOutOfRange { .. }
                | Error::EmptySequence
                | Error::ItemNotFound { .. }
                | Error::PanelNotFound { .. }
                | Error::PanelKeyNotFound { .. }
                | Error::DuplicatePanelId { .. }
                | Error::MissingPanelId { .. }
                | Error::ConfirmationPending
                | Error::NoConfirmationPending
                | Error::InvalidCommand { .. }
        )
    }

    /// Check if this error should stop the host from starting
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Io(_)
                | Error::TomlParse(_)
                | Error::TomlSerialize(_)
                | Error::Config { .. }
                | Error::ConfigInvalid { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
