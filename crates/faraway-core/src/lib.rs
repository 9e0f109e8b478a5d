//! # faraway-core - Core Domain Types
//!
//! Foundation crate for Far Away. Provides the domain values shared by the
//! state containers, the error taxonomy, and logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Item`], [`ItemId`] - A packing list line and its list-unique id
//! - [`DisclosurePanel`], [`PanelId`] - Host-supplied question/answer panels
//! - [`PanelKey`] - Effective identity of a child in an exclusive group
//! - [`MIN_QUANTITY`], [`MAX_QUANTITY`] - Quantity bounds
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with rejection / informational / fatal classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use faraway_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all Far Away crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use types::{
    normalize_description, number_label, validate_quantity, DisclosurePanel, Item, ItemId,
    PanelId, PanelKey, MAX_QUANTITY, MIN_QUANTITY,
};
