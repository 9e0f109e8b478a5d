//! faraway-app - Application state and update logic for Far Away
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management on top of the standalone state containers:
//! - `packing`: ordered packing list and derived statistics
//! - `disclosure`: multi-open and single-open expand/collapse state
//! - `steps`: saturating step cursor and message wizard
//!
//! plus configuration loading and the confirmation dialog model.

pub mod config;
pub mod confirm_dialog;
pub mod disclosure;
pub mod handler;
pub mod message;
pub mod packing;
pub mod state;
pub mod steps;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use message::Message;
pub use state::{AppPhase, AppState, Notice, UiMode};
