//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `packing`: Packing list and clear-confirmation handlers
//! - `disclosure`: FAQ and accordion handlers
//! - `steps`: Step wizard handlers

pub(crate) mod disclosure;
pub(crate) mod packing;
pub(crate) mod steps;
pub(crate) mod update;

#[cfg(test)]
mod tests;

use faraway_core::prelude::*;

use crate::message::Message;
use crate::state::{AppState, Notice};

// Re-export main entry point
pub use update::update;

/// Actions that the host should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Ask the user the question in `state.confirm_dialog_state` and feed
    /// the answer back as `ConfirmClear` / `CancelClear`
    PromptConfirmation,

    /// Show a non-blocking notice
    ShowNotice(Notice),
}

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the host to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Record a refused operation as a notice and ask the host to show it
pub(crate) fn reject(state: &mut AppState, err: Error) -> UpdateResult {
    let notice = if err.is_informational() {
        Notice::NothingToClear
    } else {
        if err.is_rejection() {
            warn!("Rejected: {}", err);
        } else {
            error!("Operation failed: {}", err);
        }
        Notice::rejected(&err)
    };
    state.notice = Some(notice.clone());
    UpdateResult::action(UpdateAction::ShowNotice(notice))
}

/// Turn an operation result into an update result
///
/// Success clears any stale notice; failure goes through [`reject`].
pub(crate) fn settle<T>(state: &mut AppState, result: Result<T>) -> UpdateResult {
    match result {
        Ok(_) => {
            state.notice = None;
            UpdateResult::none()
        }
        Err(err) => reject(state, err),
    }
}
