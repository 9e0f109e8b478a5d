//! Packing list handlers

use faraway_core::ItemId;
use tracing::{debug, info};

use crate::state::AppState;

use super::{reject, settle, UpdateAction, UpdateResult};

pub fn handle_add_item(state: &mut AppState, description: &str, quantity: u32) -> UpdateResult {
    let result = state.packing.add(description, quantity);
    settle(state, result)
}

pub fn handle_remove_item(state: &mut AppState, id: ItemId) -> UpdateResult {
    let result = state.packing.remove(id);
    settle(state, result)
}

pub fn handle_toggle_item(state: &mut AppState, id: ItemId) -> UpdateResult {
    let result = state.packing.toggle(id);
    settle(state, result)
}

pub fn handle_request_clear(state: &mut AppState) -> UpdateResult {
    match state.request_clear() {
        Ok(()) => {
            debug!("Clear requested; awaiting confirmation");
            state.notice = None;
            UpdateResult::action(UpdateAction::PromptConfirmation)
        }
        Err(err) => reject(state, err),
    }
}

pub fn handle_confirm_clear(state: &mut AppState) -> UpdateResult {
    match state.confirm_clear() {
        Ok(count) => {
            info!("Packing list cleared ({} items)", count);
            state.notice = None;
            UpdateResult::none()
        }
        Err(err) => reject(state, err),
    }
}

pub fn handle_cancel_clear(state: &mut AppState) -> UpdateResult {
    let result = state.cancel_clear();
    if result.is_ok() {
        debug!("Clear cancelled");
    }
    settle(state, result)
}
