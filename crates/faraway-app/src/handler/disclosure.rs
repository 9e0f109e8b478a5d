//! FAQ and accordion handlers

use faraway_core::{DisclosurePanel, PanelId, PanelKey};

use crate::state::AppState;

use super::{settle, UpdateResult};

pub fn handle_toggle_faq(state: &mut AppState, id: PanelId) -> UpdateResult {
    let result = state.toggle_faq(id);
    settle(state, result)
}

pub fn handle_expand_all_faq(state: &mut AppState) -> UpdateResult {
    state.expand_all_faq();
    UpdateResult::none()
}

pub fn handle_replace_faq_panels(
    state: &mut AppState,
    panels: Vec<DisclosurePanel>,
) -> UpdateResult {
    let result = state.set_faq_panels(panels);
    settle(state, result)
}

pub fn handle_collapse_all_faq(state: &mut AppState) -> UpdateResult {
    state.faq.collapse_all();
    UpdateResult::none()
}

pub fn handle_toggle_accordion(state: &mut AppState, key: PanelKey) -> UpdateResult {
    let result = state.toggle_accordion(key);
    settle(state, result)
}
