//! Step wizard handlers

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_next_step(state: &mut AppState) -> UpdateResult {
    state.steps.next();
    UpdateResult::none()
}

pub fn handle_previous_step(state: &mut AppState) -> UpdateResult {
    state.steps.previous();
    UpdateResult::none()
}

pub fn handle_toggle_steps(state: &mut AppState) -> UpdateResult {
    state.steps.toggle_visibility();
    UpdateResult::none()
}
