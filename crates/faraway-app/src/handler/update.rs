//! Main update function - handles state transitions (TEA pattern)

use faraway_core::Error;
use tracing::debug;

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{disclosure, packing, reject, steps, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    // The confirmation dialog is modal: the pending clear must be answered
    // before anything else may touch state.
    if state.ui_mode == UiMode::ConfirmDialog
        && !matches!(
            message,
            Message::ConfirmClear | Message::CancelClear | Message::Quit
        )
    {
        debug!("Refusing {:?} while confirmation is pending", message);
        return reject(state, Error::ConfirmationPending);
    }

    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::DismissNotice => {
            state.notice = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Packing List Messages
        // ─────────────────────────────────────────────────────────
        Message::AddItem {
            description,
            quantity,
        } => packing::handle_add_item(state, &description, quantity),
        Message::RemoveItem { id } => packing::handle_remove_item(state, id),
        Message::ToggleItem { id } => packing::handle_toggle_item(state, id),
        Message::RequestClear => packing::handle_request_clear(state),
        Message::ConfirmClear => packing::handle_confirm_clear(state),
        Message::CancelClear => packing::handle_cancel_clear(state),

        // ─────────────────────────────────────────────────────────
        // Disclosure Messages
        // ─────────────────────────────────────────────────────────
        Message::ToggleFaqPanel { id } => disclosure::handle_toggle_faq(state, id),
        Message::ExpandAllFaq => disclosure::handle_expand_all_faq(state),
        Message::CollapseAllFaq => disclosure::handle_collapse_all_faq(state),
        Message::ReplaceFaqPanels { panels } => {
            disclosure::handle_replace_faq_panels(state, panels)
        }
        Message::ToggleAccordionPanel(key) => disclosure::handle_toggle_accordion(state, key),

        // ─────────────────────────────────────────────────────────
        // Step Wizard Messages
        // ─────────────────────────────────────────────────────────
        Message::NextStep => steps::handle_next_step(state),
        Message::PreviousStep => steps::handle_previous_step(state),
        Message::ToggleSteps => steps::handle_toggle_steps(state),
    }
}
