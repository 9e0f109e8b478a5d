//! Tests for handler module

use super::*;
use crate::config::Settings;
use crate::message::Message;
use crate::state::{AppState, Notice, UiMode};
use faraway_core::{ItemId, PanelKey};

fn test_state() -> AppState {
    AppState::from_settings(&Settings::default()).unwrap()
}

/// State with an empty packing list
fn empty_state() -> AppState {
    let mut settings = Settings::default();
    settings.packing.initial_items.clear();
    AppState::from_settings(&settings).unwrap()
}

fn add(state: &mut AppState, description: &str, quantity: u32) -> ItemId {
    update(
        state,
        Message::AddItem {
            description: description.to_string(),
            quantity,
        },
    );
    state.packing.items().last().unwrap().id
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = test_state();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────────
// Packing list
// ─────────────────────────────────────────────────────────────

#[test]
fn test_add_item_appends() {
    let mut state = empty_state();

    let result = update(
        &mut state,
        Message::AddItem {
            description: "Passports".to_string(),
            quantity: 2,
        },
    );

    assert_eq!(result, UpdateResult::none());
    assert_eq!(state.packing.len(), 1);
    assert!(state.notice.is_none());
}

#[test]
fn test_add_empty_description_shows_rejection() {
    let mut state = empty_state();

    let result = update(
        &mut state,
        Message::AddItem {
            description: String::new(),
            quantity: 1,
        },
    );

    assert!(state.packing.is_empty());
    assert!(matches!(
        result.action,
        Some(UpdateAction::ShowNotice(Notice::Rejected { .. }))
    ));
    assert!(matches!(state.notice, Some(Notice::Rejected { .. })));
}

#[test]
fn test_successful_add_clears_stale_notice() {
    let mut state = empty_state();
    update(&mut state, Message::RemoveItem { id: ItemId::new(99) });
    assert!(state.notice.is_some());

    add(&mut state, "Hat", 1);

    assert!(state.notice.is_none());
}

#[test]
fn test_remove_middle_item_keeps_order() {
    let mut state = empty_state();
    let a = add(&mut state, "A", 1);
    let b = add(&mut state, "B", 1);
    let c = add(&mut state, "C", 1);

    update(&mut state, Message::RemoveItem { id: b });

    let ids: Vec<_> = state.packing.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![a, c]);
}

#[test]
fn test_remove_absent_id_is_reported() {
    let mut state = test_state();

    let result = update(&mut state, Message::RemoveItem { id: ItemId::new(404) });

    assert_eq!(state.packing.len(), 2);
    match result.action {
        Some(UpdateAction::ShowNotice(Notice::Rejected { reason })) => {
            assert_eq!(reason, "No item with id 404");
        }
        other => panic!("unexpected action {other:?}"),
    }
}

#[test]
fn test_toggle_item_updates_stats() {
    let mut state = empty_state();
    let a = add(&mut state, "A", 1);
    add(&mut state, "B", 1);

    update(&mut state, Message::ToggleItem { id: a });

    let stats = state.stats();
    assert_eq!(stats.packed, 1);
    assert_eq!(stats.percentage, Some(50));
}

// ─────────────────────────────────────────────────────────────
// Clear confirmation
// ─────────────────────────────────────────────────────────────

#[test]
fn test_clear_on_empty_list_shows_notice_without_prompt() {
    let mut state = empty_state();

    let result = update(&mut state, Message::RequestClear);

    assert_eq!(
        result.action,
        Some(UpdateAction::ShowNotice(Notice::NothingToClear))
    );
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.confirm_dialog_state.is_none());
}

#[test]
fn test_clear_prompts_then_confirm_empties() {
    let mut state = test_state();

    let result = update(&mut state, Message::RequestClear);
    assert_eq!(result.action, Some(UpdateAction::PromptConfirmation));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert_eq!(state.packing.len(), 2);

    update(&mut state, Message::ConfirmClear);

    assert!(state.packing.is_empty());
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(state.confirm_dialog_state.is_none());
}

#[test]
fn test_clear_cancel_keeps_items() {
    let mut state = test_state();
    let before = state.packing.clone();

    update(&mut state, Message::RequestClear);
    update(&mut state, Message::CancelClear);

    assert_eq!(state.packing, before);
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn test_dialog_answer_round_trip() {
    let mut state = test_state();
    update(&mut state, Message::RequestClear);

    let answer = state
        .confirm_dialog_state
        .as_ref()
        .and_then(|dialog| dialog.answer(true))
        .unwrap();
    update(&mut state, answer);

    assert!(state.packing.is_empty());
}

#[test]
fn test_messages_refused_while_dialog_open() {
    let mut state = test_state();
    update(&mut state, Message::RequestClear);

    let result = update(
        &mut state,
        Message::AddItem {
            description: "Sneaky".to_string(),
            quantity: 1,
        },
    );
    update(&mut state, Message::NextStep);
    update(&mut state, Message::RequestClear);

    assert_eq!(
        result.action,
        Some(UpdateAction::ShowNotice(Notice::Rejected {
            reason: "A confirmation is already pending".to_string()
        }))
    );
    assert_eq!(state.packing.len(), 2);
    assert_eq!(state.steps.step(), 1);
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert!(state.confirm_dialog_state.is_some());
}

#[test]
fn test_quit_allowed_while_dialog_open() {
    let mut state = test_state();
    update(&mut state, Message::RequestClear);

    update(&mut state, Message::Quit);

    assert!(state.should_quit());
}

#[test]
fn test_confirm_without_dialog_is_rejected() {
    let mut state = test_state();

    let result = update(&mut state, Message::ConfirmClear);

    assert_eq!(state.packing.len(), 2);
    assert!(matches!(
        result.action,
        Some(UpdateAction::ShowNotice(Notice::Rejected { .. }))
    ));
}

#[test]
fn test_dismiss_notice() {
    let mut state = empty_state();
    update(&mut state, Message::RequestClear);
    assert_eq!(state.notice, Some(Notice::NothingToClear));

    update(&mut state, Message::DismissNotice);

    assert!(state.notice.is_none());
}

// ─────────────────────────────────────────────────────────────
// Disclosure
// ─────────────────────────────────────────────────────────────

#[test]
fn test_faq_panels_open_independently() {
    let mut state = test_state();

    update(&mut state, Message::ToggleFaqPanel { id: 1 });
    update(&mut state, Message::ToggleFaqPanel { id: 2 });

    assert!(state.faq.is_open(1));
    assert!(state.faq.is_open(2));

    update(&mut state, Message::ToggleFaqPanel { id: 1 });
    assert!(!state.faq.is_open(1));
}

#[test]
fn test_faq_unknown_panel_rejected() {
    let mut state = test_state();

    let result = update(&mut state, Message::ToggleFaqPanel { id: 42 });

    assert!(result.action.is_some());
    assert_eq!(state.faq.open_count(), 0);
}

#[test]
fn test_faq_expand_and_collapse_all() {
    let mut state = test_state();

    update(&mut state, Message::ExpandAllFaq);
    assert_eq!(state.faq.open_count(), 3);

    update(&mut state, Message::CollapseAllFaq);
    assert_eq!(state.faq.open_count(), 0);
}

#[test]
fn test_replacing_faq_panels_closes_removed_ones() {
    let mut state = test_state();
    update(&mut state, Message::ToggleFaqPanel { id: 1 });
    update(&mut state, Message::ToggleFaqPanel { id: 2 });

    let panels: Vec<_> = state
        .faq_panels()
        .iter()
        .filter(|panel| panel.id != 2)
        .cloned()
        .collect();
    let result = update(&mut state, Message::ReplaceFaqPanels { panels });

    assert_eq!(result, UpdateResult::none());
    let open: Vec<_> = state.faq.open_ids().collect();
    let supplied: Vec<_> = state.faq_panels().iter().map(|panel| panel.id).collect();
    assert_eq!(open, vec![1]);
    assert_eq!(supplied, vec![1, 3]);
    assert!(open.iter().all(|id| supplied.contains(id)));
}

#[test]
fn test_replacing_faq_panels_with_duplicates_is_rejected() {
    let mut state = test_state();
    update(&mut state, Message::ToggleFaqPanel { id: 2 });
    let mut panels = state.faq_panels().to_vec();
    panels.push(panels[1].clone());

    let result = update(&mut state, Message::ReplaceFaqPanels { panels });

    assert!(matches!(
        result.action,
        Some(UpdateAction::ShowNotice(Notice::Rejected { .. }))
    ));
    assert_eq!(state.faq_panels().len(), 3);
    assert!(state.faq.is_open(2));
}

#[test]
fn test_accordion_click_flows_through_update() {
    let mut state = test_state();

    let click = state.accordion_items[0].click().unwrap();
    update(&mut state, click);
    assert!(state.accordion_items[0].is_open());

    let click = state.accordion_items[2].click().unwrap();
    update(&mut state, click);
    assert!(!state.accordion_items[0].is_open());
    assert!(state.accordion_items[2].is_open());

    let click = state.accordion_items[2].click().unwrap();
    update(&mut state, click);
    assert!(state.accordion_items.iter().all(|item| !item.is_open()));
}

#[test]
fn test_accordion_never_two_open() {
    let mut state = test_state();
    for index in [0usize, 1, 2, 2, 1, 0, 0, 1, 2, 1] {
        let key = state.accordion_key_at(index).unwrap();
        update(&mut state, Message::ToggleAccordionPanel(key));
        let open = state.accordion_items.iter().filter(|i| i.is_open()).count();
        assert!(open <= 1);
    }
}

#[test]
fn test_accordion_unknown_key_rejected() {
    let mut state = test_state();

    let result = update(
        &mut state,
        Message::ToggleAccordionPanel(PanelKey::Declared(99)),
    );

    assert!(result.action.is_some());
    assert_eq!(state.accordion.open_key(), None);
}

// ─────────────────────────────────────────────────────────────
// Steps
// ─────────────────────────────────────────────────────────────

#[test]
fn test_step_sequence_saturates() {
    let mut state = test_state();

    for msg in [
        Message::PreviousStep,
        Message::PreviousStep,
        Message::NextStep,
        Message::NextStep,
        Message::NextStep,
        Message::NextStep,
    ] {
        update(&mut state, msg);
    }

    assert_eq!(state.steps.step(), 3);
}

#[test]
fn test_toggle_steps_keeps_step() {
    let mut state = test_state();
    update(&mut state, Message::NextStep);

    update(&mut state, Message::ToggleSteps);
    assert!(!state.steps.is_visible());
    assert_eq!(state.steps.step(), 2);

    update(&mut state, Message::ToggleSteps);
    assert!(state.steps.is_visible());
    assert_eq!(state.steps.step(), 2);
}
