//! Headless mode runner - main event loop without a UI
//!
//! Reads commands line by line, processes them through `update()`, and
//! emits JSON events describing what happened.

use std::io::{BufRead, Write};

use faraway_app::{update, AppState, Message, UiMode, UpdateAction};
use faraway_core::prelude::*;
use faraway_core::PanelKey;

use super::{parse_command, Command, HeadlessEvent};

/// Run in headless mode until input ends or a quit command arrives
pub fn run_headless<R: BufRead, W: Write>(
    state: &mut AppState,
    input: R,
    out: &mut W,
) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Far Away starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    HeadlessEvent::state(state).write_to(out)?;

    for line in input.lines() {
        let line = line?;
        if let Err(e) = handle_line(state, &line, out) {
            if e.is_fatal() {
                error!("Headless loop stopped: {}", e);
                return Err(e);
            }
            warn!("Headless input rejected: {}", e);
            HeadlessEvent::error(e.to_string()).write_to(out)?;
        }

        if state.should_quit() {
            info!("Quit requested");
            break;
        }
    }

    info!("Far Away headless mode exiting");
    Ok(())
}

fn handle_line<W: Write>(state: &mut AppState, line: &str, out: &mut W) -> Result<()> {
    // A pending confirmation consumes the next line: "yes" confirms, any
    // other input (including an unparseable line) declines.
    if state.ui_mode == UiMode::ConfirmDialog {
        let yes = matches!(parse_command(line), Ok(Some(Command::Answer(true))));
        let answer = state
            .confirm_dialog_state
            .as_ref()
            .and_then(|dialog| dialog.answer(yes))
            .unwrap_or(Message::CancelClear);
        return process_message(state, answer, out);
    }

    let Some(command) = parse_command(line)? else {
        return Ok(());
    };

    match command {
        Command::Message(msg) => process_message(state, msg, out),
        Command::Answer(yes) => {
            let msg = if yes {
                Message::ConfirmClear
            } else {
                Message::CancelClear
            };
            process_message(state, msg, out)
        }
        Command::Accordion(index) => {
            // Out-of-range positions still reach update() so the rejection
            // surfaces as a notice like any other.
            let key = state
                .accordion_key_at(index)
                .unwrap_or(PanelKey::Positional(index));
            process_message(state, Message::ToggleAccordionPanel(key), out)
        }
        Command::Stats => HeadlessEvent::state(state).write_to(out),
    }
}

/// Process a message and its follow-ups, then emit the resulting events
fn process_message<W: Write>(state: &mut AppState, msg: Message, out: &mut W) -> Result<()> {
    let mut next = Some(msg);

    while let Some(msg) = next.take() {
        debug!("Processing {:?}", msg);
        let result = update(state, msg);

        match result.action {
            Some(UpdateAction::PromptConfirmation) => {
                if let Some(event) = HeadlessEvent::confirmation_requested(state) {
                    event.write_to(out)?;
                }
            }
            Some(UpdateAction::ShowNotice(notice)) => {
                HeadlessEvent::notice(notice).write_to(out)?;
            }
            None => {}
        }

        next = result.message;
    }

    HeadlessEvent::state(state).write_to(out)
}
