//! Headless mode - line commands in, JSON events out
//!
//! The headless host reads one command per line from stdin, drives the TEA
//! update loop, and writes structured JSON events to stdout.
//!
//! # Event Format
//!
//! Events are output as NDJSON (newline-delimited JSON), one event per line.
//! Each event has an "event" field indicating its type.
//!
//! # Example Output
//!
//! ```json
//! {"event":"confirmation_requested","title":"Clear packing list?","message":"Are you sure you want to delete all 2 items?","item_count":2,"timestamp":1704700001000}
//! {"event":"notice","notice":{"kind":"nothing_to_clear"},"text":"Your packing list is already empty.","timestamp":1704700002000}
//! ```

pub mod command;
pub mod runner;

use std::io::Write;

use chrono::Utc;
use faraway_app::packing::PackingStats;
use faraway_app::{AppState, Notice};
use faraway_core::prelude::*;
use faraway_core::{Item, PanelId, PanelKey};
use serde::Serialize;

pub use command::{parse_command, Command};
pub use runner::run_headless;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Snapshot of every state container after a command
    State {
        items: Vec<Item>,
        stats: PackingStats,
        summary: String,
        faq_open: Vec<PanelId>,
        accordion_open: Option<PanelKey>,
        step: usize,
        step_count: usize,
        steps_visible: bool,
        steps_display: String,
        timestamp: i64,
    },

    /// The pending clear needs a yes/no answer on the next line
    ConfirmationRequested {
        title: String,
        message: String,
        item_count: usize,
        timestamp: i64,
    },

    /// Non-blocking notice (empty list, rejected input)
    Notice {
        notice: Notice,
        text: String,
        timestamp: i64,
    },

    /// A line could not be turned into a command
    Error { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Write this event as one NDJSON line
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let json = serde_json::to_string(self)?;
        writeln!(out, "{}", json)?;
        out.flush()?;
        Ok(())
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn state(state: &AppState) -> Self {
        let stats = state.stats();
        HeadlessEvent::State {
            items: state.packing.items().to_vec(),
            stats,
            summary: stats.summary().to_string(),
            faq_open: state.faq.open_ids().collect(),
            accordion_open: state.accordion.open_key(),
            step: state.steps.step(),
            step_count: state.steps.step_count(),
            steps_visible: state.steps.is_visible(),
            steps_display: state.steps.display(),
            timestamp: Self::now(),
        }
    }

    /// `None` when no dialog is open
    pub fn confirmation_requested(state: &AppState) -> Option<Self> {
        state
            .confirm_dialog_state
            .as_ref()
            .map(|dialog| HeadlessEvent::ConfirmationRequested {
                title: dialog.title.clone(),
                message: dialog.message.clone(),
                item_count: dialog.item_count,
                timestamp: Self::now(),
            })
    }

    pub fn notice(notice: Notice) -> Self {
        HeadlessEvent::Notice {
            text: notice.text(),
            notice,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        HeadlessEvent::Error {
            message: message.into(),
            timestamp: Self::now(),
        }
    }
}
