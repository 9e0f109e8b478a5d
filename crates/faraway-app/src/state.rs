//! Application state (Model in TEA pattern)

use std::collections::HashSet;

use faraway_core::prelude::*;
use faraway_core::{DisclosurePanel, PanelId, PanelKey};
use serde::Serialize;

use crate::config::Settings;
use crate::confirm_dialog::ConfirmDialogState;
use crate::disclosure::{AccordionItem, DisclosureSet, ExclusiveDisclosure};
use crate::message::Message;
use crate::packing::{PackingList, PackingStats};
use crate::steps::StepWizard;

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,

    /// Confirmation dialog open; only its answers are accepted
    ConfirmDialog,
}

/// Host lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Non-blocking acknowledgement for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Clear was requested on an empty list
    NothingToClear,
    /// An operation refused its input; state is unchanged
    Rejected { reason: String },
}

impl Notice {
    pub fn rejected(err: &Error) -> Self {
        Notice::Rejected {
            reason: err.to_string(),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Notice::NothingToClear => "Your packing list is already empty.".to_string(),
            Notice::Rejected { reason } => reason.clone(),
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    pub ui_mode: UiMode,

    pub packing: PackingList,

    /// Panels for the multi-open FAQ; replaced only through `set_faq_panels`
    faq_panels: Vec<DisclosurePanel>,

    pub faq: DisclosureSet,

    pub accordion: ExclusiveDisclosure,

    /// Children of the single-open accordion, refreshed by every broadcast
    pub accordion_items: Vec<AccordionItem>,

    pub steps: StepWizard,

    /// Confirmation dialog state
    pub confirm_dialog_state: Option<ConfirmDialogState>,

    pub notice: Option<Notice>,
}

impl AppState {
    /// Build the initial state from settings
    ///
    /// Seed data is held to the same rules as live input.
    /// Any seed that fails validation is reported as
    /// [`Error::ConfigInvalid`] naming the offending section.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let packing = PackingList::with_items(
            settings
                .packing
                .initial_items
                .iter()
                .map(|seed| (seed.description.as_str(), seed.quantity, seed.packed)),
        )
        .map_err(|e| invalid_section("packing", e))?;

        ensure_unique_panel_ids(&settings.faq.panels).map_err(|e| invalid_section("faq", e))?;

        let steps = StepWizard::new(settings.steps.messages.clone())
            .map_err(|e| invalid_section("steps", e))?;

        let accordion = ExclusiveDisclosure::new(settings.accordion.identity);
        let mut accordion_items: Vec<AccordionItem> = settings
            .accordion
            .items
            .iter()
            .map(|item| AccordionItem::new(item.id, item.title.clone(), item.content.clone()))
            .collect();
        accordion
            .broadcast(&mut accordion_items, Message::ToggleAccordionPanel)
            .map_err(|e| invalid_section("accordion", e))?;

        info!(
            "State ready: {} items, {} faq panels, {} accordion items, {} steps",
            packing.len(),
            settings.faq.panels.len(),
            accordion_items.len(),
            steps.step_count()
        );

        Ok(Self {
            phase: AppPhase::default(),
            ui_mode: UiMode::default(),
            packing,
            faq_panels: settings.faq.panels.clone(),
            faq: DisclosureSet::new(),
            accordion,
            accordion_items,
            steps,
            confirm_dialog_state: None,
            notice: None,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Packing statistics for the current items
    pub fn stats(&self) -> PackingStats {
        self.packing.stats()
    }

    /// Start the clear protocol
    ///
    /// Opens the confirmation dialog for a non-empty list. An empty list
    /// yields [`Error::NothingToClear`] and no dialog.
    pub fn request_clear(&mut self) -> Result<()> {
        if self.confirm_dialog_state.is_some() {
            return Err(Error::ConfirmationPending);
        }
        let count = self.packing.request_clear()?;
        self.confirm_dialog_state = Some(ConfirmDialogState::clear_confirmation(count));
        self.ui_mode = UiMode::ConfirmDialog;
        Ok(())
    }

    /// Confirm clear (from confirmation dialog); returns items dropped
    pub fn confirm_clear(&mut self) -> Result<usize> {
        self.close_dialog()?;
        Ok(self.packing.clear_confirmed())
    }

    /// Cancel clear (from confirmation dialog)
    pub fn cancel_clear(&mut self) -> Result<()> {
        self.close_dialog()
    }

    fn close_dialog(&mut self) -> Result<()> {
        if self.confirm_dialog_state.take().is_none() {
            return Err(Error::NoConfirmationPending);
        }
        self.ui_mode = UiMode::Normal;
        Ok(())
    }

    pub fn faq_panels(&self) -> &[DisclosurePanel] {
        &self.faq_panels
    }

    /// Replace the FAQ panels, closing any open panel that is no longer supplied
    pub fn set_faq_panels(&mut self, panels: Vec<DisclosurePanel>) -> Result<()> {
        ensure_unique_panel_ids(&panels)?;
        self.faq.retain_supplied(&panels);
        self.faq_panels = panels;
        debug!(
            "FAQ panels replaced: {} supplied, {} open",
            self.faq_panels.len(),
            self.faq.open_count()
        );
        Ok(())
    }

    pub fn toggle_faq(&mut self, id: PanelId) -> Result<bool> {
        self.faq.toggle(&self.faq_panels, id)
    }

    pub fn expand_all_faq(&mut self) {
        self.faq.expand_all(&self.faq_panels);
    }

    /// Toggle a panel in the single-open accordion and re-inject props
    pub fn toggle_accordion(&mut self, key: PanelKey) -> Result<Option<PanelKey>> {
        if !self.accordion_items.iter().any(|item| item.key() == Some(key)) {
            return Err(Error::PanelKeyNotFound { key });
        }
        let open = self.accordion.toggle(key);
        self.accordion
            .broadcast(&mut self.accordion_items, Message::ToggleAccordionPanel)?;
        Ok(open)
    }

    /// Key of the accordion child at `index`, as assigned by the last broadcast
    pub fn accordion_key_at(&self, index: usize) -> Option<PanelKey> {
        self.accordion_items.get(index).and_then(|item| item.key())
    }
}

fn ensure_unique_panel_ids(panels: &[DisclosurePanel]) -> Result<()> {
    let mut seen = HashSet::new();
    for panel in panels {
        if !seen.insert(panel.id) {
            return Err(Error::DuplicatePanelId { id: panel.id });
        }
    }
    Ok(())
}

fn invalid_section(section: &str, err: Error) -> Error {
    Error::config_invalid(format!("[{}] {}", section, err))
}
