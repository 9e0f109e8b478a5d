//! Message types for the application (TEA pattern)

use faraway_core::{DisclosurePanel, ItemId, PanelId, PanelKey};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // ─────────────────────────────────────────────────────────
    // Packing List Messages
    // ─────────────────────────────────────────────────────────
    /// Form submission
    AddItem { description: String, quantity: u32 },
    /// Delete button on an item
    RemoveItem { id: ItemId },
    /// Packed checkbox on an item
    ToggleItem { id: ItemId },
    /// Clear button (may show confirmation dialog)
    RequestClear,
    /// Confirm clear from confirmation dialog
    ConfirmClear,
    /// Cancel clear from confirmation dialog
    CancelClear,

    // ─────────────────────────────────────────────────────────
    // FAQ Messages (multi-open)
    // ─────────────────────────────────────────────────────────
    ToggleFaqPanel { id: PanelId },
    ExpandAllFaq,
    CollapseAllFaq,
    /// The host supplies a new panel set; open ids that vanished are closed
    ReplaceFaqPanels { panels: Vec<DisclosurePanel> },

    // ─────────────────────────────────────────────────────────
    // Accordion Messages (single-open)
    // ─────────────────────────────────────────────────────────
    /// Emitted by an accordion child through its injected toggle callback
    ToggleAccordionPanel(PanelKey),

    // ─────────────────────────────────────────────────────────
    // Step Wizard Messages
    // ─────────────────────────────────────────────────────────
    NextStep,
    PreviousStep,
    /// Close button: hide or show the wizard
    ToggleSteps,

    // ─────────────────────────────────────────────────────────
    // Host Messages
    // ─────────────────────────────────────────────────────────
    DismissNotice,
    Quit,
}
