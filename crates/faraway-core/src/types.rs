//! Core domain types

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Smallest quantity a packing item may carry
pub const MIN_QUANTITY: u32 = 1;

/// Largest quantity a packing item may carry
pub const MAX_QUANTITY: u32 = 20;

// ─────────────────────────────────────────────────────────────────────────────
// Packing Items
// ─────────────────────────────────────────────────────────────────────────────

/// Unique identifier of an item within one packing list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single line of a packing list
///
/// `description` and `quantity` are fixed at creation. Only `packed` changes,
/// and only through [`Item::toggled`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub description: String,
    pub quantity: u32,
    pub packed: bool,
}

impl Item {
    /// Build a validated, unpacked item
    pub fn new(id: ItemId, description: &str, quantity: u32) -> Result<Self> {
        Ok(Self {
            id,
            description: normalize_description(description)?,
            quantity: validate_quantity(quantity)?,
            packed: false,
        })
    }

    /// A copy of this item with `packed` flipped
    pub fn toggled(&self) -> Self {
        Self {
            packed: !self.packed,
            ..self.clone()
        }
    }
}

/// Trim a description and reject it if nothing is left
pub fn normalize_description(description: &str) -> Result<String> {
    let trimmed = description.trim();
    if trimmed.is_empty() {
        return Err(Error::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

/// Check that a quantity lies in `MIN_QUANTITY..=MAX_QUANTITY`
pub fn validate_quantity(quantity: u32) -> Result<u32> {
    if (MIN_QUANTITY..=MAX_QUANTITY).contains(&quantity) {
        Ok(quantity)
    } else {
        Err(Error::quantity_out_of_range(quantity))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Disclosure Panels
// ─────────────────────────────────────────────────────────────────────────────

/// Identifier a panel declares for itself
pub type PanelId = u64;

/// A question/answer panel supplied by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclosurePanel {
    pub id: PanelId,
    pub question: String,
    pub content: String,
}

impl DisclosurePanel {
    pub fn new(id: PanelId, question: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
            content: content.into(),
        }
    }

    /// Two-digit label shown next to the question ("01", "02", ...)
    pub fn number_label(&self) -> String {
        number_label(self.id)
    }
}

/// Zero-pad a panel number to two digits
pub fn number_label(n: u64) -> String {
    format!("{:02}", n)
}

/// Effective identity of a panel inside an exclusive disclosure group
///
/// A declared id and a positional fallback are distinct keys even when the
/// numbers match, so a child declaring id `1` never aliases the child that
/// happens to sit at index 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PanelKey {
    /// The child carried its own id
    Declared(PanelId),
    /// The child had no id; its position in the supplied order is used
    Positional(usize),
}

impl PanelKey {
    /// Number shown in the panel header
    pub fn display_number(&self) -> u64 {
        match self {
            PanelKey::Declared(id) => *id,
            PanelKey::Positional(index) => *index as u64,
        }
    }
}

impl fmt::Display for PanelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelKey::Declared(id) => write!(f, "#{}", id),
            PanelKey::Positional(index) => write!(f, "@{}", index),
        }
    }
}
