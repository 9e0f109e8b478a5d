//! Configuration types for Far Away
//!
//! Defines:
//! - `Settings` - Everything a host needs to build its initial state
//! - One section type per state container

use faraway_core::{DisclosurePanel, PanelId};
use serde::{Deserialize, Serialize};

use crate::disclosure::IdentityPolicy;

/// Application settings (.faraway/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub packing: PackingSettings,

    #[serde(default)]
    pub steps: StepsSettings,

    #[serde(default)]
    pub faq: FaqSettings,

    #[serde(default)]
    pub accordion: AccordionSettings,
}

// ─────────────────────────────────────────────────────────────────────────────
// Packing
// ─────────────────────────────────────────────────────────────────────────────

/// Packing list settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PackingSettings {
    /// Items present when the list is created
    #[serde(default = "default_initial_items")]
    pub initial_items: Vec<SeedItem>,
}

impl Default for PackingSettings {
    fn default() -> Self {
        Self {
            initial_items: default_initial_items(),
        }
    }
}

/// An item to pre-populate the packing list with
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SeedItem {
    pub description: String,

    #[serde(default = "default_quantity")]
    pub quantity: u32,

    #[serde(default)]
    pub packed: bool,
}

impl SeedItem {
    pub fn new(description: impl Into<String>, quantity: u32) -> Self {
        Self {
            description: description.into(),
            quantity,
            packed: false,
        }
    }
}

fn default_quantity() -> u32 {
    1
}

fn default_initial_items() -> Vec<SeedItem> {
    vec![SeedItem::new("Passports", 2), SeedItem::new("Socks", 12)]
}

// ─────────────────────────────────────────────────────────────────────────────
// Steps
// ─────────────────────────────────────────────────────────────────────────────

/// Step wizard settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StepsSettings {
    /// One message per step; must not be empty
    #[serde(default = "default_step_messages")]
    pub messages: Vec<String>,
}

impl Default for StepsSettings {
    fn default() -> Self {
        Self {
            messages: default_step_messages(),
        }
    }
}

fn default_step_messages() -> Vec<String> {
    vec![
        "Learn React ⚛️".to_string(),
        "Apply to jobs 💼".to_string(),
        "Invest your new income 🤑".to_string(),
    ]
}

// ─────────────────────────────────────────────────────────────────────────────
// Disclosure
// ─────────────────────────────────────────────────────────────────────────────

/// Panels for the multi-open FAQ list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FaqSettings {
    #[serde(default = "default_faq_panels")]
    pub panels: Vec<DisclosurePanel>,
}

impl Default for FaqSettings {
    fn default() -> Self {
        Self {
            panels: default_faq_panels(),
        }
    }
}

fn default_faq_panels() -> Vec<DisclosurePanel> {
    vec![
        DisclosurePanel::new(
            1,
            "Where are these chairs assembled?",
            "Every chair is assembled by hand in our workshop.",
        ),
        DisclosurePanel::new(
            2,
            "How long do I have to return my chair?",
            "Returns are accepted within 30 days of delivery.",
        ),
        DisclosurePanel::new(
            3,
            "Do you ship to countries outside the EU?",
            "Yes, shipping is available worldwide.",
        ),
    ]
}

/// Children of the single-open accordion
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccordionSettings {
    /// Whether children may fall back to their position as identity
    #[serde(default)]
    pub identity: IdentityPolicy,

    #[serde(default = "default_accordion_items")]
    pub items: Vec<AccordionItemConfig>,
}

impl Default for AccordionSettings {
    fn default() -> Self {
        Self {
            identity: IdentityPolicy::default(),
            items: default_accordion_items(),
        }
    }
}

/// One accordion child as written in the config file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AccordionItemConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<PanelId>,

    pub title: String,

    #[serde(default)]
    pub content: String,
}

fn default_accordion_items() -> Vec<AccordionItemConfig> {
    vec![
        AccordionItemConfig {
            id: Some(1),
            title: "Test 1".to_string(),
            content: "Allows React developers to build accessible UIs.".to_string(),
        },
        AccordionItemConfig {
            id: Some(2),
            title: "Test 2".to_string(),
            content: "Children are given their open state by the parent.".to_string(),
        },
        AccordionItemConfig {
            id: Some(3),
            title: "Test 3".to_string(),
            content: "Only one section is open at a time.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_sample_data() {
        let settings = Settings::default();

        assert_eq!(settings.packing.initial_items.len(), 2);
        assert_eq!(settings.packing.initial_items[1].quantity, 12);
        assert_eq!(settings.steps.messages.len(), 3);
        assert_eq!(settings.faq.panels.len(), 3);
        assert_eq!(settings.accordion.identity, IdentityPolicy::Positional);
    }

    #[test]
    fn test_seed_item_defaults() {
        let item: SeedItem = toml::from_str(r#"description = "Hat""#).unwrap();
        assert_eq!(item.quantity, 1);
        assert!(!item.packed);
    }

    #[test]
    fn test_empty_section_uses_defaults() {
        let settings: Settings = toml::from_str("[packing]\n[steps]\n").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_accordion_item_without_id() {
        let settings: Settings = toml::from_str(
            r#"
[accordion]
identity = "declared"

[[accordion.items]]
title = "No id here"
"#,
        )
        .unwrap();

        assert_eq!(settings.accordion.identity, IdentityPolicy::RequireDeclared);
        assert_eq!(settings.accordion.items.len(), 1);
        assert_eq!(settings.accordion.items[0].id, None);
        assert_eq!(settings.accordion.items[0].content, "");
    }

    #[test]
    fn test_identity_policy_names() {
        let settings: Settings =
            toml::from_str("[accordion]\nidentity = \"require_declared\"\n").unwrap();
        assert_eq!(settings.accordion.identity, IdentityPolicy::RequireDeclared);

        let written = toml::to_string(&settings.accordion).unwrap();
        assert!(written.contains("identity = \"declared\""));
    }
}
