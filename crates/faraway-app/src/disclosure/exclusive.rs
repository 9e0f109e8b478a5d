//! Single-open disclosure group that drives children it does not own.
//!
//! The group never looks inside its children. Each child only has to say
//! whether it declares an id ([`DisclosureChild::declared_id`]) and accept
//! the [`DisclosureProps`] the group computes for it
//! ([`DisclosureChild::receive`]).

use std::collections::HashSet;

use faraway_core::prelude::*;
use faraway_core::{number_label, PanelId, PanelKey};
use serde::{Deserialize, Serialize};

use crate::message::Message;

/// Shared toggle callback handed to every child
///
/// Calling it turns a click on a child into a message for the update loop.
pub type ToggleCallback = fn(PanelKey) -> Message;

/// Values injected into a child on every broadcast
#[derive(Debug, Clone, Copy)]
pub struct DisclosureProps {
    pub key: PanelKey,
    pub is_open: bool,
    pub on_toggle: ToggleCallback,
}

impl DisclosureProps {
    /// The message this child emits when its header is activated
    pub fn toggle_message(&self) -> Message {
        (self.on_toggle)(self.key)
    }
}

/// Anything that can sit inside an [`ExclusiveDisclosure`] group
pub trait DisclosureChild {
    /// The id the child carries, if any
    fn declared_id(&self) -> Option<PanelId>;

    /// Accept the identity, open flag and toggle callback computed by the group
    fn receive(&mut self, props: DisclosureProps);
}

/// How children without a declared id are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityPolicy {
    /// Fall back to the child's position. Reordering children changes
    /// their identity.
    #[default]
    Positional,
    /// Every child must declare an id
    #[serde(rename = "declared", alias = "require_declared")]
    RequireDeclared,
}

/// At most one open panel among an externally supplied set of children
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusiveDisclosure {
    open: Option<PanelKey>,
    policy: IdentityPolicy,
}

impl ExclusiveDisclosure {
    pub fn new(policy: IdentityPolicy) -> Self {
        Self { open: None, policy }
    }

    pub fn open_key(&self) -> Option<PanelKey> {
        self.open
    }

    pub fn is_open(&self, key: PanelKey) -> bool {
        self.open == Some(key)
    }

    /// Close `key` if it is the open panel, otherwise make it the open panel
    ///
    /// The previously open panel (if any) closes in the same assignment.
    /// Returns the key that is open afterwards.
    pub fn toggle(&mut self, key: PanelKey) -> Option<PanelKey> {
        self.open = if self.open == Some(key) {
            None
        } else {
            Some(key)
        };
        debug!("Exclusive disclosure open={:?}", self.open);
        self.open
    }

    /// Compute the effective key of every child, in order
    ///
    /// The result depends only on the ordered input, so repeated calls with
    /// the same children give the same keys.
    pub fn resolve_keys<C: DisclosureChild>(&self, children: &[C]) -> Result<Vec<PanelKey>> {
        let mut declared = HashSet::new();
        children
            .iter()
            .enumerate()
            .map(|(index, child)| match child.declared_id() {
                Some(id) => {
                    if !declared.insert(id) {
                        return Err(Error::DuplicatePanelId { id });
                    }
                    Ok(PanelKey::Declared(id))
                }
                None => match self.policy {
                    IdentityPolicy::Positional => Ok(PanelKey::Positional(index)),
                    IdentityPolicy::RequireDeclared => Err(Error::MissingPanelId { index }),
                },
            })
            .collect()
    }

    /// Inject identity, open flag and `on_toggle` into every child
    ///
    /// Keys are resolved for the whole collection before any child is
    /// touched, so a rejected collection is left exactly as it was.
    pub fn broadcast<C: DisclosureChild>(
        &self,
        children: &mut [C],
        on_toggle: ToggleCallback,
    ) -> Result<()> {
        let keys = self.resolve_keys(children)?;
        for (child, key) in children.iter_mut().zip(keys) {
            child.receive(DisclosureProps {
                key,
                is_open: self.is_open(key),
                on_toggle,
            });
        }
        Ok(())
    }
}

/// Titled panel with free-form content, the stock child of an exclusive group
#[derive(Debug, Clone)]
pub struct AccordionItem {
    pub id: Option<PanelId>,
    pub title: String,
    pub content: String,
    props: Option<DisclosureProps>,
}

impl AccordionItem {
    pub fn new(id: Option<PanelId>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            props: None,
        }
    }

    /// Key assigned by the last broadcast
    pub fn key(&self) -> Option<PanelKey> {
        self.props.map(|props| props.key)
    }

    pub fn is_open(&self) -> bool {
        self.props.is_some_and(|props| props.is_open)
    }

    /// Two-digit header number, once a key has been assigned
    pub fn number_label(&self) -> Option<String> {
        self.key().map(|key| number_label(key.display_number()))
    }

    /// Message produced by activating the header; `None` before the first broadcast
    pub fn click(&self) -> Option<Message> {
        self.props.map(|props| props.toggle_message())
    }

    pub fn visible_content(&self) -> Option<&str> {
        self.is_open().then_some(self.content.as_str())
    }
}

impl DisclosureChild for AccordionItem {
    fn declared_id(&self) -> Option<PanelId> {
        self.id
    }

    fn receive(&mut self, props: DisclosureProps) {
        self.props = Some(props);
    }
}
