//! Open/closed state for panels that may be open together.

use std::collections::BTreeSet;

use faraway_core::prelude::*;
use faraway_core::{DisclosurePanel, PanelId};

/// Tracks which host-supplied panels are expanded
///
/// Only ids of supplied panels are ever stored: `toggle` refuses unknown ids
/// and `retain_supplied` drops ids whose panel went away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisclosureSet {
    open: BTreeSet<PanelId>,
}

impl DisclosureSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.open.contains(&id)
    }

    /// Open ids in ascending order
    pub fn open_ids(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.open.iter().copied()
    }

    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Flip one panel and return whether it is now open
    pub fn toggle(&mut self, panels: &[DisclosurePanel], id: PanelId) -> Result<bool> {
        if !panels.iter().any(|panel| panel.id == id) {
            return Err(Error::panel_not_found(id));
        }
        let now_open = if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        };
        debug!("Panel {} open={}", id, now_open);
        Ok(now_open)
    }

    pub fn collapse_all(&mut self) {
        self.open.clear();
    }

    pub fn expand_all(&mut self, panels: &[DisclosurePanel]) {
        self.open.extend(panels.iter().map(|panel| panel.id));
    }

    /// Forget open ids that are no longer among `panels`
    pub fn retain_supplied(&mut self, panels: &[DisclosurePanel]) {
        self.open.retain(|id| panels.iter().any(|panel| panel.id == *id));
    }

    /// Pair each supplied panel with its open flag, in supplied order
    pub fn views<'a>(
        &'a self,
        panels: &'a [DisclosurePanel],
    ) -> impl Iterator<Item = PanelView<'a>> + 'a {
        panels.iter().map(move |panel| PanelView {
            panel,
            is_open: self.is_open(panel.id),
        })
    }
}

/// A supplied panel together with its current open flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelView<'a> {
    pub panel: &'a DisclosurePanel,
    pub is_open: bool,
}

impl PanelView<'_> {
    /// Header icon: "−" when open, "+" when closed
    pub fn icon(&self) -> &'static str {
        if self.is_open {
            "−"
        } else {
            "+"
        }
    }

    /// Content to show, if the panel is open
    pub fn visible_content(&self) -> Option<&str> {
        self.is_open.then_some(self.panel.content.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panels() -> Vec<DisclosurePanel> {
        vec![
            DisclosurePanel::new(1, "Where are these chairs assembled?", "Lorem ipsum"),
            DisclosurePanel::new(2, "How long do I have to return my chair?", "Pariatur"),
            DisclosurePanel::new(3, "Do you ship to countries outside the EU?", "Excepturi"),
        ]
    }

    #[test]
    fn test_initially_all_closed() {
        let set = DisclosureSet::new();
        assert!(!set.is_open(1));
        assert_eq!(set.open_count(), 0);
    }

    #[test]
    fn test_many_panels_open_together() {
        let panels = panels();
        let mut set = DisclosureSet::new();

        assert!(set.toggle(&panels, 1).unwrap());
        assert!(set.toggle(&panels, 3).unwrap());

        assert!(set.is_open(1));
        assert!(!set.is_open(2));
        assert!(set.is_open(3));
        assert_eq!(set.open_ids().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let panels = panels();
        let mut set = DisclosureSet::new();
        set.toggle(&panels, 2).unwrap();
        let before = set.clone();

        set.toggle(&panels, 1).unwrap();
        set.toggle(&panels, 1).unwrap();

        assert_eq!(set, before);
    }

    #[test]
    fn test_toggle_unknown_panel_is_rejected() {
        let panels = panels();
        let mut set = DisclosureSet::new();

        let result = set.toggle(&panels, 9);

        assert!(matches!(result, Err(Error::PanelNotFound { id: 9 })));
        assert_eq!(set.open_count(), 0);
    }

    #[test]
    fn test_expand_and_collapse_all() {
        let panels = panels();
        let mut set = DisclosureSet::new();

        set.expand_all(&panels);
        assert_eq!(set.open_count(), 3);

        set.collapse_all();
        assert_eq!(set.open_count(), 0);
    }

    #[test]
    fn test_retain_supplied_prunes_vanished_panels() {
        let mut panels = panels();
        let mut set = DisclosureSet::new();
        set.expand_all(&panels);

        panels.remove(1);
        set.retain_supplied(&panels);

        assert_eq!(set.open_ids().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_views_follow_supplied_order() {
        let panels = panels();
        let mut set = DisclosureSet::new();
        set.toggle(&panels, 2).unwrap();

        let views: Vec<_> = set.views(&panels).collect();

        assert_eq!(views.len(), 3);
        assert_eq!(views[0].icon(), "+");
        assert_eq!(views[1].icon(), "−");
        assert_eq!(views[1].visible_content(), Some("Pariatur"));
        assert_eq!(views[2].visible_content(), None);
        assert_eq!(views[1].panel.number_label(), "02");
    }
}
