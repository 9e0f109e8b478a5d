//! Expand/collapse state for question/answer panels
//!
//! - `inclusive`: any number of panels open at once
//! - `exclusive`: at most one open panel, broadcast into opaque children

mod exclusive;
mod inclusive;

pub use exclusive::{
    AccordionItem, DisclosureChild, DisclosureProps, ExclusiveDisclosure, IdentityPolicy,
    ToggleCallback,
};
pub use inclusive::{DisclosureSet, PanelView};
