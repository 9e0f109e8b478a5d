//! Packing list store and the statistics derived from it

mod list;
mod stats;

pub use list::PackingList;
pub use stats::{PackingStats, StatsSummary};
