//! Summary statistics derived from a packing list

use std::fmt;

use faraway_core::Item;
use serde::Serialize;

/// Counts derived from the current items
///
/// Holds no state of its own; build a fresh one after every mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackingStats {
    pub total: usize,
    pub packed: usize,
    /// `None` for an empty list
    pub percentage: Option<u8>,
}

impl PackingStats {
    pub fn from_items(items: &[Item]) -> Self {
        let total = items.len();
        let packed = items.iter().filter(|item| item.packed).count();
        Self {
            total,
            packed,
            percentage: rounded_percentage(packed, total),
        }
    }

    pub fn summary(&self) -> StatsSummary {
        match self.percentage {
            None => StatsSummary::Empty,
            Some(100) => StatsSummary::AllPacked,
            Some(percentage) => StatsSummary::Progress {
                total: self.total,
                packed: self.packed,
                percentage,
            },
        }
    }
}

/// Round-half-up integer percentage of `part / whole`
fn rounded_percentage(part: usize, whole: usize) -> Option<u8> {
    if whole == 0 {
        return None;
    }
    let scaled = (part * 200 + whole) / (whole * 2);
    Some(scaled.min(100) as u8)
}

/// The three mutually exclusive ways the stats footer can read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatsSummary {
    Empty,
    AllPacked,
    Progress {
        total: usize,
        packed: usize,
        percentage: u8,
    },
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsSummary::Empty => {
                write!(f, "Start adding some items to your packing list! 🚀")
            }
            StatsSummary::AllPacked => write!(f, "You got everything! Ready to go ✈️"),
            StatsSummary::Progress {
                total,
                packed,
                percentage,
            } => write!(
                f,
                "💼 You have {} items on your list, and you already packed {} ({}%)",
                total, packed, percentage
            ),
        }
    }
}
