//! Dashboard counter slots.
//!
//! The dashboard renders one `.stat-value` per slot, left to right:
//! posts, reach, scheduled, media.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::net::types::StatsSnapshot;
use crate::util::format::format_thousands;

pub const STAT_SLOT_COUNT: usize = 4;

/// Display text of the stat slots present in the current view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsBoard {
    slots: Vec<String>,
}

impl StatsBoard {
    /// Board with `slot_count` slots, each showing `initial`.
    pub fn new(slot_count: usize, initial: &str) -> Self {
        Self { slots: vec![initial.to_owned(); slot_count] }
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Write a snapshot into the slots. Returns `false` and leaves every slot
    /// untouched if the view has fewer than four slots.
    pub fn apply(&mut self, snapshot: &StatsSnapshot) -> bool {
        if self.slots.len() < STAT_SLOT_COUNT {
            return false;
        }
        let values = slot_values(snapshot);
        for (slot, value) in self.slots.iter_mut().zip(values) {
            *slot = value;
        }
        true
    }
}

impl Default for StatsBoard {
    fn default() -> Self {
        Self::new(STAT_SLOT_COUNT, "0")
    }
}

/// Slot texts in display order; reach gets thousands separators.
pub fn slot_values(snapshot: &StatsSnapshot) -> [String; STAT_SLOT_COUNT] {
    [
        snapshot.total_posts.to_string(),
        format_thousands(snapshot.total_reach),
        snapshot.scheduled.to_string(),
        snapshot.total_media.to_string(),
    ]
}
