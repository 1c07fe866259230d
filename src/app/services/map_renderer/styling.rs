//! Marker styling: per-category label allocation
//!
//! Each status category carries its own counter. A marker takes the letter at
//! the counter's current value (wrapping A-Z) and the counter then advances,
//! so the first enrolled marker and the first placed marker are both labelled
//! `A` while successive markers in one category walk the alphabet.

use crate::app::models::{MarkerStyle, Status};
use crate::constants::label_letter;

/// Allocates marker labels, one counter per status category
///
/// Allocation order is the record order handed to the renderer. The allocator
/// is cheap to construct and each render pass uses a fresh one, keeping label
/// sequences identical between passes over the same records.
#[derive(Debug, Clone, Default)]
pub struct LabelAllocator {
    enrolled: usize,
    skilled: usize,
    placed: usize,
    unknown: usize,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style for the next marker in the given category
    ///
    /// Reads the category counter for the label, then advances it.
    pub fn style_for(&mut self, status: Status) -> MarkerStyle {
        let counter = self.counter_mut(status);
        let count = *counter;
        *counter += 1;

        MarkerStyle {
            color: status.color(),
            label: label_letter(count),
        }
    }

    /// How many markers have been styled in a category so far
    pub fn allocated(&self, status: Status) -> usize {
        match status {
            Status::Enrolled => self.enrolled,
            Status::Skilled => self.skilled,
            Status::Placed => self.placed,
            Status::Unknown => self.unknown,
        }
    }

    fn counter_mut(&mut self, status: Status) -> &mut usize {
        match status {
            Status::Enrolled => &mut self.enrolled,
            Status::Skilled => &mut self.skilled,
            Status::Placed => &mut self.placed,
            Status::Unknown => &mut self.unknown,
        }
    }
}
