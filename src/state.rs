//! The ten bottles currently on screen.

use crate::models::{BottleSlot, PeriodDataset, SLOT_COUNT};
use log::debug;

/// Fixed-size bottle table. Slots are never added or removed, only overwritten.
#[derive(Debug, Clone, PartialEq)]
pub struct BottleTable {
    slots: [BottleSlot; SLOT_COUNT],
}

impl Default for BottleTable {
    fn default() -> Self {
        Self::new()
    }
}

impl BottleTable {
    /// All slots blank with zero fill.
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(BottleSlot::blank),
        }
    }

    /// Overwrite every slot that has a matching record in `dataset`.
    ///
    /// A missing record leaves its slot as it was. Within a record, a missing
    /// country or a missing/non-finite value keeps that field and updates the other.
    pub fn repopulate(&mut self, dataset: &PeriodDataset) {
        for i in 0..SLOT_COUNT {
            if let Some(record) = dataset.get(i) {
                self.set_slot(i, record.precipitation_mm, record.country.as_deref());
            }
        }
    }

    /// Guarded per-field write. Out-of-range indices are ignored.
    pub fn set_slot(&mut self, index: usize, fill_mm: Option<f64>, country: Option<&str>) {
        let Some(slot) = self.slots.get_mut(index) else {
            debug!("ignoring write to bottle slot {index}");
            return;
        };
        if let Some(mm) = fill_mm.filter(|v| v.is_finite()) {
            slot.fill_mm = mm;
        }
        if let Some(country) = country {
            slot.country = country.to_string();
        }
    }

    pub fn get(&self, index: usize) -> Option<&BottleSlot> {
        self.slots.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BottleSlot> {
        self.slots.iter()
    }

    pub fn as_slice(&self) -> &[BottleSlot] {
        &self.slots
    }

    /// Largest current fill, or 0 when every bottle is empty or negative.
    pub fn max_fill_mm(&self) -> f64 {
        self.slots.iter().map(|s| s.fill_mm).fold(0.0, f64::max)
    }
}
