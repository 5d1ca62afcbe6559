//! Period selector state machine.

use crate::dataset::DatasetStore;
use crate::models::Period;
use crate::state::BottleTable;
use log::{debug, info};

/// Signal returned by a transition; rendering is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Redraw {
    Requested,
    NotNeeded,
}

impl Redraw {
    pub fn is_requested(self) -> bool {
        matches!(self, Redraw::Requested)
    }
}

/// Current position of the six-step period control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PeriodSelector {
    selected: usize,
}

impl PeriodSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Period {
        Period::from_index(self.selected).unwrap_or(Period::Average)
    }

    /// Handle a slider input: look up the period table, repopulate `table`, then move the selection.
    ///
    /// An index outside the six positions, or one the store cannot serve,
    /// changes nothing and requests no redraw.
    pub fn on_user_input(
        &mut self,
        new_index: usize,
        store: &DatasetStore,
        table: &mut BottleTable,
    ) -> Redraw {
        if Period::from_index(new_index).is_none() {
            debug!("ignoring out-of-range period index {new_index}");
            return Redraw::NotNeeded;
        }
        let Some(dataset) = store.get_period(new_index) else {
            debug!("no table for period index {new_index}, keeping current bottles");
            return Redraw::NotNeeded;
        };
        table.repopulate(dataset);
        self.selected = new_index;
        info!("selected period {}", self.selected());
        Redraw::Requested
    }
}
