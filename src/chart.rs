//! The chart controller: owns the data, the interactive state and the configuration.

use crate::config::ChartConfig;
use crate::dataset::DatasetStore;
use crate::layout::{Cell, cell_geometry};
use crate::models::{BottleSlot, Period};
use crate::scale::ratio;
use crate::selector::{PeriodSelector, Redraw};
use crate::state::BottleTable;
use log::debug;

/// Everything that changes while the chart is on screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartState {
    pub table: BottleTable,
    pub selector: PeriodSelector,
}

/// One bottle chart instance.
///
/// ```no_run
/// use rain_bottles::{BottleChart, ChartConfig, storage};
///
/// let config = ChartConfig::default();
/// let store = storage::load_all(&config)?;
/// let mut chart = BottleChart::new(store, config);
/// if chart.select_period(3).is_requested() {
///     rain_bottles::viz::render_to_file(&chart, "2022.svg")?;
/// }
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct BottleChart {
    store: DatasetStore,
    state: ChartState,
    config: ChartConfig,
    needs_redraw: bool,
}

impl BottleChart {
    /// Set up the chart on the Average table. The first draw is already pending.
    pub fn new(store: DatasetStore, config: ChartConfig) -> Self {
        let mut state = ChartState::default();
        state.table.repopulate(store.dataset(Period::Average));
        Self {
            store,
            state,
            config,
            needs_redraw: true,
        }
    }

    /// Slider input. Returns whether the chart changed and must be drawn again.
    pub fn select_period(&mut self, index: usize) -> Redraw {
        let ChartState { table, selector } = &mut self.state;
        let redraw = selector.on_user_input(index, &self.store, table);
        if redraw.is_requested() {
            self.needs_redraw = true;
        }
        redraw
    }

    /// The drawing surface was recreated; its logical size is unchanged.
    pub fn on_resize(&mut self) -> Redraw {
        debug!("surface resized, redrawing");
        self.needs_redraw = true;
        Redraw::Requested
    }

    /// Consume the pending redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn selected_period(&self) -> Period {
        self.state.selector.selected()
    }

    pub fn bottles(&self) -> &[BottleSlot] {
        self.state.table.as_slice()
    }

    /// Current denominator under the configured scale policy.
    pub fn scale_max(&self) -> f64 {
        self.config.scale.scale_max(&self.state.table)
    }

    /// Fill ratio of slot `index`, `None` for an unknown slot.
    pub fn fill_ratio(&self, index: usize) -> Option<f64> {
        let scale_max = self.scale_max();
        self.state
            .table
            .get(index)
            .map(|slot| ratio(slot.fill_mm, scale_max))
    }

    pub fn cells(&self) -> Vec<Cell> {
        cell_geometry(
            f64::from(self.config.width),
            f64::from(self.config.height),
            &self.config.grid,
        )
    }
}
