//! rain_bottles
//!
//! Annual precipitation drawn as a grid of ten water bottles, one per country,
//! with a six-step period selector (Average, 2020 to 2024). Pairs with the
//! `bottles` CLI and the `bottles-gui` desktop app.
//!
//! ### Features
//! - Load one CSV table per period, validated to ten positionally aligned rows
//! - Fixed or adaptive bottle scale
//! - Render to SVG/PNG, to an egui painter, or to a recording surface for tests
//! - Per-period summary statistics and CSV/JSON export of the bottle table
//!
//! ### Example
//! ```no_run
//! use rain_bottles::{BottleChart, ChartConfig, storage, viz};
//!
//! let config = ChartConfig::default();
//! let store = storage::load_all(&config)?;
//! let mut chart = BottleChart::new(store, config);
//! viz::render_to_file(&chart, "average.svg")?;
//! let _ = chart.select_period(5);
//! viz::render_to_file(&chart, "2024.svg")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod format;
pub mod layout;
pub mod models;
pub mod scale;
pub mod selector;
pub mod state;
pub mod stats;
pub mod storage;
pub mod style;
pub mod viz;

pub use chart::{BottleChart, ChartState};
pub use config::ChartConfig;
pub use dataset::DatasetStore;
pub use error::DatasetError;
pub use models::{BottleSlot, Period, PeriodDataset, PrecipitationRecord};
pub use scale::{ScalePolicy, ratio};
pub use selector::{PeriodSelector, Redraw};
pub use state::BottleTable;
