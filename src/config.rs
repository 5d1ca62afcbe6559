//! Chart configuration. Every field has a default; a JSON file may override any subset.
//!
//! ```json
//! { "scale": { "policy": "adaptive", "floor_mm": 1500 }, "show_values": false }
//! ```

use crate::layout::GridSpec;
use crate::models::{PERIOD_COUNT, Period};
use crate::scale::ScalePolicy;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Logical canvas width.
    pub width: u32,
    /// Logical canvas height.
    pub height: u32,
    pub grid: GridSpec,
    pub scale: ScalePolicy,
    pub title: String,
    pub subtitle: String,
    /// Replaces the sentence derived from `scale` when set.
    pub capacity_note: Option<String>,
    /// Draw country name and millimetres under each bottle.
    pub show_values: bool,
    pub data_dir: PathBuf,
    /// One CSV per period, in `Period::ALL` order, relative to `data_dir`.
    pub data_files: [String; PERIOD_COUNT],
    /// TrueType font for bitmap (PNG) output.
    pub font_path: Option<PathBuf>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 900,
            grid: GridSpec::default(),
            scale: ScalePolicy::default(),
            title: "Where does it rain the most in South East Asia?".to_string(),
            subtitle: "On average, Indonesia receives the highest mm of rainfall each year. \
                       Use the slider to explore how these numbers have changed over the years."
                .to_string(),
            capacity_note: None,
            show_values: true,
            data_dir: PathBuf::from("assets"),
            data_files: Period::ALL.map(|p| format!("{}_sea_precip.csv", p.file_stem())),
            font_path: None,
        }
    }
}

impl ChartConfig {
    /// Read a JSON config; missing fields keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let cfg = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(cfg)
    }

    /// Full path of the table for `period`.
    pub fn data_path(&self, period: Period) -> PathBuf {
        self.data_dir.join(&self.data_files[period.index()])
    }

    /// Line under the subtitle explaining what a full bottle means.
    pub fn capacity_text(&self) -> String {
        self.capacity_note
            .clone()
            .unwrap_or_else(|| self.scale.describe())
    }
}
