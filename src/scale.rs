//! Fill-ratio model: how full a bottle is drawn for a given precipitation.

use crate::state::BottleTable;
use serde::{Deserialize, Serialize};

/// Bottle capacity used by the default fixed scale.
pub const DEFAULT_CAPACITY_MM: f64 = 4000.0;

/// Normalize `fill_mm` against `scale_max`, clamped to `[0, 1]`.
///
/// A non-positive, infinite or NaN scale yields 0 for every input, as does a NaN fill.
pub fn ratio(fill_mm: f64, scale_max: f64) -> f64 {
    if !scale_max.is_finite() || scale_max <= 0.0 || fill_mm.is_nan() {
        return 0.0;
    }
    (fill_mm / scale_max).clamp(0.0, 1.0)
}

/// Which denominator the whole chart uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ScalePolicy {
    /// Every bottle holds `capacity_mm`.
    Fixed { capacity_mm: f64 },
    /// The wettest current bottle is full, never scaling below `floor_mm`.
    Adaptive { floor_mm: f64 },
}

impl Default for ScalePolicy {
    fn default() -> Self {
        ScalePolicy::Fixed {
            capacity_mm: DEFAULT_CAPACITY_MM,
        }
    }
}

impl ScalePolicy {
    /// Denominator for the current table contents.
    pub fn scale_max(&self, table: &BottleTable) -> f64 {
        match *self {
            ScalePolicy::Fixed { capacity_mm } => capacity_mm,
            ScalePolicy::Adaptive { floor_mm } => floor_mm.max(table.max_fill_mm()),
        }
    }

    /// Sentence shown under the header explaining the scale.
    pub fn describe(&self) -> String {
        match *self {
            ScalePolicy::Fixed { capacity_mm } => {
                format!("Each bottle holds {}mm of water.", capacity_mm.round() as i64)
            }
            ScalePolicy::Adaptive { .. } => {
                "The wettest country in the selected period fills its bottle.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_uses_floor_when_table_is_dry() {
        let table = BottleTable::new();
        let policy = ScalePolicy::Adaptive { floor_mm: 1000.0 };
        assert_eq!(policy.scale_max(&table), 1000.0);
    }

    #[test]
    fn adaptive_tracks_wettest_bottle() {
        let mut table = BottleTable::new();
        table.set_slot(4, Some(3200.0), None);
        let policy = ScalePolicy::Adaptive { floor_mm: 1000.0 };
        assert_eq!(policy.scale_max(&table), 3200.0);
        assert_eq!(ratio(3200.0, policy.scale_max(&table)), 1.0);
    }

    #[test]
    fn fixed_description_mentions_capacity() {
        assert_eq!(
            ScalePolicy::default().describe(),
            "Each bottle holds 4000mm of water."
        );
    }
}
