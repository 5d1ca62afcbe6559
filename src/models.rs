use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of bottle slots in the grid.
pub const SLOT_COUNT: usize = 10;

/// Number of selectable periods.
pub const PERIOD_COUNT: usize = 6;

/// One selectable time bucket. Serialized by its label, the text the slider shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    Average,
    #[serde(rename = "2020")]
    Y2020,
    #[serde(rename = "2021")]
    Y2021,
    #[serde(rename = "2022")]
    Y2022,
    #[serde(rename = "2023")]
    Y2023,
    #[serde(rename = "2024")]
    Y2024,
}

impl Period {
    /// All periods in selector order.
    pub const ALL: [Period; PERIOD_COUNT] = [
        Period::Average,
        Period::Y2020,
        Period::Y2021,
        Period::Y2022,
        Period::Y2023,
        Period::Y2024,
    ];

    /// Period at a selector position, `None` outside `0..PERIOD_COUNT`.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Label shown under the slider.
    pub fn label(self) -> &'static str {
        match self {
            Period::Average => "Average",
            Period::Y2020 => "2020",
            Period::Y2021 => "2021",
            Period::Y2022 => "2022",
            Period::Y2023 => "2023",
            Period::Y2024 => "2024",
        }
    }

    /// Stem used by the default data file names (`avg`, `2020`, ...).
    pub fn file_stem(self) -> &'static str {
        match self {
            Period::Average => "avg",
            other => other.label(),
        }
    }

    /// Parse a user-facing token: a label (`average`, `avg`, `2022`) or a selector index (`0`..`5`).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(p) = Self::ALL
            .iter()
            .find(|p| p.label().eq_ignore_ascii_case(s) || p.file_stem().eq_ignore_ascii_case(s))
        {
            return Some(*p);
        }
        s.parse::<usize>().ok().and_then(Self::from_index)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of a period table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrecipitationRecord {
    /// `None` when the row had no (or an empty) country cell.
    pub country: Option<String>,
    /// `None` when the source value was missing or not numeric.
    pub precipitation_mm: Option<f64>,
}

impl PrecipitationRecord {
    pub fn new(country: impl Into<String>, precipitation_mm: f64) -> Self {
        Self {
            country: Some(country.into()),
            precipitation_mm: Some(precipitation_mm),
        }
    }
}

/// Ordered records for one period. Position `i` always describes bottle slot `i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodDataset {
    records: Vec<Option<PrecipitationRecord>>,
}

impl PeriodDataset {
    /// Dataset where every position holds a record.
    pub fn from_records(records: impl IntoIterator<Item = PrecipitationRecord>) -> Self {
        Self {
            records: records.into_iter().map(Some).collect(),
        }
    }

    /// Dataset with explicit holes; a `None` position leaves its bottle untouched on repopulate.
    pub fn from_slots(records: Vec<Option<PrecipitationRecord>>) -> Self {
        Self { records }
    }

    pub fn get(&self, index: usize) -> Option<&PrecipitationRecord> {
        self.records.get(index).and_then(Option::as_ref)
    }

    /// Number of positions, holes included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Present records with their slot index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PrecipitationRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().map(|r| (i, r)))
    }
}

/// One of the ten bottles on screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleSlot {
    pub id: usize,
    pub country: String,
    pub fill_mm: f64,
}

impl BottleSlot {
    pub fn blank(id: usize) -> Self {
        Self {
            id,
            country: String::new(),
            fill_mm: 0.0,
        }
    }
}

/// Normalize a country name to a key: lowercase ASCII alphanumerics joined by `_`.
///
/// `"Lao PDR"` -> `"lao_pdr"`, `"  Côte d'Ivoire "` -> `"c_te_d_ivoire"`.
pub fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_sep = false;
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch);
        } else {
            pending_sep = true;
        }
    }
    out
}
