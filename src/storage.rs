use crate::config::ChartConfig;
use crate::dataset::DatasetStore;
use crate::error::DatasetError;
use crate::models::{BottleSlot, Period, PeriodDataset, PrecipitationRecord, normalize_name};
use crate::scale::ratio;
use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use log::{info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

const COUNTRY_COLUMN: &str = "country";
const PRECIPITATION_COLUMN: &str = "precipitation";

/// Read one period table. Header row required, with `country` and `precipitation` columns
/// in any position; extra columns are ignored.
///
/// Non-numeric or empty precipitation cells load as `None` rather than failing, and so
/// does a country cell that is empty or cut off by a short row.
pub fn load_period_csv<P: AsRef<Path>>(path: P) -> Result<PeriodDataset> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    read_period(file, path)
}

fn read_period<R: Read>(input: R, path: &Path) -> Result<PeriodDataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = rdr.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| DatasetError::MissingColumn {
                path: path.to_path_buf(),
                column: name,
            })
    };
    let country_idx = column(COUNTRY_COLUMN)?;
    let precip_idx = column(PRECIPITATION_COLUMN)?;

    let mut records = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("{}: row {}", path.display(), row + 1))?;
        let country = rec
            .get(country_idx)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        if country.is_none() {
            warn!("{}: row {} has no country", path.display(), row + 1);
        }
        let raw = rec.get(precip_idx).unwrap_or_default();
        let precipitation_mm = raw.parse::<f64>().ok().filter(|v| v.is_finite());
        if precipitation_mm.is_none() {
            warn!(
                "{}: row {}: precipitation {raw:?} is not a number",
                path.display(),
                row + 1
            );
        }
        records.push(PrecipitationRecord {
            country,
            precipitation_mm,
        });
    }
    Ok(PeriodDataset::from_records(records))
}

/// Load every period table named by `config` and validate the set.
pub fn load_all(config: &ChartConfig) -> Result<DatasetStore> {
    let mut periods = Vec::with_capacity(Period::ALL.len());
    for period in Period::ALL {
        let path = config.data_path(period);
        let dataset =
            load_period_csv(&path).with_context(|| format!("loading {period} table"))?;
        info!("loaded {} rows for {period} from {}", dataset.len(), path.display());
        periods.push(dataset);
    }
    Ok(DatasetStore::new(periods)?)
}

/// One exported row.
#[derive(Debug, Serialize)]
struct BottleRow<'a> {
    id: usize,
    key: String,
    country: &'a str,
    fill_mm: f64,
    fill_ratio: f64,
}

fn rows(slots: &[BottleSlot], scale_max: f64) -> impl Iterator<Item = BottleRow<'_>> {
    slots.iter().map(move |s| BottleRow {
        id: s.id,
        key: normalize_name(&s.country),
        country: &s.country,
        fill_mm: s.fill_mm,
        fill_ratio: ratio(s.fill_mm, scale_max),
    })
}

// Spreadsheet apps evaluate cells starting with these as formulas.
fn defuse_formula(cell: &str) -> String {
    if cell.starts_with(['=', '+', '-', '@']) {
        format!("'{cell}")
    } else {
        cell.to_string()
    }
}

/// Save the bottle table as CSV with header.
pub fn save_csv<P: AsRef<Path>>(slots: &[BottleSlot], scale_max: f64, path: P) -> Result<()> {
    let mut wtr = WriterBuilder::new().from_path(path)?;
    wtr.write_record(["id", "key", "country", "fill_mm", "fill_ratio"])?;
    for row in rows(slots, scale_max) {
        wtr.serialize((
            row.id,
            row.key,
            defuse_formula(row.country),
            row.fill_mm,
            row.fill_ratio,
        ))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Save the bottle table as a pretty JSON array.
pub fn save_json<P: AsRef<Path>>(slots: &[BottleSlot], scale_max: f64, path: P) -> Result<()> {
    let mut f = File::create(path)?;
    let rows: Vec<BottleRow> = rows(slots, scale_max).collect();
    let s = serde_json::to_string_pretty(&rows)?;
    f.write_all(s.as_bytes())?;
    Ok(())
}
