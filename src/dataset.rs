//! In-memory store of the six period tables.

use crate::error::DatasetError;
use crate::models::{PERIOD_COUNT, Period, PeriodDataset, SLOT_COUNT, normalize_name};
use log::warn;

/// Read-only after construction; every period holds exactly `SLOT_COUNT` rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetStore {
    periods: Vec<PeriodDataset>,
}

impl DatasetStore {
    /// Validate and take ownership of one dataset per period, in `Period::ALL` order.
    ///
    /// Fails when the number of tables or the row count of any table is off, so a
    /// misaligned file is caught at load rather than drawn into the wrong bottle.
    pub fn new(periods: Vec<PeriodDataset>) -> Result<Self, DatasetError> {
        if periods.len() != PERIOD_COUNT {
            return Err(DatasetError::PeriodCount {
                expected: PERIOD_COUNT,
                found: periods.len(),
            });
        }
        for (period, dataset) in Period::ALL.iter().zip(&periods) {
            if dataset.len() != SLOT_COUNT {
                return Err(DatasetError::RecordCount {
                    period: *period,
                    expected: SLOT_COUNT,
                    found: dataset.len(),
                });
            }
        }
        warn_on_name_drift(&periods);
        Ok(Self { periods })
    }

    /// Dataset at a selector position; `None` outside `0..PERIOD_COUNT`.
    pub fn get_period(&self, index: usize) -> Option<&PeriodDataset> {
        self.periods.get(index)
    }

    pub fn dataset(&self, period: Period) -> &PeriodDataset {
        &self.periods[period.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Period, &PeriodDataset)> {
        Period::ALL.iter().copied().zip(self.periods.iter())
    }
}

// Slots are matched by position only. A different country name at the same
// position usually means a reordered file, so say so.
fn warn_on_name_drift(periods: &[PeriodDataset]) {
    let Some(reference) = periods.first() else {
        return;
    };
    for (period, dataset) in Period::ALL.iter().zip(periods).skip(1) {
        for (slot, record) in dataset.iter() {
            let (Some(expected), Some(found)) = (
                reference.get(slot).and_then(|r| r.country.as_deref()),
                record.country.as_deref(),
            ) else {
                continue;
            };
            if normalize_name(expected) != normalize_name(found) {
                warn!(
                    "slot {slot}: {period} table names {found:?} where {} names {expected:?}",
                    Period::Average,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PrecipitationRecord;

    fn table(n: usize) -> PeriodDataset {
        PeriodDataset::from_records((0..n).map(|i| PrecipitationRecord::new(format!("C{i}"), 100.0)))
    }

    #[test]
    fn rejects_wrong_period_count() {
        let err = DatasetStore::new(vec![table(10); 5]).unwrap_err();
        assert!(matches!(err, DatasetError::PeriodCount { found: 5, .. }));
    }

    #[test]
    fn rejects_short_table() {
        let mut tables = vec![table(10); 6];
        tables[4] = table(9);
        let err = DatasetStore::new(tables).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::RecordCount {
                period: Period::Y2023,
                found: 9,
                ..
            }
        ));
    }

    #[test]
    fn out_of_range_period_is_none() {
        let store = DatasetStore::new(vec![table(10); 6]).unwrap();
        assert!(store.get_period(5).is_some());
        assert!(store.get_period(6).is_none());
    }
}
