use rain_bottles::models::{Period, PrecipitationRecord};
use rain_bottles::stats::summarize;
use rain_bottles::PeriodDataset;

#[test]
fn summary_handles_missing_and_even_median() {
    let mut slots: Vec<Option<PrecipitationRecord>> = [
        ("Indonesia", Some(3000.0)),
        ("Malaysia", Some(1000.0)),
        ("Brunei", None),
        ("Laos", Some(2000.0)),
        ("Myanmar", Some(4000.0)),
    ]
    .into_iter()
    .map(|(c, v)| {
        Some(PrecipitationRecord {
            country: Some(c.into()),
            precipitation_mm: v,
        })
    })
    .collect();
    slots.push(None);

    let s = summarize(Period::Y2022, &PeriodDataset::from_slots(slots));
    assert_eq!(s.period, Period::Y2022);
    assert_eq!(s.count, 4);
    assert_eq!(s.missing, 2);
    assert_eq!(s.min, Some(1000.0));
    assert_eq!(s.max, Some(4000.0));
    assert_eq!(s.mean, Some(2500.0));
    assert_eq!(s.median, Some(2500.0));
    assert_eq!(s.wettest.as_deref(), Some("Myanmar"));
    assert_eq!(s.driest.as_deref(), Some("Malaysia"));
}

#[test]
fn summary_of_empty_table() {
    let s = summarize(Period::Average, &PeriodDataset::default());
    assert_eq!(s.count, 0);
    assert_eq!(s.missing, 0);
    assert_eq!(s.mean, None);
    assert_eq!(s.median, None);
    assert_eq!(s.wettest, None);
}

#[test]
fn odd_median_is_middle_value() {
    let ds = PeriodDataset::from_records([
        PrecipitationRecord::new("A", 5.0),
        PrecipitationRecord::new("B", 1.0),
        PrecipitationRecord::new("C", 3.0),
    ]);
    let s = summarize(Period::Y2020, &ds);
    assert_eq!(s.median, Some(3.0));
}
