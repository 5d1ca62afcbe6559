use rain_bottles::models::{BottleSlot, SLOT_COUNT};
use rain_bottles::{BottleTable, PeriodDataset, PrecipitationRecord};

fn dataset(names: &[&str], base: f64) -> PeriodDataset {
    PeriodDataset::from_records(
        names
            .iter()
            .enumerate()
            .map(|(i, n)| PrecipitationRecord::new(*n, base + i as f64 * 10.0)),
    )
}

const NAMES: [&str; 10] = [
    "Indonesia",
    "Malaysia",
    "Brunei",
    "Philippines",
    "Singapore",
    "Thailand",
    "Vietnam",
    "Cambodia",
    "Laos",
    "Myanmar",
];

#[test]
fn new_table_is_blank() {
    let table = BottleTable::new();
    assert_eq!(table.iter().count(), SLOT_COUNT);
    for (i, slot) in table.iter().enumerate() {
        assert_eq!(slot, &BottleSlot::blank(i));
        assert_eq!(slot.fill_mm, 0.0);
        assert!(slot.country.is_empty());
    }
}

#[test]
fn repopulate_copies_records_by_position() {
    // Names deliberately out of alphabetical order: position decides, never the name.
    let mut shuffled = NAMES;
    shuffled.reverse();
    let ds = dataset(&shuffled, 1000.0);

    let mut table = BottleTable::new();
    table.repopulate(&ds);

    for i in 0..SLOT_COUNT {
        let slot = table.get(i).unwrap();
        let rec = ds.get(i).unwrap();
        assert_eq!(slot.id, i);
        assert_eq!(Some(slot.country.as_str()), rec.country.as_deref());
        assert_eq!(Some(slot.fill_mm), rec.precipitation_mm);
    }
}

#[test]
fn missing_record_keeps_previous_slot() {
    let mut table = BottleTable::new();
    table.repopulate(&dataset(&NAMES, 1000.0));
    let before = table.get(3).cloned().unwrap();

    let mut holes: Vec<Option<PrecipitationRecord>> = NAMES
        .iter()
        .enumerate()
        .map(|(i, n)| Some(PrecipitationRecord::new(*n, 2000.0 + i as f64)))
        .collect();
    holes[3] = None;
    table.repopulate(&PeriodDataset::from_slots(holes));

    assert_eq!(table.get(3), Some(&before));
    for i in (0..SLOT_COUNT).filter(|&i| i != 3) {
        assert_eq!(table.get(i).unwrap().fill_mm, 2000.0 + i as f64);
    }
}

#[test]
fn unparsable_value_keeps_fill_but_updates_name() {
    let mut table = BottleTable::new();
    table.repopulate(&dataset(&NAMES, 1000.0));

    let mut recs: Vec<Option<PrecipitationRecord>> =
        NAMES.iter().map(|n| Some(PrecipitationRecord::new(*n, 1.0))).collect();
    recs[5] = Some(PrecipitationRecord {
        country: Some("Thailand (revised)".into()),
        precipitation_mm: None,
    });
    table.repopulate(&PeriodDataset::from_slots(recs));

    let slot = table.get(5).unwrap();
    assert_eq!(slot.fill_mm, 1050.0);
    assert_eq!(slot.country, "Thailand (revised)");
}

#[test]
fn missing_country_keeps_label_but_updates_fill() {
    let mut table = BottleTable::new();
    table.repopulate(&dataset(&NAMES, 1000.0));

    let mut recs: Vec<Option<PrecipitationRecord>> =
        NAMES.iter().map(|n| Some(PrecipitationRecord::new(*n, 1.0))).collect();
    recs[3] = Some(PrecipitationRecord {
        country: None,
        precipitation_mm: Some(500.0),
    });
    table.repopulate(&PeriodDataset::from_slots(recs));

    let slot = table.get(3).unwrap();
    assert_eq!(slot.country, "Philippines");
    assert_eq!(slot.fill_mm, 500.0);
}

#[test]
fn short_dataset_only_touches_leading_slots() {
    let mut table = BottleTable::new();
    table.repopulate(&dataset(&NAMES, 1000.0));
    table.repopulate(&dataset(&NAMES[..2], 5.0));

    assert_eq!(table.get(0).unwrap().fill_mm, 5.0);
    assert_eq!(table.get(1).unwrap().fill_mm, 15.0);
    assert_eq!(table.get(2).unwrap().fill_mm, 1020.0);
}

#[test]
fn out_of_range_writes_are_ignored() {
    let mut table = BottleTable::new();
    let before = table.clone();
    table.set_slot(SLOT_COUNT, Some(10.0), Some("Nowhere"));
    table.set_slot(usize::MAX, Some(10.0), None);
    assert_eq!(table, before);
    assert!(table.get(SLOT_COUNT).is_none());
}

#[test]
fn non_finite_values_are_rejected() {
    let mut table = BottleTable::new();
    table.set_slot(0, Some(250.0), None);
    table.set_slot(0, Some(f64::NAN), None);
    table.set_slot(0, Some(f64::INFINITY), None);
    assert_eq!(table.get(0).unwrap().fill_mm, 250.0);
    assert_eq!(table.max_fill_mm(), 250.0);
}
