use std::fs;
use std::path::Path;

use rain_bottles::models::{Period, SLOT_COUNT};
use rain_bottles::{BottleChart, BottleTable, ChartConfig, DatasetError, storage};

fn write_period(dir: &Path, period: Period, rows: usize, base: f64) {
    let mut body = String::from("country,precipitation\n");
    for i in 0..rows {
        body.push_str(&format!("Country {i},{}\n", base + i as f64));
    }
    fs::write(dir.join(format!("{}_sea_precip.csv", period.file_stem())), body).unwrap();
}

fn config_for(dir: &Path) -> ChartConfig {
    ChartConfig {
        data_dir: dir.to_path_buf(),
        ..ChartConfig::default()
    }
}

#[test]
fn load_all_reads_every_period() {
    let dir = tempfile::tempdir().unwrap();
    for (p, period) in Period::ALL.iter().enumerate() {
        write_period(dir.path(), *period, SLOT_COUNT, 1000.0 * (p + 1) as f64);
    }
    let store = storage::load_all(&config_for(dir.path())).unwrap();
    assert_eq!(store.iter().count(), 6);
    let y2023 = store.dataset(Period::Y2023);
    assert_eq!(y2023.len(), SLOT_COUNT);
    assert_eq!(y2023.get(0).unwrap().precipitation_mm, Some(5000.0));
    assert_eq!(y2023.get(9).unwrap().country.as_deref(), Some("Country 9"));
}

#[test]
fn short_table_fails_at_load() {
    let dir = tempfile::tempdir().unwrap();
    for period in Period::ALL {
        let rows = if period == Period::Y2021 { 9 } else { SLOT_COUNT };
        write_period(dir.path(), period, rows, 100.0);
    }
    let err = storage::load_all(&config_for(dir.path())).unwrap_err();
    let typed = err.downcast_ref::<DatasetError>().expect("dataset error");
    assert!(matches!(
        typed,
        DatasetError::RecordCount {
            period: Period::Y2021,
            expected: SLOT_COUNT,
            found: 9
        }
    ));
}

#[test]
fn short_row_keeps_previous_country_label() {
    let dir = tempfile::tempdir().unwrap();
    for period in Period::ALL {
        let mut body = String::from("precipitation,country\n");
        for i in 0..SLOT_COUNT {
            if period == Period::Y2020 && i == 3 {
                body.push_str("500\n");
            } else {
                body.push_str(&format!("{},C{i}\n", 100.0 + i as f64));
            }
        }
        fs::write(dir.path().join(format!("{}_sea_precip.csv", period.file_stem())), body).unwrap();
    }
    let config = config_for(dir.path());
    let store = storage::load_all(&config).unwrap();
    let mut chart = BottleChart::new(store, config);
    assert_eq!(chart.bottles()[3].country, "C3");

    assert!(chart.select_period(1).is_requested());
    let slot = &chart.bottles()[3];
    assert_eq!(slot.country, "C3");
    assert_eq!(slot.fill_mm, 500.0);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_period(dir.path(), Period::Average, SLOT_COUNT, 100.0);
    let err = storage::load_all(&config_for(dir.path())).unwrap_err();
    assert!(format!("{err:#}").contains("2020"));
}

#[test]
fn bundled_assets_load() {
    let config = config_for(&Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"));
    let store = storage::load_all(&config).unwrap();
    let avg = store.dataset(Period::Average);
    assert_eq!(avg.get(0).unwrap().country.as_deref(), Some("Indonesia"));
    let wettest = avg
        .iter()
        .max_by(|a, b| a.1.precipitation_mm.unwrap().total_cmp(&b.1.precipitation_mm.unwrap()))
        .unwrap();
    assert_eq!(wettest.1.country.as_deref(), Some("Indonesia"));
}

#[test]
fn save_csv_and_json() {
    let dir = tempfile::tempdir().unwrap();
    let mut table = BottleTable::new();
    table.set_slot(0, Some(1800.0), Some("Indonesia"));
    table.set_slot(1, Some(2000.0), Some("=HYPERLINK(\"http://evil\")"));
    table.set_slot(2, None, Some("Viet Nam"));

    let csv_path = dir.path().join("bottles.csv");
    storage::save_csv(table.as_slice(), 4000.0, &csv_path).unwrap();
    let csv_txt = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = csv_txt.lines().collect();
    assert_eq!(lines[0], "id,key,country,fill_mm,fill_ratio");
    assert_eq!(lines.len(), 1 + SLOT_COUNT);
    assert_eq!(lines[1], "0,indonesia,Indonesia,1800.0,0.45");
    assert!(lines[2].contains("'=HYPERLINK"), "{}", lines[2]);
    assert!(lines[3].starts_with("2,viet_nam,Viet Nam,0.0,"));

    let json_path = dir.path().join("bottles.json");
    storage::save_json(table.as_slice(), 4000.0, &json_path).unwrap();
    let v: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), SLOT_COUNT);
    assert_eq!(arr[0]["country"], "Indonesia");
    assert_eq!(arr[0]["fill_ratio"], 0.45);
    // JSON is not a spreadsheet format; names stay as they are.
    assert_eq!(arr[1]["country"], "=HYPERLINK(\"http://evil\")");
}
