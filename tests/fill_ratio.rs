use rain_bottles::models::PERIOD_COUNT;
use rain_bottles::{
    BottleChart, ChartConfig, DatasetStore, PeriodDataset, PrecipitationRecord, ScalePolicy, ratio,
};

#[test]
fn ratio_is_clamped_to_unit_interval() {
    let scale_max = 4000.0;
    for fill in [-1e9, -1.0, 0.0, 1.0, 1999.5, 4000.0, 4000.1, 1e12, f64::INFINITY] {
        let r = ratio(fill, scale_max);
        assert!((0.0..=1.0).contains(&r), "ratio({fill}, {scale_max}) = {r}");
    }
    assert_eq!(ratio(0.0, 123.0), 0.0);
    assert_eq!(ratio(scale_max, scale_max), 1.0);
    assert_eq!(ratio(2.0 * scale_max, scale_max), 1.0);
    assert_eq!(ratio(-50.0, scale_max), 0.0);
}

#[test]
fn degenerate_scale_gives_empty_bottles() {
    for fill in [0.0, 1.0, 1800.0, -3.0, f64::INFINITY] {
        assert_eq!(ratio(fill, 0.0), 0.0);
        assert_eq!(ratio(fill, -5.0), 0.0);
    }
    assert_eq!(ratio(100.0, f64::NAN), 0.0);
    assert_eq!(ratio(100.0, f64::INFINITY), 0.0);
    assert_eq!(ratio(f64::INFINITY, f64::INFINITY), 0.0);
    assert_eq!(ratio(f64::NEG_INFINITY, f64::NEG_INFINITY), 0.0);
    assert_eq!(ratio(f64::NAN, 4000.0), 0.0);
}

#[test]
fn indonesia_average_fills_bottle_to_045() {
    let mut records = vec![PrecipitationRecord::new("Indonesia", 1800.0)];
    records.extend((1..10).map(|i| PrecipitationRecord::new(format!("Country {i}"), 100.0 * i as f64)));
    let average = PeriodDataset::from_records(records);
    let store = DatasetStore::new(vec![average; PERIOD_COUNT]).unwrap();

    let config = ChartConfig {
        scale: ScalePolicy::Fixed { capacity_mm: 4000.0 },
        ..ChartConfig::default()
    };
    let chart = BottleChart::new(store, config);

    assert_eq!(chart.bottles()[0].country, "Indonesia");
    assert_eq!(chart.scale_max(), 4000.0);
    let r = chart.fill_ratio(0).unwrap();
    assert!((r - 0.45).abs() < 1e-12, "got {r}");
    assert_eq!(chart.fill_ratio(10), None);
}

#[test]
fn adaptive_scale_fills_wettest_bottle() {
    let records = (0..10).map(|i| PrecipitationRecord::new(format!("C{i}"), 500.0 + 250.0 * i as f64));
    let store = DatasetStore::new(vec![PeriodDataset::from_records(records); PERIOD_COUNT]).unwrap();
    let config = ChartConfig {
        scale: ScalePolicy::Adaptive { floor_mm: 1000.0 },
        ..ChartConfig::default()
    };
    let chart = BottleChart::new(store, config);

    // Wettest is slot 9 with 2750 mm.
    assert_eq!(chart.scale_max(), 2750.0);
    assert_eq!(chart.fill_ratio(9), Some(1.0));
    let r0 = chart.fill_ratio(0).unwrap();
    assert!((r0 - 500.0 / 2750.0).abs() < 1e-12);
}
