use std::fs;
use std::path::Path;

use rain_bottles::{BottleChart, ChartConfig, storage, viz};

fn bundled_chart() -> BottleChart {
    let config = ChartConfig {
        data_dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("assets"),
        ..ChartConfig::default()
    };
    let store = storage::load_all(&config).unwrap();
    BottleChart::new(store, config)
}

#[test]
fn render_svg_file() {
    let chart = bundled_chart();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("average.svg");
    viz::render_to_file(&chart, &out).unwrap();

    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Indonesia"));
    assert!(svg.contains("Each bottle holds 4000mm of water."));
}

#[test]
fn svg_string_follows_selected_period() {
    let mut chart = bundled_chart();
    let average = viz::render_to_svg_string(&chart).unwrap();
    let _ = chart.select_period(3);
    let y2022 = viz::render_to_svg_string(&chart).unwrap();

    assert!(average.contains("<svg"));
    assert_ne!(average, y2022);
    // Same state, same document.
    assert_eq!(y2022, viz::render_to_svg_string(&chart).unwrap());
}

#[test]
fn svg_for_every_period() {
    let mut chart = bundled_chart();
    let dir = tempfile::tempdir().unwrap();
    for index in 0..6 {
        let _ = chart.select_period(index);
        let out = dir
            .path()
            .join(format!("bottles_{}.svg", chart.selected_period().file_stem()));
        viz::render_to_file(&chart, &out).unwrap();
        assert!(fs::metadata(&out).unwrap().len() > 0);
    }
    assert!(dir.path().join("bottles_avg.svg").exists());
    assert!(dir.path().join("bottles_2024.svg").exists());
}
