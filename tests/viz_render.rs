use census_scatter::models::CensusRecord;
use census_scatter::style::ChartStyle;
use census_scatter::viz;
use std::fs;
use std::path::PathBuf;

fn sample_records() -> Vec<CensusRecord> {
    [
        ("Ohio", "OH", 39.0, 21.0),
        ("Texas", "TX", 34.0, 14.0),
        ("Maine", "ME", 44.0, 19.0),
        ("Utah", "UT", 31.0, 9.0),
    ]
    .iter()
    .map(|(state, abbr, age, smokes)| CensusRecord {
        state: (*state).into(),
        abbr: (*abbr).into(),
        age: *age,
        smokes: *smokes,
    })
    .collect()
}

fn write_and_check<F: Fn(&PathBuf)>(maker: F, name: &str) {
    let tmp = std::env::temp_dir();
    let path: PathBuf = tmp.join(format!("census_scatter_{}", name));
    maker(&path);
    let meta = fs::metadata(&path).expect("file created");
    assert!(meta.len() > 0, "chart file has content");
    fs::remove_file(&path).ok();
}

#[test]
fn renders_svg() {
    let records = sample_records();
    write_and_check(
        |p| viz::render_scatter(&records, p, 960, 600).unwrap(),
        "basic.svg",
    );
}

#[test]
fn renders_png() {
    let records = sample_records();
    write_and_check(
        |p| viz::render_scatter(&records, p, 640, 480).unwrap(),
        "basic.png",
    );
}

#[test]
fn svg_contains_one_marker_and_label_per_record() {
    let records = sample_records();
    let tmp = std::env::temp_dir().join("census_scatter_markers.svg");
    viz::render_scatter(&records, &tmp, 960, 600).unwrap();
    let svg = fs::read_to_string(&tmp).unwrap();
    let circles = svg.matches("<circle").count();
    assert!(
        circles >= records.len(),
        "expected at least {} circles, found {}",
        records.len(),
        circles
    );
    for r in &records {
        assert!(svg.contains(&r.abbr), "label {} missing from SVG", r.abbr);
    }
    // Axis captions end up in the output too.
    assert!(svg.contains("Age (median)"));
    assert!(svg.contains("Smokes (%)"));
    fs::remove_file(&tmp).ok();
}

#[test]
fn custom_style_is_honored() {
    let records = sample_records();
    let style = ChartStyle {
        x_caption: "Median age".to_string(),
        ..ChartStyle::default()
    };
    let tmp = std::env::temp_dir().join("census_scatter_styled.svg");
    viz::render_scatter_styled(&records, &tmp, 800, 500, &style).unwrap();
    let svg = fs::read_to_string(&tmp).unwrap();
    assert!(svg.contains("Median age"));
    fs::remove_file(&tmp).ok();
}

#[test]
fn empty_records_is_error() {
    let records: Vec<CensusRecord> = vec![];
    let tmp = std::env::temp_dir().join("census_scatter_empty.svg");
    let e = viz::render_scatter(&records, &tmp, 800, 480);
    assert!(e.is_err());
}
