use census_scatter::layout::{ChartGeometry, ChartLayout, Margins, Viewport};
use census_scatter::models::CensusRecord;
use census_scatter::style::ChartStyle;

fn sample_records() -> Vec<CensusRecord> {
    [(10.0, 5.0), (20.0, 15.0), (30.0, 25.0)]
        .iter()
        .enumerate()
        .map(|(i, (age, smokes))| CensusRecord {
            state: format!("State {i}"),
            abbr: format!("S{i}"),
            age: *age,
            smokes: *smokes,
        })
        .collect()
}

#[test]
fn drawable_area_is_viewport_minus_margins() {
    for (w, h) in [(960.0, 600.0), (1920.0, 1080.0), (101.0, 101.0), (100.0, 100.0)] {
        let layout = ChartLayout::new(Viewport::new(w, h), Margins::default());
        assert_eq!(layout.drawable_width(), w - 100.0);
        assert_eq!(layout.drawable_height(), h - 100.0);
    }
}

#[test]
fn degenerate_viewports_are_accepted() {
    let layout = ChartLayout::new(Viewport::new(10.0, 0.0), Margins::default());
    assert_eq!(layout.drawable_width(), -90.0);
    assert_eq!(layout.drawable_height(), -100.0);
}

#[test]
fn domains_follow_the_padding_rules() {
    let geom = ChartGeometry::fit(
        &sample_records(),
        Viewport::new(960.0, 600.0),
        &ChartStyle::default(),
    );
    assert_eq!(geom.x.domain, (9.0, 33.0));
    assert_eq!(geom.y.domain, (9.0, 27.0));
    assert_eq!(geom.x.range, (0.0, 860.0));
    assert_eq!(geom.y.range, (500.0, 0.0));
}

#[test]
fn marker_positions_match_the_scales_exactly() {
    let records = sample_records();
    let geom = ChartGeometry::fit(&records, Viewport::new(960.0, 600.0), &ChartStyle::default());
    for r in &records {
        let (px, py) = geom.position(r);
        assert_eq!(px, geom.x.map(r.age));
        assert_eq!(py, geom.y.map(r.smokes));
    }
    // Spot check one record against the hand-computed mapping.
    let (px, py) = geom.position(&records[1]); // age 20, smokes 15
    assert!((px - (20.0 - 9.0) / 24.0 * 860.0).abs() < 1e-9);
    assert!((py - (500.0 - (15.0 - 9.0) / 18.0 * 500.0)).abs() < 1e-9);
}

#[test]
fn refitting_after_a_resize_recomputes_positions() {
    let records = sample_records();
    let style = ChartStyle::default();
    let before = ChartGeometry::fit(&records, Viewport::new(960.0, 600.0), &style);
    let after = ChartGeometry::fit(&records, Viewport::new(480.0, 300.0), &style);

    // Same domains, new ranges: the data re-plots at recomputed pixels.
    assert_eq!(before.x.domain, after.x.domain);
    assert_eq!(before.y.domain, after.y.domain);
    assert_eq!(after.x.range, (0.0, 380.0));
    assert_eq!(after.y.range, (200.0, 0.0));
    let (bx, _) = before.position(&records[2]);
    let (ax, _) = after.position(&records[2]);
    assert!(ax < bx);

    // Fitting twice for the same viewport is idempotent.
    let again = ChartGeometry::fit(&records, Viewport::new(480.0, 300.0), &style);
    assert_eq!(after, again);
}
