//! Static rendering: write the scatter chart to **SVG** or **PNG**.
//!
//! - Backend chosen by output extension (`.svg` → SVG, anything else → bitmap)
//! - One composed marker + abbreviation label element per record
//! - Axis captions from [`ChartStyle`]: x caption below the bottom axis,
//!   y caption rotated along the left margin

use crate::models::CensusRecord;
use crate::style::ChartStyle;
use anyhow::{Result, anyhow};

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontFamily;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use plotters_bitmap::BitMapBackend;
use plotters_svg::SVGBackend;

use std::path::Path;
use std::sync::Once;

/// One-time registration for a fallback "sans-serif" font when using the
/// `ab_glyph` text path. Required because `ab_glyph` doesn't discover OS
/// fonts.
static INIT_FONTS: Once = Once::new();

fn ensure_fonts_registered() {
    // Safe to call many times; only runs once.
    INIT_FONTS.call_once(|| {
        let _ = plotters::style::register_font(
            "sans-serif",
            plotters::style::FontStyle::Normal,
            include_bytes!("../assets/DejaVuSans.ttf"),
        );
    });
}

/// Render the scatter chart with default styling.
pub fn render_scatter<P: AsRef<Path>>(
    records: &[CensusRecord],
    out_path: P,
    width: u32,
    height: u32,
) -> Result<()> {
    render_scatter_styled(records, out_path, width, height, &ChartStyle::default())
}

/// Render the scatter chart with the given style.
///
/// The surface is `width` × `height`; the drawable area sits inside the
/// style's margins. Degenerate sizes (surface smaller than the margins)
/// surface as an error from the backend, never a panic.
pub fn render_scatter_styled<P: AsRef<Path>>(
    records: &[CensusRecord],
    out_path: P,
    width: u32,
    height: u32,
    style: &ChartStyle,
) -> Result<()> {
    if records.is_empty() {
        return Err(anyhow!("no data to plot"));
    }
    ensure_fonts_registered();
    let out_path = out_path.as_ref();
    let path_string = out_path.to_string_lossy().into_owned();

    if out_path.extension().and_then(|s| s.to_str()) == Some("svg") {
        let root = SVGBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, records, style)?;
    } else {
        let root = BitMapBackend::new(path_string.as_str(), (width, height)).into_drawing_area();
        draw_chart(root, records, style)?;
    }
    Ok(())
}

/// Helper that draws to any Plotters backend.
fn draw_chart<DB>(
    root: DrawingArea<DB, Shift>,
    records: &[CensusRecord],
    style: &ChartStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    root.fill(&WHITE).map_err(|e| anyhow!("{:?}", e))?;

    // The same domain rules as the interactive frontend; plotters applies
    // the identical linear mapping onto the drawable area, so marker
    // placement matches `ChartGeometry` output.
    let (age_min, age_max) = finite_bounds(records.iter().map(|r| r.age));
    let (_, smokes_max) = finite_bounds(records.iter().map(|r| r.smokes));
    if !age_min.is_finite() || !smokes_max.is_finite() {
        return Err(anyhow!("no numeric values to plot"));
    }
    let x_domain = (age_min - 1.0)..(age_max + 3.0);
    let y_domain = 9.0..(smokes_max + 2.0);

    let mut chart = ChartBuilder::on(&root)
        .margin_top(style.margins.top as u32)
        .margin_right(style.margins.right as u32)
        .set_label_area_size(LabelAreaPosition::Left, style.margins.left as u32)
        .set_label_area_size(LabelAreaPosition::Bottom, style.margins.bottom as u32)
        .build_cartesian_2d(x_domain, y_domain)
        .map_err(|e| anyhow!("{:?}", e))?;

    let tick_fmt = |v: &f64| {
        if v.fract() == 0.0 {
            format!("{}", *v as i64)
        } else {
            format!("{v}")
        }
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc(style.x_caption.as_str())
        .y_desc(style.y_caption.as_str())
        .x_labels(10)
        .y_labels(10)
        .x_label_formatter(&tick_fmt)
        .y_label_formatter(&tick_fmt)
        .label_style((FontFamily::SansSerif, style.tick_font_px as u32))
        .axis_desc_style((FontFamily::SansSerif, style.caption_font_px as u32))
        .draw()
        .map_err(|e| anyhow!("{:?}", e))?;

    let fill = RGBColor(style.marker_fill.r, style.marker_fill.g, style.marker_fill.b)
        .mix(style.marker_opacity)
        .filled();
    let label_color = RGBColor(style.label_fill.r, style.label_fill.g, style.label_fill.b);
    let label_style = TextStyle::from((FontFamily::SansSerif, style.label_font_px as u32))
        .color(&label_color)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let radius = style.marker_radius.round() as i32;

    // Marker and label are one composed element, so either both draw or the
    // record errors as a whole.
    chart
        .draw_series(records.iter().map(|r| {
            EmptyElement::at((r.age, r.smokes))
                + Circle::new((0, 0), radius, fill)
                + Text::new(r.abbr.clone(), (0, 0), label_style.clone())
        }))
        .map_err(|e| anyhow!("{:?}", e))?;

    root.present().map_err(|e| anyhow!("{:?}", e))?;
    Ok(())
}

fn finite_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.filter(|v| v.is_finite()).fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), v| (lo.min(v), hi.max(v)),
    )
}
