//! Visual configuration for the scatter chart.
//!
//! Every fixed visual constant lives here as a named field with a documented
//! default, so the rendering code stays free of inline literals and tests
//! can exercise geometry against arbitrary values.

use crate::layout::Margins;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new RGBA color.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }
}

/// Complete style specification for the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    /// Space reserved around the drawable area (default 50 on every side).
    pub margins: Margins,
    /// Marker radius in pixels (default 15).
    pub marker_radius: f64,
    /// Marker fill color (default blue).
    pub marker_fill: Rgba,
    /// Marker fill opacity, 0..=1 (default 0.75).
    pub marker_opacity: f64,
    /// Font size of the abbreviation label inside each marker (default 10).
    pub label_font_px: f32,
    /// Label fill color (default white).
    pub label_fill: Rgba,
    /// Tooltip displacement `(dx, dy)` from the marker in pixels
    /// (default 60 left, 80 down).
    pub tooltip_offset: (f64, f64),
    /// Caption under the horizontal axis.
    pub x_caption: String,
    /// Caption along the left margin, rotated 90° counter-clockwise.
    pub y_caption: String,
    /// Font size of axis tick labels (default 12).
    pub tick_font_px: f32,
    /// Font size of axis captions (default 16).
    pub caption_font_px: f32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            margins: Margins::default(),
            marker_radius: 15.0,
            marker_fill: Rgba::rgb(0, 0, 255),
            marker_opacity: 0.75,
            label_font_px: 10.0,
            label_fill: Rgba::rgb(255, 255, 255),
            tooltip_offset: (-60.0, 80.0),
            x_caption: "Age (median)".to_string(),
            y_caption: "Smokes (%)".to_string(),
            tick_font_px: 12.0,
            caption_font_px: 16.0,
        }
    }
}
