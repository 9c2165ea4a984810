//! Chart layout: viewport, margins, drawable area, and fitted geometry.

use crate::models::CensusRecord;
use crate::scale::{self, LinearScale};
use crate::style::ChartStyle;

/// Fixed space around the drawable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 50.0,
            bottom: 50.0,
            left: 50.0,
        }
    }
}

/// The full chart surface, normally the current window size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Surface plus drawable area derived from it.
///
/// Drawable dimensions go negative for viewports smaller than the margins;
/// that is accepted degenerate behavior and must not panic anywhere
/// downstream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
}

impl ChartLayout {
    pub fn new(viewport: Viewport, margins: Margins) -> Self {
        Self { viewport, margins }
    }

    /// Width of the drawable area inside the margins.
    pub fn drawable_width(&self) -> f64 {
        self.viewport.width - self.margins.left - self.margins.right
    }

    /// Height of the drawable area inside the margins.
    pub fn drawable_height(&self) -> f64 {
        self.viewport.height - self.margins.top - self.margins.bottom
    }
}

/// A layout with both scales fitted to a dataset.
///
/// Built fresh for every render pass; marker positions come from here in
/// both frontends, so the interactive window and the static file place every
/// record identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub layout: ChartLayout,
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartGeometry {
    /// Fit scales for the dataset to the drawable area of `viewport`.
    pub fn fit(records: &[CensusRecord], viewport: Viewport, style: &ChartStyle) -> Self {
        let layout = ChartLayout::new(viewport, style.margins);
        let x = scale::age_scale(records, layout.drawable_width());
        let y = scale::smokes_scale(records, layout.drawable_height());
        Self { layout, x, y }
    }

    /// Marker position of a record, relative to the drawable origin.
    pub fn position(&self, record: &CensusRecord) -> (f64, f64) {
        (self.x.map(record.age), self.y.map(record.smokes))
    }
}
