//! census-scatter
//!
//! A small Rust library for loading a state census dataset (median age and
//! smoking rate per state) and rendering it as a responsive scatter chart.
//! Pairs with the `cscat` CLI (SVG/PNG output) and the `cscat-gui` desktop
//! window (resize-aware redraw, hover tooltips).
//!
//! ### Features
//! - Read the CSV dataset with header-based column mapping
//! - Linear scales with the dataset's domain-padding rules
//! - Chart layout from viewport and margins, identical in both frontends
//! - Static SVG/PNG rendering
//! - Quick summary statistics (min, max, mean, median) per column
//!
//! ### Example
//! ```no_run
//! use census_scatter::{dataset, viz};
//!
//! let records = dataset::load_csv("assets/data.csv")?;
//! viz::render_scatter(&records, "chart.svg", 960, 600)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod dataset;
pub mod layout;
pub mod models;
pub mod scale;
pub mod stats;
pub mod style;
pub mod tooltip;
pub mod viz;

pub use layout::{ChartGeometry, ChartLayout, Margins, Viewport};
pub use models::{CensusRecord, RawRecord};
pub use scale::LinearScale;
pub use style::ChartStyle;
