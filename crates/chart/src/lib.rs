//! Chart geometry for dashboards.
//!
//! [`LineSeries`] maps an ordered series of labelled values onto a line and
//! a filled area, [`RadialShare`] maps labelled shares onto pie wedges. Both
//! produce plain geometry: points and SVG-style path data, with no markup.

mod data;

pub mod error;
pub mod format;
pub mod geometry;
pub mod line;
pub mod pie;

pub use crate::data::Color;
pub use crate::data::DataPoint;
pub use crate::line::LineChart;
pub use crate::line::LineSeries;
pub use crate::pie::PieChart;
pub use crate::pie::RadialShare;
