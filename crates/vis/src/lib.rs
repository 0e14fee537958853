//! Dashboard visualization library.
//!
//! Lays charts and KPI cards out on a page, renders the page as HTML with
//! inline SVG, and writes it to a report directory.

pub(crate) mod id;
pub(crate) mod template;

pub mod error;
pub mod layout;
pub mod render;
pub mod report;
