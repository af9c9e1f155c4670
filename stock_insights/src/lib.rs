//! Report assembly on top of the series loader and the indicator engine.
//!
//! [`pipeline::ReportPipeline`] loads a series, computes its indicator table,
//! gathers headlines and model commentary, and produces a
//! [`report::ReportRecord`] that renderers consume as JSON or as the text
//! preview from [`render::render_text`].

pub mod config;
pub mod format;
pub mod narrative;
pub mod pipeline;
pub mod render;
pub mod report;

pub use pipeline::{PipelineError, ReportPipeline};
pub use report::ReportRecord;
