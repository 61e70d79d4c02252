//! Markup output: the animated document, static snapshots and their rasterization.

/// Layout, timing and palette configuration.
pub mod config;
/// SVG rasterization for previews.
pub mod raster;
/// SVG document writer.
pub mod svg;
