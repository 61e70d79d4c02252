//! Quadlife renders a contribution calendar as a four-color Game of Life.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `ContributionCalendar -> Grid` (one column per week, one cell per day)
//! 2. **Evolve**: `Grid -> Grid` via [`step`], assembled into a sequence by [`build_sequence`]
//! 3. **Render**: `&[Grid] -> String` via [`render_svg`] (animated) or
//!    [`render_snapshot_svg`] (static), optionally rasterized with [`rasterize_svg`]
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure core**: no network or file-system access outside [`RenderConfig::from_path`].
//! - **Deterministic**: equal inputs produce byte-identical documents.
#![forbid(unsafe_code)]

mod automaton;
mod calendar;
mod foundation;
mod render;

pub use automaton::sequence::{SequenceOpts, build_sequence, evolve};
pub use automaton::step::{
    FALLBACK_SPAWN_COUNT, Neighborhood, next_cell, resolve_spawn_count, step,
};
pub use calendar::grid::{Cell, Grid, GridMode};
pub use calendar::model::{
    CalendarResponse, ContributionCalendar, ContributionDay, ContributionWeek,
};
pub use foundation::core::{Bucket, Rgb8};
pub use foundation::error::{QuadlifeError, QuadlifeResult};
pub use render::config::{Palette, RenderConfig};
pub use render::raster::{Frame, rasterize_svg};
pub use render::svg::{Layout, month_labels, render_snapshot_svg, render_svg};
