//! Upstream contribution calendar and the grid built from it.
//!
//! The calendar mirrors the GitHub GraphQL `contributionCalendar` shape; the grid is the
//! automaton's working representation of it.

/// Grid builder and cell types.
pub mod grid;
/// Serde model of the upstream calendar response.
pub mod model;
