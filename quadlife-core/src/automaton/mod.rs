//! The Quadlife automaton and the generation sequence built on top of it.

/// Rendered generation sequence (lead-in, evolution, reset, loop close).
pub mod sequence;
/// Single-generation step function and color resolution.
pub mod step;
