use crate::{
    automaton::step::step,
    calendar::{
        grid::{Grid, GridMode},
        model::ContributionCalendar,
    },
    foundation::error::{QuadlifeError, QuadlifeResult},
};

/// Layout of the rendered generation sequence.
///
/// The sequence is `lead_in` holds of the observed grid, `generations` automaton steps, then
/// `reset_hold` all-zero grids and, with `close_loop`, the observed grid once more so the
/// animation ends where it started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SequenceOpts {
    /// Copies of the observed grid shown before the automaton starts.
    pub lead_in: usize,
    /// Number of automaton steps.
    pub generations: usize,
    /// Copies of the reset grid shown after the last step.
    pub reset_hold: usize,
    /// Append the observed grid after the reset hold.
    pub close_loop: bool,
}

impl Default for SequenceOpts {
    fn default() -> Self {
        Self {
            lead_in: 3,
            generations: 90,
            reset_hold: 4,
            close_loop: true,
        }
    }
}

impl SequenceOpts {
    /// Total number of grids [`build_sequence`] returns.
    pub fn len(&self) -> usize {
        self.lead_in + self.generations + self.reset_hold + usize::from(self.close_loop)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Apply [`step`] `n` times, returning every intermediate generation (excluding `start`).
pub fn evolve(start: &Grid, n: usize) -> Vec<Grid> {
    let mut out: Vec<Grid> = Vec::with_capacity(n);
    for i in 0..n {
        let next = step(out.last().unwrap_or(start));
        tracing::trace!(generation = i + 1, population = next.population(), "stepped");
        out.push(next);
    }
    out
}

/// Build the full generation sequence for a calendar.
#[tracing::instrument(skip(calendar), fields(weeks = calendar.weeks.len()))]
pub fn build_sequence(
    calendar: &ContributionCalendar,
    opts: SequenceOpts,
) -> QuadlifeResult<Vec<Grid>> {
    if opts.is_empty() {
        return Err(QuadlifeError::validation(
            "sequence must contain at least one generation",
        ));
    }

    let observed = Grid::from_calendar(calendar, GridMode::Observed);
    let reset = Grid::from_calendar(calendar, GridMode::Reset);

    let mut seq = Vec::with_capacity(opts.len());
    seq.extend(std::iter::repeat_n(&observed, opts.lead_in).cloned());
    let evolved = evolve(&observed, opts.generations);
    tracing::debug!(
        initial = observed.population(),
        last = evolved.last().map(Grid::population),
        "evolved {} generations",
        evolved.len()
    );
    seq.extend(evolved);
    seq.extend(std::iter::repeat_n(&reset, opts.reset_hold).cloned());
    if opts.close_loop {
        seq.push(observed);
    }
    Ok(seq)
}

#[cfg(test)]
#[path = "../../tests/unit/automaton/sequence.rs"]
mod tests;
