use super::*;
use crate::calendar::model::{ContributionDay, ContributionWeek};
use chrono::{Days, NaiveDate};

/// Calendar from visual rows (row = weekday, column = week).
fn calendar(rows: &[&[u32]]) -> ContributionCalendar {
    let height = rows.len();
    let width = rows.first().map_or(0, |r| r.len());
    let start = NaiveDate::from_ymd_opt(2024, 2, 25).unwrap();
    let weeks = (0..width)
        .map(|c| ContributionWeek {
            contribution_days: (0..height)
                .map(|r| ContributionDay {
                    contribution_count: rows[r][c],
                    date: start
                        .checked_add_days(Days::new((c * 7 + r) as u64))
                        .unwrap(),
                })
                .collect(),
        })
        .collect();
    ContributionCalendar {
        total_contributions: 0,
        weeks,
    }
}

fn blinker() -> ContributionCalendar {
    calendar(&[
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
        &[0, 3, 3, 3, 0],
        &[0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0],
    ])
}

#[test]
fn default_layout_matches_loop() {
    let opts = SequenceOpts::default();
    assert_eq!(opts.len(), 3 + 90 + 4 + 1);

    let cal = blinker();
    let seq = build_sequence(&cal, opts).unwrap();
    assert_eq!(seq.len(), opts.len());

    let observed = Grid::from_calendar(&cal, GridMode::Observed);
    let reset = Grid::from_calendar(&cal, GridMode::Reset);
    assert!(seq[..3].iter().all(|g| *g == observed));
    assert_eq!(seq[3], step(&observed));
    assert_eq!(seq[4], step(&seq[3]));
    assert!(seq[93..97].iter().all(|g| *g == reset));
    assert_eq!(seq[97], observed);
}

#[test]
fn every_generation_keeps_shape() {
    let cal = calendar(&[&[1, 7, 0, 12], &[0, 9, 3, 0], &[15, 0, 0, 2]]);
    let seq = build_sequence(&cal, SequenceOpts::default()).unwrap();
    assert!(seq.windows(2).all(|w| w[0].same_shape(&w[1])));
}

#[test]
fn custom_layout_without_loop_close() {
    let opts = SequenceOpts {
        lead_in: 0,
        generations: 2,
        reset_hold: 1,
        close_loop: false,
    };
    let seq = build_sequence(&blinker(), opts).unwrap();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq[2].population(), 0);
}

#[test]
fn empty_sequence_is_rejected() {
    let opts = SequenceOpts {
        lead_in: 0,
        generations: 0,
        reset_hold: 0,
        close_loop: false,
    };
    assert!(opts.is_empty());
    let err = build_sequence(&blinker(), opts).unwrap_err();
    assert!(matches!(err, QuadlifeError::Validation(_)));
}

#[test]
fn evolve_chains_steps() {
    let start = Grid::from_calendar(&blinker(), GridMode::Observed);
    let gens = evolve(&start, 3);
    assert_eq!(gens.len(), 3);
    // Once the spawned ends settle into bucket 2, the blinker has period 2.
    assert_eq!(gens[0], gens[2]);
    assert_ne!(gens[0], gens[1]);
    assert!(evolve(&start, 0).is_empty());
}

#[test]
fn opts_deserialize_with_defaults() {
    let opts: SequenceOpts = serde_json::from_str(r#"{ "generations": 10 }"#).unwrap();
    assert_eq!(opts.generations, 10);
    assert_eq!(opts.lead_in, 3);
    assert!(opts.close_loop);
}
