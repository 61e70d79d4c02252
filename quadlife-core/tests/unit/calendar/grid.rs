use super::*;
use crate::calendar::model::{ContributionDay, ContributionWeek};

fn day(count: u32, d: u32) -> ContributionDay {
    ContributionDay {
        contribution_count: count,
        date: NaiveDate::from_ymd_opt(2024, 1, d).unwrap(),
    }
}

fn calendar() -> ContributionCalendar {
    ContributionCalendar {
        total_contributions: 23,
        weeks: vec![
            ContributionWeek {
                contribution_days: vec![day(3, 1), day(0, 2), day(20, 3)],
            },
            ContributionWeek {
                contribution_days: vec![day(0, 4)],
            },
        ],
    }
}

#[test]
fn observed_mode_keeps_counts_in_source_order() {
    let grid = Grid::from_calendar(&calendar(), GridMode::Observed);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.columns()[0].len(), 3);
    assert_eq!(grid.columns()[1].len(), 1);

    let counts: Vec<u32> = grid.iter().map(|(_, _, c)| c.contribution_count).collect();
    assert_eq!(counts, vec![3, 0, 20, 0]);
    assert_eq!(grid.get(0, 2).unwrap().date.to_string(), "2024-01-03");
    assert_eq!(grid.population(), 2);
}

#[test]
fn reset_mode_zeroes_counts_and_keeps_dates() {
    let observed = Grid::from_calendar(&calendar(), GridMode::Observed);
    let reset = Grid::from_calendar(&calendar(), GridMode::Reset);

    assert!(reset.same_shape(&observed));
    assert_eq!(reset.population(), 0);
    for ((_, _, a), (_, _, b)) in observed.iter().zip(reset.iter()) {
        assert_eq!(a.date, b.date);
    }
    assert_eq!(observed.reset(), reset);
}

#[test]
fn lookups_outside_ragged_columns_are_none() {
    let grid = Grid::from_calendar(&calendar(), GridMode::Observed);
    assert!(grid.get(1, 0).is_some());
    assert!(grid.get(1, 1).is_none());
    assert!(grid.get(2, 0).is_none());
    assert!(grid.get_signed(-1, 0).is_none());
    assert!(grid.get_signed(0, -1).is_none());
    assert!(grid.get_signed(0, 0).is_some());
}

#[test]
fn cells_are_independent_values() {
    let grid = Grid::from_calendar(&calendar(), GridMode::Reset);
    let mut columns = grid.columns().to_vec();
    columns[0][0] = columns[0][0].with_count(9);
    assert_eq!(columns[0][0].contribution_count, 9);
    assert_eq!(columns[0][1].contribution_count, 0);
    assert_eq!(columns[1][0].contribution_count, 0);
    assert_eq!(grid.get(0, 0).map(|c| c.contribution_count), Some(0));
}

#[test]
fn empty_calendar_gives_empty_grid() {
    let grid = Grid::from_calendar(&ContributionCalendar::default(), GridMode::Observed);
    assert!(grid.is_empty());
    assert_eq!(grid.row_count(), 0);
    assert_eq!(grid.column_count(), 0);
}
