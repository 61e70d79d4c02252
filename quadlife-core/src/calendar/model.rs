use std::io::Read;

use chrono::NaiveDate;

use crate::foundation::error::{QuadlifeError, QuadlifeResult};

/// One day of the upstream contribution calendar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDay {
    /// Contributions made on `date`.
    pub contribution_count: u32,
    /// Calendar day (`YYYY-MM-DD` on the wire).
    pub date: NaiveDate,
}

/// One calendar week (a grid column). The first and last weeks of a year may be partial.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDay>,
}

/// A user's contribution calendar, as returned by the GitHub GraphQL API.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    /// Sum reported upstream; not recomputed from `weeks`.
    #[serde(default)]
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeek>,
}

impl ContributionCalendar {
    /// Parse a GraphQL response envelope (see [`CalendarResponse`]).
    pub fn from_response_reader<R: Read>(r: R) -> QuadlifeResult<Self> {
        let resp: CalendarResponse = serde_json::from_reader(r)?;
        resp.into_calendar()
    }

    /// Parse a GraphQL response envelope from a string.
    pub fn from_response_str(s: &str) -> QuadlifeResult<Self> {
        let resp: CalendarResponse = serde_json::from_str(s)?;
        resp.into_calendar()
    }

    /// Number of days across all weeks.
    pub fn day_count(&self) -> usize {
        self.weeks.iter().map(|w| w.contribution_days.len()).sum()
    }
}

/// Raw GraphQL response:
/// `{ "data": { "user": { "contributionsCollection": { "contributionCalendar": ... } } } }`,
/// optionally with a top-level `errors` array.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct CalendarResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Clone, Debug, serde::Deserialize)]
struct ResponseData {
    user: Option<ResponseUser>,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseUser {
    contributions_collection: ContributionsCollection,
}

#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContributionsCollection {
    contribution_calendar: ContributionCalendar,
}

#[derive(Clone, Debug, serde::Deserialize)]
struct GraphqlError {
    message: String,
}

impl CalendarResponse {
    /// Extract the calendar, surfacing GraphQL errors and unknown users.
    pub fn into_calendar(self) -> QuadlifeResult<ContributionCalendar> {
        if let Some(first) = self.errors.first() {
            return Err(QuadlifeError::calendar(format!(
                "upstream reported {} error(s): {}",
                self.errors.len(),
                first.message
            )));
        }
        let user = self
            .data
            .and_then(|d| d.user)
            .ok_or_else(|| QuadlifeError::calendar("response has no user"))?;
        Ok(user.contributions_collection.contribution_calendar)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/calendar/model.rs"]
mod tests;
