use super::*;

const RESPONSE: &str = r#"
{
  "data": {
    "user": {
      "contributionsCollection": {
        "contributionCalendar": {
          "totalContributions": 12,
          "weeks": [
            { "contributionDays": [
              { "contributionCount": 0, "date": "2024-03-30" },
              { "contributionCount": 7, "date": "2024-03-31" }
            ] },
            { "contributionDays": [
              { "contributionCount": 5, "date": "2024-04-01" }
            ] }
          ]
        }
      }
    }
  }
}
"#;

#[test]
fn parses_graphql_envelope() {
    let cal = ContributionCalendar::from_response_str(RESPONSE).unwrap();
    assert_eq!(cal.total_contributions, 12);
    assert_eq!(cal.weeks.len(), 2);
    assert_eq!(cal.day_count(), 3);

    let day = cal.weeks[0].contribution_days[1];
    assert_eq!(day.contribution_count, 7);
    assert_eq!(day.date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
}

#[test]
fn reader_and_str_agree() {
    let a = ContributionCalendar::from_response_str(RESPONSE).unwrap();
    let b = ContributionCalendar::from_response_reader(RESPONSE.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn graphql_errors_are_calendar_errors() {
    let body = r#"{ "data": { "user": null }, "errors": [ { "message": "Could not resolve to a User" } ] }"#;
    let err = ContributionCalendar::from_response_str(body).unwrap_err();
    assert!(matches!(err, QuadlifeError::Calendar(_)));
    assert!(err.to_string().contains("Could not resolve to a User"));
}

#[test]
fn missing_user_is_rejected() {
    let err = ContributionCalendar::from_response_str(r#"{ "data": { "user": null } }"#).unwrap_err();
    assert!(err.to_string().contains("no user"));

    let err = ContributionCalendar::from_response_str("{}").unwrap_err();
    assert!(matches!(err, QuadlifeError::Calendar(_)));
}

#[test]
fn malformed_dates_fail_to_parse() {
    let body = RESPONSE.replace("2024-04-01", "April 1st");
    let err = ContributionCalendar::from_response_str(&body).unwrap_err();
    assert!(matches!(err, QuadlifeError::Serde(_)));
}
