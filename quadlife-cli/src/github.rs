use std::time::Duration;

use anyhow::Context as _;

const GRAPHQL_URL: &str = "https://api.github.com/graphql";

const CALENDAR_QUERY: &str = r#"
query($userName: String!) {
  user(login: $userName) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
"#;

/// Environment variable holding the GitHub token used for the GraphQL API.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

pub fn token_from_env() -> anyhow::Result<String> {
    let token = std::env::var(TOKEN_ENV)
        .with_context(|| format!("{TOKEN_ENV} must be set to query the GitHub API"))?;
    if token.trim().is_empty() {
        anyhow::bail!("{TOKEN_ENV} is empty");
    }
    Ok(token)
}

pub fn request_body(user: &str) -> String {
    serde_json::json!({
        "query": CALENDAR_QUERY,
        "variables": { "userName": user },
    })
    .to_string()
}

/// POST the contribution-calendar query and return the raw response body.
#[tracing::instrument(skip(token))]
pub fn fetch_calendar_json(user: &str, token: &str) -> anyhow::Result<String> {
    let agent = ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(30))
        .build();
    let resp = agent
        .post(GRAPHQL_URL)
        .set("Authorization", &format!("Bearer {token}"))
        .set("User-Agent", "quadlife")
        .set("Content-Type", "application/json")
        .send_string(&request_body(user))
        .map_err(|e| match e {
            ureq::Error::Status(code, resp) => {
                let body = resp.into_string().unwrap_or_default();
                anyhow::anyhow!("GitHub API returned HTTP {code}: {}", body.trim())
            }
            other => anyhow::Error::new(other).context("request contribution calendar"),
        })?;
    let body = resp
        .into_string()
        .context("read contribution calendar response")?;
    tracing::debug!(bytes = body.len(), "calendar response received");
    Ok(body)
}
