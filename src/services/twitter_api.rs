use serde::Deserialize;
use crate::error::{CheckError, CheckResult};
use crate::models::twitter::{TwitterReport, TwitterStatus};
use crate::utils::endpoint;

const PLATFORM: &str = "Twitter";

#[derive(Debug, Deserialize)]
struct UserLookup {
    data: Option<serde_json::Value>,
    errors: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ApiProblem {
    detail: Option<String>,
}

pub struct TwitterService {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl TwitterService {
    pub fn new(client: reqwest::Client, base_url: String, bearer_token: Option<String>) -> Self {
        Self { client, base_url, bearer_token }
    }

    fn token(&self) -> CheckResult<&str> {
        self.bearer_token
            .as_deref()
            .ok_or(CheckError::MissingCredential("Twitter API Bearer Token"))
    }

    /// Fails the same way `check` would when no bearer token is set.
    pub fn ensure_configured(&self) -> CheckResult<()> {
        self.token().map(|_| ())
    }

    pub async fn check(&self, username: &str) -> CheckResult<TwitterReport> {
        let token = self.token()?;

        let url = endpoint(&self.base_url, &["2", "users", "by", "username", username])?;
        let resp = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(CheckError::upstream(PLATFORM))?;

        let status = resp.status();
        if !status.is_success() {
            // Rejected lookups (bad token, malformed handle) carry an RFC 7807 body.
            let detail = resp
                .json::<ApiProblem>()
                .await
                .ok()
                .and_then(|p| p.detail)
                .unwrap_or_else(|| format!("Status code: {}", status.as_u16()));
            tracing::warn!("Twitter API rejected lookup for {}: {}", username, detail);
            return Ok(TwitterReport::with_message(
                TwitterStatus::Error,
                format!("Twitter API Error: {}", detail),
            ));
        }

        let lookup: UserLookup = resp
            .json()
            .await
            .map_err(CheckError::decode(PLATFORM))?;
        Ok(interpret_lookup(lookup))
    }
}

// Suspended, deactivated and unknown accounts all come back 200 with `errors`.
fn interpret_lookup(lookup: UserLookup) -> TwitterReport {
    if lookup.data.is_some() {
        TwitterReport::new(TwitterStatus::Active)
    } else if lookup.errors.is_some() {
        TwitterReport::new(TwitterStatus::Terminated)
    } else {
        TwitterReport::with_message(TwitterStatus::Terminated, "Unexpected API response")
    }
}
