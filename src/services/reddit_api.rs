use reqwest::{header, StatusCode};
use serde::Deserialize;
use crate::error::{CheckError, CheckResult};
use crate::models::StatusReport;
use crate::utils::endpoint;

const PLATFORM: &str = "Reddit";
const USER_AGENT: &str = "BanChecker.org Bot v1.0";

#[derive(Debug, Deserialize)]
struct AboutResponse {
    kind: Option<String>,
    data: Option<AboutData>,
}

#[derive(Debug, Deserialize)]
struct AboutData {
    #[serde(default)]
    is_suspended: bool,
}

pub struct RedditService {
    client: reqwest::Client,
    base_url: String,
}

impl RedditService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub async fn check(&self, username: &str) -> CheckResult<StatusReport> {
        let url = endpoint(&self.base_url, &["user", username, "about.json"])?;
        let resp = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(CheckError::upstream(PLATFORM))?;

        let status = resp.status();
        let report = if status.is_success() {
            match resp.json::<AboutResponse>().await {
                Ok(about) => interpret_about(about),
                Err(e) => {
                    tracing::warn!("Unreadable Reddit profile for {}: {}", username, e);
                    StatusReport::bad("Unexpected response from Reddit")
                }
            }
        } else if status == StatusCode::NOT_FOUND {
            StatusReport::bad("Account not found or shadowbanned")
        } else {
            StatusReport::bad(format!("Reddit returned status {}", status.as_u16()))
        };

        Ok(report.for_user(username))
    }
}

// A `t2` thing is a user account; suspended accounts still come back as `t2`.
fn interpret_about(about: AboutResponse) -> StatusReport {
    if about.kind.as_deref() != Some("t2") {
        return StatusReport::bad("Not a user account");
    }
    match about.data {
        Some(data) if data.is_suspended => StatusReport::bad("Account is suspended"),
        _ => StatusReport::good(),
    }
}
