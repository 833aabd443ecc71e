use reqwest::{header, StatusCode};
use crate::error::{CheckError, CheckResult};
use crate::models::tiktok::{TikTokReport, TikTokStatus};
use crate::utils::endpoint;

const PLATFORM: &str = "TikTok";

// TikTok serves a stripped page to obvious bots.
const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/96.0.4664.110 Safari/537.36";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.9";

const PRIVATE_MARKERS: [&str; 2] = ["\"isPrivateAccount\":true", "This account is private"];

pub struct TikTokService {
    client: reqwest::Client,
    base_url: String,
}

impl TikTokService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Scrapes the public profile page; the username must already be validated.
    pub async fn check(&self, username: &str) -> CheckResult<TikTokReport> {
        let handle = format!("@{}", username);
        let url = endpoint(&self.base_url, &[&handle])?;

        let resp = self
            .client
            .get(url)
            .header(header::USER_AGENT, BROWSER_UA)
            .header(header::ACCEPT, BROWSER_ACCEPT)
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(header::DNT, "1")
            .header(header::UPGRADE_INSECURE_REQUESTS, "1")
            .send()
            .await
            .map_err(CheckError::upstream(PLATFORM))?;

        let status = resp.status();
        let body = resp.text().await.map_err(CheckError::upstream(PLATFORM))?;

        Ok(TikTokReport {
            status: classify_page(status, &body),
            username: username.to_string(),
        })
    }
}

pub fn classify_page(status: StatusCode, body: &str) -> TikTokStatus {
    match status {
        StatusCode::OK if PRIVATE_MARKERS.iter().any(|m| body.contains(m)) => TikTokStatus::Private,
        StatusCode::OK => TikTokStatus::Active,
        StatusCode::NOT_FOUND => TikTokStatus::BannedOrDoesNotExist,
        _ => TikTokStatus::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_classification() {
        assert_eq!(
            classify_page(StatusCode::OK, r#"{"user":{"isPrivateAccount":true}}"#),
            TikTokStatus::Private
        );
        assert_eq!(
            classify_page(StatusCode::OK, "<p>This account is private</p>"),
            TikTokStatus::Private
        );
        assert_eq!(
            classify_page(StatusCode::OK, r#"{"isPrivateAccount":false}"#),
            TikTokStatus::Active
        );
        assert_eq!(classify_page(StatusCode::NOT_FOUND, ""), TikTokStatus::BannedOrDoesNotExist);
        assert_eq!(classify_page(StatusCode::BAD_GATEWAY, ""), TikTokStatus::Error);
    }
}
