//! Client side of the checkers: feed a list of identifiers through one of the
//! `/api/check-*` endpoints and split the answers into good and bad.

use futures::future::join_all;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use crate::utils::{strip_at, MINECRAFT_MAX_USERNAME_LEN};

/// Roblox rate-limits aggressively, so its checks run one at a time with this gap.
pub const ROBLOX_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Platform {
    Minecraft,
    Reddit,
    Roblox,
    Steam,
    Tiktok,
    Twitter,
    Youtube,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Concurrent,
    Sequential { delay: Duration },
}

impl Platform {
    pub fn route(self) -> &'static str {
        match self {
            Platform::Minecraft => "/api/check-minecraft",
            Platform::Reddit => "/api/check-reddit",
            Platform::Roblox => "/api/check-roblox",
            Platform::Steam => "/api/check-steam",
            Platform::Tiktok => "/api/check-tiktok",
            Platform::Twitter => "/api/check-twitter",
            Platform::Youtube => "/api/check-youtube",
        }
    }

    pub fn param(self) -> &'static str {
        match self {
            Platform::Steam => "user_input",
            Platform::Youtube => "channel",
            _ => "username",
        }
    }

    pub fn dispatch(self) -> Dispatch {
        match self {
            Platform::Roblox => Dispatch::Sequential { delay: ROBLOX_DELAY },
            _ => Dispatch::Concurrent,
        }
    }
}

/// The handful of fields the endpoints may put in a response body.
#[derive(Debug, Default, Deserialize)]
pub struct CheckBody {
    pub status: Option<String>,
    pub reason: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub good: bool,
    /// Line written to the good/bad list.
    pub label: String,
    pub error_message: Option<String>,
}

impl Outcome {
    fn good(label: impl Into<String>) -> Self {
        Self { good: true, label: label.into(), error_message: None }
    }

    fn bad(label: impl Into<String>) -> Self {
        Self { good: false, label: label.into(), error_message: None }
    }
}

/// Maps one endpoint answer to a verdict, the same way each checker page does.
pub fn interpret(
    platform: Platform,
    identifier: &str,
    http: StatusCode,
    body: CheckBody,
) -> Outcome {
    let status = body.status.as_deref().unwrap_or_default();

    match platform {
        // The profile card only renders on 200; 404 means the name is free.
        Platform::Minecraft => {
            if http == StatusCode::OK {
                Outcome::good(identifier)
            } else {
                Outcome::bad(identifier)
            }
        }
        Platform::Roblox => {
            let label = match &body.reason {
                Some(reason) => format!("{} ({})", identifier, reason),
                None => identifier.to_string(),
            };
            Outcome { good: status == "good", label, error_message: None }
        }
        Platform::Tiktok => match status {
            "active" => Outcome::good(identifier),
            "private" => Outcome::good(format!("{} (Private)", identifier)),
            _ => Outcome::bad(identifier),
        },
        Platform::Twitter => match status {
            "active" if http.is_success() => Outcome::good(identifier),
            "error" => Outcome {
                good: false,
                label: identifier.to_string(),
                error_message: body.message.or(body.reason),
            },
            _ => Outcome::bad(identifier),
        },
        Platform::Youtube => {
            if http.is_success() && (status == "good" || status == "active") {
                Outcome::good(identifier)
            } else {
                Outcome::bad(identifier)
            }
        }
        Platform::Reddit | Platform::Steam => {
            if http.is_success() && status == "good" {
                Outcome::good(identifier)
            } else {
                Outcome::bad(identifier)
            }
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub good: Vec<String>,
    pub bad: Vec<String>,
    /// First upstream error message seen, worth showing the operator once.
    pub first_error: Option<String>,
}

impl BatchReport {
    fn push(&mut self, outcome: Outcome) {
        if self.first_error.is_none() {
            self.first_error = outcome.error_message;
        }
        if outcome.good {
            self.good.push(outcome.label);
        } else {
            self.bad.push(outcome.label);
        }
    }
}

pub struct BatchClient {
    client: reqwest::Client,
    base_url: String,
}

impl BatchClient {
    pub fn new(base_url: &str, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Never fails: a transport or decode problem just makes the identifier bad.
    pub async fn check_one(&self, platform: Platform, identifier: &str) -> Outcome {
        let query_value = match platform {
            Platform::Twitter | Platform::Tiktok => strip_at(identifier),
            _ => identifier,
        };

        let too_long = query_value.chars().count() > MINECRAFT_MAX_USERNAME_LEN;
        if platform == Platform::Minecraft && too_long {
            return Outcome::bad(identifier);
        }

        let url = format!("{}{}", self.base_url, platform.route());
        let resp = match self
            .client
            .get(&url)
            .query(&[(platform.param(), query_value)])
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                tracing::warn!("Error checking {}: {}", identifier, e);
                return Outcome::bad(identifier);
            }
        };

        let http = resp.status();
        let body = resp.json::<CheckBody>().await.unwrap_or_else(|e| {
            tracing::debug!("Unreadable body for {} ({}): {}", identifier, http, e);
            CheckBody::default()
        });

        interpret(platform, identifier, http, body)
    }

    /// Results come back in input order whichever dispatch the platform uses.
    pub async fn check_all(&self, platform: Platform, identifiers: &[String]) -> BatchReport {
        let outcomes = match platform.dispatch() {
            Dispatch::Concurrent => {
                join_all(identifiers.iter().map(|id| self.check_one(platform, id))).await
            }
            Dispatch::Sequential { delay } => {
                let mut outcomes = Vec::with_capacity(identifiers.len());
                for (i, id) in identifiers.iter().enumerate() {
                    if i > 0 {
                        tokio::time::sleep(delay).await;
                    }
                    outcomes.push(self.check_one(platform, id).await);
                }
                outcomes
            }
        };

        let mut report = BatchReport::default();
        for outcome in outcomes {
            report.push(outcome);
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(status: &str) -> CheckBody {
        CheckBody { status: Some(status.to_string()), ..Default::default() }
    }

    #[test]
    fn only_roblox_is_serialized() {
        assert_eq!(
            Platform::Roblox.dispatch(),
            Dispatch::Sequential { delay: Duration::from_millis(500) }
        );
        assert_eq!(Platform::Reddit.dispatch(), Dispatch::Concurrent);
        assert_eq!(Platform::Youtube.param(), "channel");
        assert_eq!(Platform::Steam.param(), "user_input");
    }

    #[test]
    fn tiktok_private_counts_as_good() {
        let outcome = interpret(Platform::Tiktok, "quiet", StatusCode::OK, body("private"));
        assert!(outcome.good);
        assert_eq!(outcome.label, "quiet (Private)");

        let outcome = interpret(
            Platform::Tiktok,
            "gone",
            StatusCode::OK,
            body("banned_or_does_not_exist"),
        );
        assert!(!outcome.good);
    }

    #[test]
    fn roblox_labels_carry_reason() {
        let outcome = interpret(
            Platform::Roblox,
            "builderman",
            StatusCode::OK,
            CheckBody {
                status: Some("bad".into()),
                reason: Some("Account is banned".into()),
                message: None,
            },
        );
        assert!(!outcome.good);
        assert_eq!(outcome.label, "builderman (Account is banned)");
    }

    #[test]
    fn twitter_error_keeps_message() {
        let outcome = interpret(
            Platform::Twitter,
            "@jack",
            StatusCode::OK,
            CheckBody {
                status: Some("error".into()),
                reason: None,
                message: Some("Twitter API Error: Unauthorized".into()),
            },
        );
        assert!(!outcome.good);
        assert_eq!(outcome.label, "@jack");
        assert_eq!(outcome.error_message.as_deref(), Some("Twitter API Error: Unauthorized"));
    }

    #[test]
    fn youtube_accepts_either_word() {
        assert!(interpret(Platform::Youtube, "a", StatusCode::OK, body("good")).good);
        assert!(interpret(Platform::Youtube, "a", StatusCode::OK, body("active")).good);
        assert!(!interpret(Platform::Youtube, "a", StatusCode::NOT_FOUND, body("bad")).good);
    }

    #[test]
    fn minecraft_goes_by_http_status() {
        assert!(interpret(Platform::Minecraft, "Notch", StatusCode::OK, CheckBody::default()).good);
        assert!(!interpret(Platform::Minecraft, "free", StatusCode::NOT_FOUND, body("bad")).good);
    }

    #[test]
    fn report_keeps_only_first_error() {
        let mut report = BatchReport::default();
        report.push(Outcome { good: false, label: "a".into(), error_message: Some("one".into()) });
        report.push(Outcome::good("b"));
        report.push(Outcome { good: false, label: "c".into(), error_message: Some("two".into()) });

        assert_eq!(report.good, vec!["b"]);
        assert_eq!(report.bad, vec!["a", "c"]);
        assert_eq!(report.first_error.as_deref(), Some("one"));
    }
}
