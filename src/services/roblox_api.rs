use reqwest::{header, StatusCode};
use serde::{Deserialize, Serialize};
use crate::error::{CheckError, CheckResult};
use crate::models::roblox::RobloxReport;
use crate::models::Verdict;
use crate::utils::endpoint;

const PLATFORM: &str = "Roblox";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct UsernamesRequest<'a> {
    usernames: [&'a str; 1],
    exclude_banned_users: bool,
}

#[derive(Debug, Deserialize)]
struct UsernamesResponse {
    #[serde(default)]
    data: Vec<UsernameMatch>,
}

#[derive(Debug, Deserialize)]
struct UsernameMatch {
    id: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserProfile {
    #[serde(default)]
    is_banned: bool,
}

pub struct RobloxService {
    client: reqwest::Client,
    users_url: String,
    friends_url: String,
}

impl RobloxService {
    pub fn new(client: reqwest::Client, users_url: String, friends_url: String) -> Self {
        Self { client, users_url, friends_url }
    }

    /// Username → user id, then profile `isBanned`, then the friends list as a
    /// liveness check (restricted accounts get 403 there).
    ///
    /// Always ends in a report: upstream trouble becomes a bad verdict with a reason.
    pub async fn check(&self, username: &str) -> RobloxReport {
        let report = |status: Verdict, user_id: Option<u64>, reason: &str| RobloxReport {
            status,
            username: username.to_string(),
            user_id,
            reason: reason.to_string(),
        };

        let Some(user_id) = self.get_user_id(username).await else {
            return report(Verdict::Bad, None, "Account not found");
        };

        let profile = match self.get_profile(user_id).await {
            Ok(Ok(profile)) => profile,
            Ok(Err(status)) => {
                let reason = format!("API returned error {} for profile", status.as_u16());
                tracing::warn!("{} (user {})", reason, user_id);
                return report(Verdict::Bad, Some(user_id), &reason);
            }
            Err(e) => {
                tracing::warn!("Error checking profile for {}: {}", user_id, e);
                return report(Verdict::Bad, Some(user_id), "Error checking account");
            }
        };
        if profile.is_banned {
            return report(Verdict::Bad, Some(user_id), "Account is banned");
        }

        let (status, reason) = self.check_friends(user_id).await;
        report(status, Some(user_id), reason)
    }

    async fn get_user_id(&self, username: &str) -> Option<u64> {
        match self.lookup_user_id(username).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Error looking up {}: {}", username, e);
                None
            }
        }
    }

    async fn lookup_user_id(&self, username: &str) -> CheckResult<Option<u64>> {
        let url = endpoint(&self.users_url, &["v1", "usernames", "users"])?;
        let resp = self
            .client
            .post(url)
            .header(header::ACCEPT, "application/json")
            .json(&UsernamesRequest {
                usernames: [username],
                exclude_banned_users: false,
            })
            .send()
            .await
            .map_err(CheckError::upstream(PLATFORM))?;

        if !resp.status().is_success() {
            tracing::warn!("API returned error {} for username: {}", resp.status(), username);
            return Ok(None);
        }

        let data: UsernamesResponse = resp
            .json()
            .await
            .map_err(CheckError::decode(PLATFORM))?;
        Ok(data.data.first().map(|m| m.id))
    }

    // Outer error is transport or decode, inner error is a non-success status.
    async fn get_profile(&self, user_id: u64) -> CheckResult<Result<UserProfile, StatusCode>> {
        let id = user_id.to_string();
        let url = endpoint(&self.users_url, &["v1", "users", &id])?;
        let resp = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(CheckError::upstream(PLATFORM))?;

        if !resp.status().is_success() {
            return Ok(Err(resp.status()));
        }
        let profile = resp
            .json()
            .await
            .map_err(CheckError::decode(PLATFORM))?;
        Ok(Ok(profile))
    }

    async fn check_friends(&self, user_id: u64) -> (Verdict, &'static str) {
        let id = user_id.to_string();
        let url = match endpoint(&self.friends_url, &["v1", "users", &id, "friends"]) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("{}", e);
                return classify_friends(None);
            }
        };

        match self.client.get(url).header(header::ACCEPT, "application/json").send().await {
            Ok(resp) => {
                if !resp.status().is_success() {
                    tracing::warn!("Friends API returned {} for user {}", resp.status(), user_id);
                }
                classify_friends(Some(resp.status()))
            }
            Err(e) => {
                tracing::warn!("Error checking friends for {}: {}", user_id, e);
                classify_friends(None)
            }
        }
    }
}

fn classify_friends(status: Option<StatusCode>) -> (Verdict, &'static str) {
    match status {
        Some(s) if s.is_success() => (Verdict::Good, "Account is active (verified)"),
        Some(StatusCode::FORBIDDEN) => (Verdict::Bad, "Account appears to be restricted"),
        // Anything else is inconclusive; the profile already looked fine.
        _ => (Verdict::Good, "Account appears to be active"),
    }
}
