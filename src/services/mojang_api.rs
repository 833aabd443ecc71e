use reqwest::StatusCode;
use serde::Deserialize;
use crate::error::{CheckError, CheckResult};
use crate::models::minecraft::{ChangedAt, MinecraftProfile, NameChange};
use crate::models::Verdict;
use crate::utils::endpoint;

const PLATFORM: &str = "Minecraft";

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    id: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct NameEntry {
    name: String,
    #[serde(rename = "changedToAt")]
    changed_to_at: Option<i64>,
}

pub struct MojangService {
    client: reqwest::Client,
    base_url: String,
}

impl MojangService {
    pub fn new(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// `None` means the name is not registered (Mojang answers 204 or an error status).
    pub async fn lookup(&self, username: &str) -> CheckResult<Option<MinecraftProfile>> {
        let url = endpoint(&self.base_url, &["users", "profiles", "minecraft", username])?;
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(CheckError::upstream(PLATFORM))?;

        if resp.status() == StatusCode::NO_CONTENT || !resp.status().is_success() {
            return Ok(None);
        }

        let profile: ProfileResponse = resp
            .json()
            .await
            .map_err(CheckError::decode(PLATFORM))?;

        let name_history = match self.name_history(&profile.id).await {
            Some(entries) => shape_history(entries),
            None => vec![NameChange {
                name: profile.name.clone(),
                changed_to_at: ChangedAt::original(),
            }],
        };

        Ok(Some(MinecraftProfile {
            status: Verdict::Good,
            username: profile.name,
            uuid: profile.id,
            name_history,
        }))
    }

    // Mojang retired this endpoint; treat any failure as "no history available".
    async fn name_history(&self, uuid: &str) -> Option<Vec<NameEntry>> {
        let url = endpoint(&self.base_url, &["user", "profiles", uuid, "names"]).ok()?;
        let resp = match self.client.get(url).send().await {
            Ok(resp) if resp.status().is_success() => resp,
            Ok(resp) => {
                tracing::debug!("Name history for {} returned {}", uuid, resp.status());
                return None;
            }
            Err(e) => {
                tracing::warn!("Name history request for {} failed: {}", uuid, e);
                return None;
            }
        };

        match resp.json::<Vec<NameEntry>>().await {
            Ok(entries) if !entries.is_empty() => Some(entries),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Unreadable name history for {}: {}", uuid, e);
                None
            }
        }
    }
}

fn shape_history(entries: Vec<NameEntry>) -> Vec<NameChange> {
    entries
        .into_iter()
        .rev()
        .map(|entry| NameChange {
            name: entry.name,
            changed_to_at: entry
                .changed_to_at
                .map(ChangedAt::Timestamp)
                .unwrap_or_else(ChangedAt::original),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_reversed_and_first_name_labelled() {
        let entries: Vec<NameEntry> = serde_json::from_value(serde_json::json!([
            { "name": "first" },
            { "name": "second", "changedToAt": 1423059891000_i64 }
        ]))
        .unwrap();

        let history = shape_history(entries);
        assert_eq!(history[0].name, "second");
        assert_eq!(history[0].changed_to_at, ChangedAt::Timestamp(1423059891000));
        assert_eq!(history[1].name, "first");
        assert_eq!(history[1].changed_to_at, ChangedAt::original());
    }
}
