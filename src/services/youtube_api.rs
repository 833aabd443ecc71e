use serde::Deserialize;
use crate::error::{CheckError, CheckResult};
use crate::utils::ChannelQuery;

const PLATFORM: &str = "YouTube";

#[derive(Debug, Deserialize)]
struct ChannelListResponse {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

pub struct YouTubeService {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl YouTubeService {
    pub fn new(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        Self { client, base_url, api_key }
    }

    fn key(&self) -> CheckResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(CheckError::MissingCredential("YouTube API key"))
    }

    pub fn ensure_configured(&self) -> CheckResult<()> {
        self.key().map(|_| ())
    }

    /// True when the channel exists. A handle that finds nothing is retried
    /// once as a legacy username, since older channels only resolve that way.
    pub async fn channel_exists(&self, query: &ChannelQuery) -> CheckResult<bool> {
        let key = self.key()?;

        if self.has_items(key, query).await? {
            return Ok(true);
        }

        if let ChannelQuery::Handle(handle) = query {
            let legacy = ChannelQuery::Username(handle.clone());
            return self.has_items(key, &legacy).await;
        }

        Ok(false)
    }

    async fn has_items(&self, key: &str, query: &ChannelQuery) -> CheckResult<bool> {
        let url = format!("{}/youtube/v3/channels", self.base_url);
        let (param, value) = query.param();

        let data: ChannelListResponse = self
            .client
            .get(&url)
            .query(&[("part", "id"), (param, value), ("key", key)])
            .send()
            .await
            .map_err(CheckError::upstream(PLATFORM))?
            .json()
            .await
            .map_err(CheckError::decode(PLATFORM))?;

        Ok(!data.items.is_empty())
    }
}
