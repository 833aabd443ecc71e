use std::env;
use std::time::Duration;

/// Runtime settings, read once from the environment (after `.env` is loaded).
///
/// Upstream base URLs are overridable so the handlers can be pointed at a
/// local stand-in; credentials are optional and their absence is reported on
/// the request that needs them.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub http_timeout: Duration,

    pub steam_api_key: Option<String>,
    pub twitter_bearer_token: Option<String>,
    pub youtube_api_key: Option<String>,

    pub mojang_api_url: String,
    pub reddit_url: String,
    pub roblox_users_url: String,
    pub roblox_friends_url: String,
    pub steam_api_url: String,
    pub tiktok_url: String,
    pub twitter_api_url: String,
    pub youtube_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 3000,
            http_timeout: Duration::from_secs(15),
            steam_api_key: None,
            twitter_bearer_token: None,
            youtube_api_key: None,
            mojang_api_url: "https://api.mojang.com".to_string(),
            reddit_url: "https://www.reddit.com".to_string(),
            roblox_users_url: "https://users.roblox.com".to_string(),
            roblox_friends_url: "https://friends.roblox.com".to_string(),
            steam_api_url: "https://api.steampowered.com".to_string(),
            tiktok_url: "https://www.tiktok.com".to_string(),
            twitter_api_url: "https://api.twitter.com".to_string(),
            youtube_api_url: "https://www.googleapis.com".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let server_port = match env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid SERVER_PORT {:?}", raw);
                defaults.server_port
            }),
            Err(_) => defaults.server_port,
        };

        let http_timeout = env::var("HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.http_timeout);

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port,
            http_timeout,
            steam_api_key: secret("STEAM_API_KEY"),
            twitter_bearer_token: secret("TWITTER_BEARER_TOKEN"),
            youtube_api_key: secret("YOUTUBE_API_KEY"),
            mojang_api_url: base_url("MOJANG_API_URL", defaults.mojang_api_url),
            reddit_url: base_url("REDDIT_URL", defaults.reddit_url),
            roblox_users_url: base_url("ROBLOX_USERS_URL", defaults.roblox_users_url),
            roblox_friends_url: base_url("ROBLOX_FRIENDS_URL", defaults.roblox_friends_url),
            steam_api_url: base_url("STEAM_API_URL", defaults.steam_api_url),
            tiktok_url: base_url("TIKTOK_URL", defaults.tiktok_url),
            twitter_api_url: base_url("TWITTER_API_URL", defaults.twitter_api_url),
            youtube_api_url: base_url("YOUTUBE_API_URL", defaults.youtube_api_url),
        }
    }

    /// Every upstream pointed at the same base, as used by the integration tests.
    pub fn with_upstream(base: &str) -> Self {
        let base = base.trim_end_matches('/').to_string();
        Self {
            mojang_api_url: base.clone(),
            reddit_url: base.clone(),
            roblox_users_url: base.clone(),
            roblox_friends_url: base.clone(),
            steam_api_url: base.clone(),
            tiktok_url: base.clone(),
            twitter_api_url: base.clone(),
            youtube_api_url: base,
            ..Self::default()
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

// Empty values count as unset so a blank line in `.env` doesn't pass as a key.
fn secret(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn base_url(key: &str, default: String) -> String {
    env::var(key)
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_upstream_strips_trailing_slash() {
        let config = Config::with_upstream("http://127.0.0.1:9000/");
        assert_eq!(config.steam_api_url, "http://127.0.0.1:9000");
        assert_eq!(config.roblox_friends_url, "http://127.0.0.1:9000");
        assert!(config.steam_api_key.is_none());
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = Config::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
