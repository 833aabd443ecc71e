pub mod mojang_api;
pub mod reddit_api;
pub mod roblox_api;
pub mod steam_api;
pub mod tiktok_web;
pub mod twitter_api;
pub mod youtube_api;

use crate::config::Config;

/// One adapter per platform, all sharing a single connection pool.
pub struct Services {
    pub minecraft: mojang_api::MojangService,
    pub reddit: reddit_api::RedditService,
    pub roblox: roblox_api::RobloxService,
    pub steam: steam_api::SteamService,
    pub tiktok: tiktok_web::TikTokService,
    pub twitter: twitter_api::TwitterService,
    pub youtube: youtube_api::YouTubeService,
}

impl Services {
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            minecraft: mojang_api::MojangService::new(client.clone(), config.mojang_api_url.clone()),
            reddit: reddit_api::RedditService::new(client.clone(), config.reddit_url.clone()),
            roblox: roblox_api::RobloxService::new(
                client.clone(),
                config.roblox_users_url.clone(),
                config.roblox_friends_url.clone(),
            ),
            steam: steam_api::SteamService::new(
                client.clone(),
                config.steam_api_url.clone(),
                config.steam_api_key.clone(),
            ),
            tiktok: tiktok_web::TikTokService::new(client.clone(), config.tiktok_url.clone()),
            twitter: twitter_api::TwitterService::new(
                client.clone(),
                config.twitter_api_url.clone(),
                config.twitter_bearer_token.clone(),
            ),
            youtube: youtube_api::YouTubeService::new(
                client,
                config.youtube_api_url.clone(),
                config.youtube_api_key.clone(),
            ),
        }
    }
}
