use serde::Deserialize;
use crate::error::{CheckError, CheckResult};
use crate::models::steam::{SteamBanReport, SteamCheck};
use crate::models::{StatusReport, Verdict};
use crate::utils::SteamInput;

const PLATFORM: &str = "Steam";

#[derive(Debug, Deserialize)]
struct VanityResponse {
    response: Option<VanityData>,
}

#[derive(Debug, Deserialize)]
struct VanityData {
    success: i32,
    steamid: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PlayerBansResponse {
    #[serde(default)]
    players: Vec<PlayerBans>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PlayerBans {
    steam_id: String,
    community_banned: bool,
    #[serde(rename = "VACBanned")]
    vac_banned: bool,
    #[serde(rename = "NumberOfVACBans")]
    number_of_vac_bans: u32,
    days_since_last_ban: u32,
    number_of_game_bans: u32,
    economy_ban: String,
}

impl From<PlayerBans> for SteamBanReport {
    fn from(p: PlayerBans) -> Self {
        let banned = p.vac_banned || p.community_banned || p.number_of_game_bans > 0;
        SteamBanReport {
            steam_id: p.steam_id,
            community_banned: p.community_banned,
            vac_banned: p.vac_banned,
            number_of_vac_bans: p.number_of_vac_bans,
            days_since_last_ban: p.days_since_last_ban,
            number_of_game_bans: p.number_of_game_bans,
            economy_ban: p.economy_ban,
            status: Verdict::from_good(!banned),
        }
    }
}

pub struct SteamService {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl SteamService {
    pub fn new(client: reqwest::Client, base_url: String, api_key: Option<String>) -> Self {
        Self { client, base_url, api_key }
    }

    fn key(&self) -> CheckResult<&str> {
        self.api_key
            .as_deref()
            .ok_or(CheckError::MissingCredential("Steam API key"))
    }

    /// Resolves the input to a SteamID64 if needed, then reports its ban record.
    pub async fn check(&self, input: &SteamInput) -> CheckResult<SteamCheck> {
        let key = self.key()?;

        let steam_id = match input {
            SteamInput::SteamId64(id) => id.clone(),
            SteamInput::Vanity(vanity) => match self.resolve_vanity(key, vanity).await? {
                Some(id) => id,
                None => {
                    return Ok(SteamCheck::Unresolved(StatusReport::bad(
                        "User not found or invalid vanity URL",
                    )))
                }
            },
        };

        match self.get_player_bans(key, &steam_id).await? {
            Some(player) => Ok(SteamCheck::Report(player.into())),
            None => Ok(SteamCheck::Unresolved(StatusReport::bad(
                "Could not retrieve ban status for the user.",
            ))),
        }
    }

    async fn resolve_vanity(&self, key: &str, vanity: &str) -> CheckResult<Option<String>> {
        let url = format!("{}/ISteamUser/ResolveVanityURL/v1/", self.base_url);

        let data: VanityResponse = self
            .client
            .get(&url)
            .query(&[("key", key), ("vanityurl", vanity)])
            .send()
            .await
            .map_err(CheckError::upstream(PLATFORM))?
            .json()
            .await
            .map_err(CheckError::decode(PLATFORM))?;

        Ok(data
            .response
            .filter(|r| r.success == 1)
            .and_then(|r| r.steamid))
    }

    async fn get_player_bans(&self, key: &str, steam_id: &str) -> CheckResult<Option<PlayerBans>> {
        let url = format!("{}/ISteamUser/GetPlayerBans/v1/", self.base_url);

        let data: PlayerBansResponse = self
            .client
            .get(&url)
            .query(&[("key", key), ("steamids", steam_id)])
            .send()
            .await
            .map_err(CheckError::upstream(PLATFORM))?
            .json()
            .await
            .map_err(CheckError::decode(PLATFORM))?;

        Ok(data.players.into_iter().next())
    }
}
