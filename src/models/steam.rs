use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use super::{StatusReport, Verdict};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SteamBanReport {
    pub steam_id: String,
    pub community_banned: bool,
    pub vac_banned: bool,
    #[serde(rename = "numberOfVACBans")]
    pub number_of_vac_bans: u32,
    pub days_since_last_ban: u32,
    pub number_of_game_bans: u32,
    pub economy_ban: String,
    pub status: Verdict,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum SteamCheck {
    Report(SteamBanReport),
    Unresolved(StatusReport),
}
