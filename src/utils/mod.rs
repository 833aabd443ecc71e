use regex::Regex;
use reqwest::Url;
use std::sync::LazyLock;
use crate::error::{CheckError, CheckResult};

pub const MINECRAFT_MAX_USERNAME_LEN: usize = 16;

static STEAM_ID_64: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{17}$").expect("static regex"));

static TIKTOK_USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_.-]+$").expect("static regex"));

/// A Steam identifier after the profile URL (if any) has been peeled off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SteamInput {
    SteamId64(String),
    Vanity(String),
}

pub fn is_steam_id_64(value: &str) -> bool {
    STEAM_ID_64.is_match(value)
}

/// Accepts a raw SteamID64, a `steamcommunity.com/profiles/<id>` or
/// `steamcommunity.com/id/<vanity>` URL (scheme optional), or a bare vanity name.
pub fn parse_steam_input(raw: &str) -> Option<SteamInput> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }

    if is_steam_id_64(value) {
        return Some(SteamInput::SteamId64(value.to_string()));
    }

    let candidate = if value.starts_with("http") {
        value.to_string()
    } else {
        format!("https://{}", value)
    };

    if let Ok(url) = Url::parse(&candidate) {
        let host = url.host_str().unwrap_or_default();
        let host = host.strip_prefix("www.").unwrap_or(host);
        if host.eq_ignore_ascii_case("steamcommunity.com") {
            let parts: Vec<&str> = url
                .path_segments()
                .map(|segments| segments.filter(|s| !s.is_empty()).collect())
                .unwrap_or_default();

            match parts.as_slice() {
                ["profiles", id, ..] if is_steam_id_64(id) => {
                    return Some(SteamInput::SteamId64(id.to_string()));
                }
                ["id", vanity, ..] => return Some(SteamInput::Vanity(vanity.to_string())),
                _ => {}
            }
        }
    }

    Some(SteamInput::Vanity(value.to_string()))
}

/// Which `channels.list` filter a YouTube identifier maps onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelQuery {
    Handle(String),
    Id(String),
    Username(String),
}

impl ChannelQuery {
    pub fn param(&self) -> (&'static str, &str) {
        match self {
            ChannelQuery::Handle(h) => ("forHandle", h),
            ChannelQuery::Id(id) => ("id", id),
            ChannelQuery::Username(u) => ("forUsername", u),
        }
    }
}

/// Reduces a channel URL, `@handle`, channel ID or legacy custom name to the
/// query the Data API understands. Only the last path segment is considered.
pub fn parse_channel_input(raw: &str) -> Option<ChannelQuery> {
    let last = raw.trim().rsplit('/').next().unwrap_or_default();
    let cleaned = last.split('?').next().unwrap_or_default();

    if let Some(handle) = cleaned.strip_prefix('@') {
        if handle.is_empty() {
            return None;
        }
        return Some(ChannelQuery::Handle(handle.to_string()));
    }
    if cleaned.is_empty() {
        return None;
    }
    if cleaned.starts_with("UC") || cleaned.starts_with("HC") {
        Some(ChannelQuery::Id(cleaned.to_string()))
    } else {
        Some(ChannelQuery::Username(cleaned.to_string()))
    }
}

pub fn is_valid_tiktok_username(username: &str) -> bool {
    TIKTOK_USERNAME.is_match(username)
}

/// Drops the leading `@` people paste with Twitter and TikTok handles.
pub fn strip_at(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('@').unwrap_or(trimmed)
}

/// Appends `segments` to `base`, percent-encoding each one, so user input
/// can never escape its path position.
pub fn endpoint(base: &str, segments: &[&str]) -> CheckResult<Url> {
    let mut url = Url::parse(base).map_err(|e| CheckError::Config(format!("{}: {}", base, e)))?;
    url.path_segments_mut()
        .map_err(|_| CheckError::Config(base.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Newline-separated batch input, trimmed, blanks dropped.
pub fn split_identifiers(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steam_raw_id() {
        assert_eq!(
            parse_steam_input(" 76561197960287930 "),
            Some(SteamInput::SteamId64("76561197960287930".into()))
        );
    }

    #[test]
    fn steam_short_number_is_vanity() {
        assert_eq!(
            parse_steam_input("1234567"),
            Some(SteamInput::Vanity("1234567".into()))
        );
    }

    #[test]
    fn steam_profile_urls() {
        assert_eq!(
            parse_steam_input("https://steamcommunity.com/profiles/76561197960287930/"),
            Some(SteamInput::SteamId64("76561197960287930".into()))
        );
        assert_eq!(
            parse_steam_input("www.steamcommunity.com/id/gabelogannewell"),
            Some(SteamInput::Vanity("gabelogannewell".into()))
        );
    }

    #[test]
    fn steam_profiles_url_with_bad_id_falls_back_to_whole_input() {
        let raw = "https://steamcommunity.com/profiles/123";
        assert_eq!(parse_steam_input(raw), Some(SteamInput::Vanity(raw.into())));
    }

    #[test]
    fn steam_blank_is_none() {
        assert_eq!(parse_steam_input("   "), None);
    }

    #[test]
    fn youtube_inputs() {
        assert_eq!(
            parse_channel_input("https://www.youtube.com/@MrBeast"),
            Some(ChannelQuery::Handle("MrBeast".into()))
        );
        assert_eq!(
            parse_channel_input("https://www.youtube.com/channel/UCX6OQ3DkcsbYNE6H8uQQuVA?view=1"),
            Some(ChannelQuery::Id("UCX6OQ3DkcsbYNE6H8uQQuVA".into()))
        );
        assert_eq!(
            parse_channel_input("PewDiePie"),
            Some(ChannelQuery::Username("PewDiePie".into()))
        );
        assert_eq!(parse_channel_input("https://www.youtube.com/"), None);
        assert_eq!(parse_channel_input("@"), None);
    }

    #[test]
    fn channel_query_param_names() {
        assert_eq!(ChannelQuery::Handle("a".into()).param(), ("forHandle", "a"));
        assert_eq!(ChannelQuery::Id("UCa".into()).param(), ("id", "UCa"));
        assert_eq!(ChannelQuery::Username("b".into()).param(), ("forUsername", "b"));
    }

    #[test]
    fn tiktok_usernames() {
        assert!(is_valid_tiktok_username("some.user_name-1"));
        assert!(!is_valid_tiktok_username("has space"));
        assert!(!is_valid_tiktok_username(""));
        assert!(!is_valid_tiktok_username("@handle"));
    }

    #[test]
    fn at_prefix_is_stripped() {
        assert_eq!(strip_at("@jack"), "jack");
        assert_eq!(strip_at(" jack "), "jack");
        assert_eq!(strip_at("@charli.d"), "charli.d");
    }

    #[test]
    fn endpoint_encodes_segments() {
        let url = endpoint("https://www.reddit.com", &["user", "a/b c", "about.json"]).unwrap();
        assert_eq!(url.as_str(), "https://www.reddit.com/user/a%2Fb%20c/about.json");

        let url = endpoint("http://127.0.0.1:8080/base", &["x"]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/base/x");
    }

    #[test]
    fn endpoint_rejects_garbage_base() {
        assert!(endpoint("not a url", &["x"]).is_err());
    }

    #[test]
    fn batch_lines() {
        let ids = split_identifiers("alice\r\n\n  bob  \n\n");
        assert_eq!(ids, vec!["alice".to_string(), "bob".to_string()]);
    }
}
