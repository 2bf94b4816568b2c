//! Server configuration
//!
//! Read once at startup from shuttle secrets, with the process environment
//! as fallback.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::Context;
use hookcord::{CommitFetchConfig, Credentials, RenderProfile};

/// Query parameter overriding the target channel per request
pub const CHANNEL_QUERY_PARAM: &str = "discordChannelID";
/// Query parameter overriding the bot token per request
pub const TOKEN_QUERY_PARAM: &str = "discordBotToken";

pub const CHANNEL_ID_KEY: &str = "DISCORD_CHANNEL_ID";
pub const BOT_TOKEN_KEY: &str = "DISCORD_BOT_TOKEN";
pub const PROFILE_KEY: &str = "HOOKCORD_PROFILE";
pub const WEBHOOK_SECRET_KEY: &str = "GITHUB_WEBHOOK_SECRET";
pub const GITHUB_TOKEN_KEY: &str = "GITHUB_TOKEN";
pub const FETCH_TIMEOUT_KEY: &str = "COMMIT_FETCH_TIMEOUT_SECS";

#[derive(Clone)]
pub struct ServerConfig {
    pub profile: RenderProfile,
    /// Default channel when the request carries none
    pub channel_id: Option<String>,
    /// Default bot token when the request carries none
    pub bot_token: Option<String>,
    /// Enables `X-Hub-Signature-256` verification when set
    pub webhook_secret: Option<String>,
    pub fetch: CommitFetchConfig,
}

impl ServerConfig {
    /// Build from a key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let profile = match get(PROFILE_KEY) {
            Some(raw) => raw.parse::<RenderProfile>().map_err(anyhow::Error::msg)?,
            None => RenderProfile::default(),
        };

        let mut fetch = CommitFetchConfig {
            token: get(GITHUB_TOKEN_KEY),
            ..CommitFetchConfig::default()
        };
        if let Some(raw) = get(FETCH_TIMEOUT_KEY) {
            let secs: u64 = raw
                .parse()
                .with_context(|| format!("{} must be a number of seconds, got '{}'", FETCH_TIMEOUT_KEY, raw))?;
            fetch.timeout = Duration::from_secs(secs);
        }

        Ok(Self {
            profile,
            channel_id: get(CHANNEL_ID_KEY),
            bot_token: get(BOT_TOKEN_KEY),
            webhook_secret: get(WEBHOOK_SECRET_KEY),
            fetch,
        })
    }

    /// Query parameters take precedence over configured defaults.
    ///
    /// Returns `None` when either the channel or the token is missing.
    pub fn resolve_credentials(&self, params: &HashMap<String, String>) -> Option<Credentials> {
        let pick = |param: &str, fallback: &Option<String>| {
            params
                .get(param)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .or_else(|| fallback.clone())
        };

        let channel_id = pick(CHANNEL_QUERY_PARAM, &self.channel_id)?;
        let bot_token = pick(TOKEN_QUERY_PARAM, &self.bot_token)?;
        Some(Credentials::new(channel_id, bot_token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.profile, RenderProfile::Classic);
        assert_eq!(config.fetch.timeout, Duration::from_secs(5));
        assert!(config.webhook_secret.is_none());
        assert!(config.resolve_credentials(&HashMap::new()).is_none());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = ServerConfig::from_lookup(lookup(&[
            (PROFILE_KEY, "detailed"),
            (CHANNEL_ID_KEY, "111"),
            (BOT_TOKEN_KEY, "env-token"),
            (WEBHOOK_SECRET_KEY, "s3cret"),
            (GITHUB_TOKEN_KEY, "ghp_x"),
            (FETCH_TIMEOUT_KEY, "2"),
            ("UNRELATED", "x"),
        ]))
        .unwrap();

        assert_eq!(config.profile, RenderProfile::Detailed);
        assert_eq!(config.webhook_secret.as_deref(), Some("s3cret"));
        assert_eq!(config.fetch.token.as_deref(), Some("ghp_x"));
        assert_eq!(config.fetch.timeout, Duration::from_secs(2));
        assert_eq!(
            config.resolve_credentials(&HashMap::new()),
            Some(Credentials::new("111", "env-token"))
        );
    }

    #[test]
    fn test_invalid_values_are_startup_errors() {
        assert!(ServerConfig::from_lookup(lookup(&[(PROFILE_KEY, "fancy")])).is_err());
        assert!(ServerConfig::from_lookup(lookup(&[(FETCH_TIMEOUT_KEY, "soon")])).is_err());
    }

    #[test]
    fn test_query_params_override_config() {
        let config = ServerConfig::from_lookup(lookup(&[
            (CHANNEL_ID_KEY, "111"),
            (BOT_TOKEN_KEY, "env-token"),
        ]))
        .unwrap();

        let mut params = HashMap::new();
        params.insert(CHANNEL_QUERY_PARAM.to_string(), "222".to_string());
        params.insert(TOKEN_QUERY_PARAM.to_string(), " ".to_string());

        assert_eq!(
            config.resolve_credentials(&params),
            Some(Credentials::new("222", "env-token"))
        );
    }
}
