use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVER_URL: &str = "https://exposure-notification.example.org";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Engine-local configuration (remind.toml + REMIND_* env overrides).
///
/// This is the *local* config of the engine itself — where to fetch the
/// remote notification settings from — not the remote settings payload,
/// which lives in `remind-settings`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base URL of the settings endpoint; the engine GETs
    /// `{server_url}/settings/notification`.
    #[serde(default = "default_server_url")]
    pub server_url: String,
    /// Timeout applied to each settings fetch.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl EngineConfig {
    /// Load config from a TOML file with REMIND_* env var overrides.
    ///
    /// Missing file or fields fall back to defaults; only a malformed file or
    /// override value is an error.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path.unwrap_or("remind.toml");

        let config: EngineConfig = Figment::from(Serialized::defaults(EngineConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("REMIND_"))
            .extract()
            .map_err(|e| crate::error::CoreError::Config(e.to_string()))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        figment::Jail::expect_with(|_jail| {
            let config = EngineConfig::load(None).unwrap();
            assert_eq!(config.server_url, DEFAULT_SERVER_URL);
            assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
            Ok(())
        });
    }

    #[test]
    fn env_override_wins() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("REMIND_SERVER_URL", "https://staging.example.org");
            jail.set_env("REMIND_REQUEST_TIMEOUT_SECS", "30");
            let config = EngineConfig::load(None).unwrap();
            assert_eq!(config.server_url, "https://staging.example.org");
            assert_eq!(config.request_timeout_secs, 30);
            Ok(())
        });
    }

    #[test]
    fn toml_file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "remind.toml",
                r#"
                server_url = "https://config.example.org"
                "#,
            )?;
            let config = EngineConfig::load(None).unwrap();
            assert_eq!(config.server_url, "https://config.example.org");
            // Unset field keeps its default.
            assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
            Ok(())
        });
    }
}
