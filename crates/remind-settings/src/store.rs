use std::sync::{Arc, RwLock};
use std::time::Duration;

use remind_core::EngineConfig;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::Result;
use crate::parse::parse_settings;
use crate::types::NotificationSettings;

/// Process-wide cache of the remote notification settings.
///
/// Single-writer discipline: refreshes replace the snapshot wholesale on
/// success and leave it untouched on any failure — no partial overwrite.
/// Readers get an `Arc` snapshot, so a reschedule that starts mid-refresh
/// still works from one consistent settings object.
pub struct SettingsStore {
    cached: RwLock<Option<Arc<NotificationSettings>>>,
}

impl SettingsStore {
    pub fn new() -> Self {
        Self {
            cached: RwLock::new(None),
        }
    }

    /// Refresh using the engine's own configuration: builds a client with
    /// the configured request timeout and fetches from `server_url`.
    pub async fn refresh_with(&self, config: &EngineConfig) -> Result<Arc<NotificationSettings>> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        self.refresh(&client, &config.server_url).await
    }

    /// Fetch `{base_url}/settings/notification`, validate, and swap the cache.
    ///
    /// Transport errors, non-2xx statuses, and a malformed top-level payload
    /// all surface as [`crate::SettingsError`] with the previous snapshot
    /// intact.
    pub async fn refresh(
        &self,
        client: &reqwest::Client,
        base_url: &str,
    ) -> Result<Arc<NotificationSettings>> {
        let url = format!("{}/settings/notification", base_url.trim_end_matches('/'));
        debug!(%url, "refreshing notification settings");

        let payload: Value = client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        self.install(payload)
    }

    /// Validate a raw payload and, on success, atomically replace the cache.
    ///
    /// Split out from [`refresh`](Self::refresh) so hosts with their own
    /// transport (and tests) can feed payloads in directly.
    pub fn install(&self, payload: Value) -> Result<Arc<NotificationSettings>> {
        let settings = Arc::new(parse_settings(payload)?);

        let mut cached = self.cached.write().expect("settings cache poisoned");
        *cached = Some(Arc::clone(&settings));
        info!(
            buckets = settings.risk_buckets.len(),
            announcements = settings.announcements.len(),
            reminders_configured = settings.reminder_config.enabled,
            "notification settings updated"
        );
        Ok(settings)
    }

    /// Snapshot read of the current settings; `None` until the first
    /// successful refresh.
    pub fn current(&self) -> Option<Arc<NotificationSettings>> {
        self.cached.read().expect("settings cache poisoned").clone()
    }
}

impl Default for SettingsStore {
    fn default() -> Self {
        Self::new()
    }
}
