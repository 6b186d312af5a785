use remind_core::{Announcement, ReminderNotificationConfig, RiskBucket};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::Result;
use crate::types::NotificationSettings;

/// Wire shape of the settings payload. Every field may be absent — absence
/// means "use default", never a fetch error. The two loosely-typed fields
/// (`announcements`, `reminderNotificationConfig`) stay as raw JSON here and
/// go through their own contained validation below.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSettings {
    #[serde(default)]
    test_locations_link: String,
    #[serde(default)]
    announcements: Option<Value>,
    #[serde(default)]
    configurations: Vec<RiskBucket>,
    #[serde(default)]
    callback_enabled: bool,
    #[serde(default)]
    reminder_notification_config: Option<Value>,
}

/// Parse and validate a settings payload.
///
/// A malformed top-level payload (or a malformed `configurations` array — the
/// risk buckets are the one field the engine cannot safely default) is an
/// error. Everything below top level is contained: announcements are dropped
/// element-wise, the cadence config falls back to disabled.
pub fn parse_settings(payload: Value) -> Result<NotificationSettings> {
    let raw: RawSettings = serde_json::from_value(payload)?;

    let mut risk_buckets = raw.configurations;
    // Classification scans first-match in ascending min order; sorting on
    // ingest keeps that deterministic even for out-of-order payloads.
    risk_buckets.sort_by_key(|b| b.min_risk_score);

    Ok(NotificationSettings {
        test_locations_link: raw.test_locations_link,
        announcements: parse_announcements(raw.announcements),
        risk_buckets,
        callback_enabled: raw.callback_enabled,
        reminder_config: validate_reminder_config(raw.reminder_notification_config),
    })
}

/// Validate announcements element-wise, preserving order.
///
/// Nulls and entries that fail the schema are dropped individually — one bad
/// announcement never invalidates the batch. A present-but-non-array field
/// yields the empty list.
pub fn parse_announcements(payload: Option<Value>) -> Vec<Announcement> {
    let Some(value) = payload else {
        return Vec::new();
    };
    let Value::Array(entries) = value else {
        warn!("announcements field is not an array; ignoring");
        return Vec::new();
    };

    entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            if entry.is_null() {
                return None;
            }
            match serde_json::from_value::<Announcement>(entry) {
                Ok(a) => Some(a),
                Err(e) => {
                    warn!(index, reason = %e, "dropping malformed announcement");
                    None
                }
            }
        })
        .collect()
}

/// Validate the reminder cadence config, falling back to the safe disabled
/// default on any failure. Absence is not logged — a server that simply does
/// not configure reminders is normal.
pub fn validate_reminder_config(payload: Option<Value>) -> ReminderNotificationConfig {
    let Some(value) = payload else {
        return ReminderNotificationConfig::default();
    };

    let config = match serde_json::from_value::<ReminderNotificationConfig>(value) {
        Ok(c) => c,
        Err(e) => {
            warn!(reason = %e, "malformed reminderNotificationConfig; reminders disabled");
            return ReminderNotificationConfig::default();
        }
    };

    if let Err(reason) = config.validate() {
        warn!(%reason, "invalid reminderNotificationConfig; reminders disabled");
        return ReminderNotificationConfig::default();
    }

    config
}
