use remind_core::{Announcement, ReminderNotificationConfig, RiskBucket};
use serde::{Deserialize, Serialize};

/// Validated notification settings snapshot.
///
/// Produced by [`crate::parse::parse_settings`], cached by
/// [`crate::store::SettingsStore`], and replaced wholesale (never merged) on
/// each successful refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Link to the list of testing locations shown alongside exposure alerts.
    pub test_locations_link: String,
    /// Announcements that survived element-wise validation, original order.
    pub announcements: Vec<Announcement>,
    /// Risk buckets sorted by `min_risk_score` ascending.
    pub risk_buckets: Vec<RiskBucket>,
    /// Whether the "request a callback" flow is offered at all.
    pub callback_enabled: bool,
    /// Cadence for diary reminders; the disabled default when the server
    /// omits the field or sends an invalid one.
    pub reminder_config: ReminderNotificationConfig,
}

impl NotificationSettings {
    /// Announcements the UI should actually surface.
    pub fn enabled_announcements(&self) -> impl Iterator<Item = &Announcement> {
        self.announcements.iter().filter(|a| a.enabled)
    }
}
