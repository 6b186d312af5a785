use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for a scheduled reminder, local or in-app.
///
/// Ids are derived from the occurrence index, not generated randomly —
/// rescheduling with unchanged input must reissue the *same* ids so the
/// schedule is replaced rather than duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderId(pub String);

impl ReminderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ReminderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// When and with what content a local notification should fire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiringRule {
    pub fire_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
}

/// A banner rendered inside the application, distinct from an OS-level
/// notification. Derived from the same cadence config as the local schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InAppReminder {
    pub id: ReminderId,
    pub show_at: DateTime<Utc>,
    pub message: String,
}

/// One computed reminder occurrence; the source of both the local
/// notification and the in-app banner for that slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderOccurrence {
    /// 1-based slot number within the schedule.
    pub index: u32,
    pub fire_at: DateTime<Utc>,
}

impl ReminderOccurrence {
    pub fn local_id(&self) -> ReminderId {
        ReminderId(format!("diary-reminder-{}", self.index))
    }

    pub fn in_app_id(&self) -> ReminderId {
        ReminderId(format!("in-app-reminder-{}", self.index))
    }
}
