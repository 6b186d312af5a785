use async_trait::async_trait;
use tracing::warn;

use crate::error::Result;
use crate::types::{FiringRule, InAppReminder, ReminderId};

/// The device notification primitive.
///
/// The engine only computes *what* and *when*; delivery is owned by the host
/// (OS notification APIs on device, fakes in tests).
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Schedule (or replace, for an already-known id) a local notification.
    async fn schedule(&self, id: &ReminderId, rule: &FiringRule) -> Result<()>;

    /// Cancel a single scheduled notification.
    async fn cancel(&self, id: &ReminderId) -> Result<()>;

    /// Cancel a batch, best-effort: one id's failure is logged and the rest
    /// are still cancelled. Hosts with a native bulk-cancel may override.
    async fn cancel_all(&self, ids: &[ReminderId]) {
        for id in ids {
            if let Err(e) = self.cancel(id).await {
                warn!(id = %id, reason = %e, "cancel failed; continuing with remaining ids");
            }
        }
    }
}

/// The in-app reminder list and its currently displayed banner.
#[async_trait]
pub trait InAppReminderPort: Send + Sync {
    /// Replace the scheduled in-app reminder list wholesale.
    async fn set(&self, reminders: Vec<InAppReminder>);

    /// Dismiss the banner currently on screen, if any.
    async fn dismiss_active(&self);
}

/// Durable storage for the user's enabled/disabled choice.
#[async_trait]
pub trait EnabledFlagStore: Send + Sync {
    /// Read the persisted flag at app start.
    async fn load(&self) -> bool;

    /// Persist the flag; called on every completed transition.
    async fn store(&self, enabled: bool);
}
