use std::sync::Arc;

use chrono::{DateTime, Utc};
use remind_core::ReminderNotificationConfig;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::ports::{InAppReminderPort, NotificationPort};
use crate::schedule::compute_occurrences;
use crate::types::{FiringRule, InAppReminder, ReminderId};

/// Identifiers issued by a successful reschedule, reported back to the state
/// machine. The scheduler itself keeps no durable state.
#[derive(Debug, Clone, Default)]
pub struct IssuedReminders {
    pub local: Vec<ReminderId>,
    pub in_app: Vec<ReminderId>,
}

/// Orchestrates cancel-all / reschedule-all against the notification
/// primitive and the in-app reminder list.
pub struct ReminderScheduler {
    notifications: Arc<dyn NotificationPort>,
    in_app: Arc<dyn InAppReminderPort>,
}

impl ReminderScheduler {
    pub fn new(notifications: Arc<dyn NotificationPort>, in_app: Arc<dyn InAppReminderPort>) -> Self {
        Self {
            notifications,
            in_app,
        }
    }

    /// Tear down everything scheduled.
    ///
    /// Order matters: local notifications first, then the in-app list, then
    /// the active banner — a banner must never be left referencing a
    /// still-scheduled notification. Cancellation is best-effort per id.
    pub async fn cancel_all(&self, ids: &[ReminderId]) {
        debug!(count = ids.len(), "cancelling scheduled reminders");
        self.notifications.cancel_all(ids).await;
        self.in_app.set(Vec::new()).await;
        self.in_app.dismiss_active().await;
    }

    /// Recompute the full occurrence set from `config` and schedule it,
    /// replacing `prior` rather than appending. The in-app list is derived
    /// from the same occurrences, so both surfaces always agree.
    ///
    /// Idempotent: identical `(config, now)` reissues the identical ids.
    /// On a schedule failure everything issued so far is rolled back — ids
    /// cancelled, in-app list cleared, active banner dismissed, the same
    /// teardown as [`cancel_all`](Self::cancel_all) — and the error
    /// propagates so the caller aborts the enable transition.
    pub async fn reschedule_all(
        &self,
        prior: &[ReminderId],
        config: &ReminderNotificationConfig,
        now: DateTime<Utc>,
    ) -> Result<IssuedReminders> {
        let occurrences = compute_occurrences(config, now);

        // Replace semantics: clear the previous schedule before issuing the
        // new one (ids are deterministic, so stale ids beyond the new count
        // would otherwise linger when the cadence shrinks).
        self.notifications.cancel_all(prior).await;

        let mut local = Vec::with_capacity(occurrences.len());
        for occurrence in &occurrences {
            let id = occurrence.local_id();
            let rule = FiringRule {
                fire_at: occurrence.fire_at,
                title: config.notification_title.clone(),
                body: config.notification_body.clone(),
            };
            if let Err(e) = self.notifications.schedule(&id, &rule).await {
                error!(id = %id, reason = %e, "reschedule failed; rolling back issued ids");
                // Full teardown: the state settles disabled, so the banner
                // must go too, same order as cancel_all.
                self.notifications.cancel_all(&local).await;
                self.in_app.set(Vec::new()).await;
                self.in_app.dismiss_active().await;
                return Err(e);
            }
            local.push(id);
        }

        let reminders: Vec<InAppReminder> = occurrences
            .iter()
            .map(|o| InAppReminder {
                id: o.in_app_id(),
                show_at: o.fire_at,
                message: config.notification_body.clone(),
            })
            .collect();
        let in_app = reminders.iter().map(|r| r.id.clone()).collect();
        self.in_app.set(reminders).await;

        info!(scheduled = local.len(), "reminders rescheduled");
        Ok(IssuedReminders { local, in_app })
    }
}
