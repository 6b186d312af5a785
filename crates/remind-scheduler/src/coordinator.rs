use std::sync::Arc;

use chrono::Utc;
use remind_settings::SettingsStore;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::error::Result;
use crate::ports::EnabledFlagStore;
use crate::scheduler::ReminderScheduler;
use crate::state::ReminderStateMachine;

/// Drives the state machine and scheduler in response to external signals:
/// a user toggle, a settings refresh, or app start.
///
/// The visible enabled flag flips optimistically so the UI reflects intent
/// immediately; the side-effect phase runs behind `gate`, so cancel and
/// reschedule for the flag are strictly serialized and a queued toggle acts
/// on the latest desired target rather than replaying stale requests.
pub struct ToggleCoordinator {
    state: Arc<ReminderStateMachine>,
    scheduler: ReminderScheduler,
    settings: Arc<SettingsStore>,
    flag: Arc<dyn EnabledFlagStore>,
    gate: Mutex<()>,
}

impl ToggleCoordinator {
    pub fn new(
        state: Arc<ReminderStateMachine>,
        scheduler: ReminderScheduler,
        settings: Arc<SettingsStore>,
        flag: Arc<dyn EnabledFlagStore>,
    ) -> Self {
        Self {
            state,
            scheduler,
            settings,
            flag,
            gate: Mutex::new(()),
        }
    }

    pub fn state(&self) -> &ReminderStateMachine {
        &self.state
    }

    /// App-start entry point: adopt the persisted flag and, when enabled,
    /// rebuild the schedule so reminders survive a restart.
    pub async fn bootstrap(&self) -> Result<bool> {
        let enabled = self.flag.load().await;
        info!(enabled, "reminder engine starting from persisted flag");
        self.state.set_enabled(enabled);
        if !enabled {
            return Ok(false);
        }
        self.run_transition().await
    }

    /// Handle a toggle-requested signal. Returns the settled enabled value,
    /// which differs from the optimistic flip only when a reschedule failed
    /// and the flag was reverted.
    pub async fn toggle(&self) -> Result<bool> {
        let target = self.state.flip();
        debug!(target, "toggle requested");
        self.run_transition().await
    }

    /// Re-derive the schedule after a successful settings refresh so a new
    /// cadence takes effect without waiting for the next toggle. No-op while
    /// disabled.
    pub async fn on_settings_refreshed(&self) -> Result<bool> {
        let _gate = self.gate.lock().await;
        if !self.state.is_enabled() {
            return Ok(false);
        }
        self.apply_enable().await
    }

    async fn run_transition(&self) -> Result<bool> {
        let _gate = self.gate.lock().await;
        // Read the target *after* acquiring the gate: a toggle queued behind
        // an in-flight transition acts on whatever the user last asked for.
        if self.state.is_enabled() {
            self.apply_enable().await
        } else {
            self.apply_disable().await
        }
    }

    /// Reschedule from the current settings snapshot; persist the flag only
    /// once the schedule actually exists. On failure the optimistic flip is
    /// reverted and the error surfaces — displayed state and scheduled
    /// reminders must never silently diverge. The revert is generation
    /// guarded: when a newer toggle flipped the target mid-flight, that
    /// queued transition owns the flag and the revert steps aside.
    async fn apply_enable(&self) -> Result<bool> {
        let generation = self.state.generation();
        let config = self
            .settings
            .current()
            .map(|s| s.reminder_config.clone())
            .unwrap_or_default();
        let prior = self.state.scheduled_local();

        match self
            .scheduler
            .reschedule_all(&prior, &config, Utc::now())
            .await
        {
            Ok(issued) => {
                self.state.record_schedule(issued.local, issued.in_app);
                self.flag.store(true).await;
                Ok(true)
            }
            Err(e) => {
                self.state.clear_schedule();
                if self.state.revert_enabled(generation) {
                    error!(reason = %e, "reschedule failed; reverted to disabled");
                    self.flag.store(false).await;
                } else {
                    warn!(reason = %e, "reschedule failed; a newer toggle supersedes the revert");
                }
                Err(e)
            }
        }
    }

    /// Cancel everything (best-effort per id), then persist the flag.
    async fn apply_disable(&self) -> Result<bool> {
        let ids = self.state.scheduled_local();
        self.scheduler.cancel_all(&ids).await;
        self.state.clear_schedule();
        self.flag.store(false).await;
        Ok(false)
    }
}
