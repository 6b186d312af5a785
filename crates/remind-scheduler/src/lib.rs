//! `remind-scheduler` — the reminder scheduling engine.
//!
//! # Overview
//!
//! On every toggle, settings refresh, or app start the engine decides whether
//! local device notifications and in-app reminder banners should exist and
//! (re)derives them from the remote cadence config. Delivery itself is
//! external: the engine talks to the OS notification layer, the in-app
//! banner list, and the persisted enabled flag through the ports in
//! [`ports`], so hosts and tests substitute their own implementations.
//!
//! # Guarantees
//!
//! - Cancel and reschedule for the reminder flag never interleave — the
//!   [`coordinator::ToggleCoordinator`] serializes them behind one mutex.
//! - A toggle arriving mid-flight is coalesced: the machine tracks only the
//!   latest desired target, never a queue of requests.
//! - `reschedule_all` is idempotent — occurrence ids are derived from the
//!   occurrence index, so identical input yields the identical schedule.
//! - The visible enabled flag flips optimistically and is reverted (and the
//!   failure surfaced) when the underlying reschedule fails.

pub mod coordinator;
pub mod error;
pub mod ports;
pub mod schedule;
pub mod scheduler;
pub mod state;
pub mod types;

pub use coordinator::ToggleCoordinator;
pub use error::{Result, ScheduleError};
pub use ports::{EnabledFlagStore, InAppReminderPort, NotificationPort};
pub use scheduler::{IssuedReminders, ReminderScheduler};
pub use state::{ReminderState, ReminderStateMachine};
pub use types::{FiringRule, InAppReminder, ReminderId, ReminderOccurrence};
