//! `remind-core` — shared domain types for the reminder scheduling engine.
//!
//! # Overview
//!
//! The core crate holds everything the settings and scheduler crates agree
//! on: risk buckets and their classifier, announcements, the reminder cadence
//! config, and the engine-local configuration loaded from `remind.toml` with
//! `REMIND_*` env overrides.
//!
//! Risk classification is a pure function — see [`classify::classify`]. The
//! same `(score, buckets)` pair always yields the same bucket, which is what
//! makes it exhaustively table-testable.

pub mod classify;
pub mod config;
pub mod error;
pub mod types;

pub use classify::classify;
pub use config::EngineConfig;
pub use error::{CoreError, Result};
pub use types::{Announcement, QuietHours, ReminderNotificationConfig, RiskBucket};
