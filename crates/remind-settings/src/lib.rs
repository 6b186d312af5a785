//! `remind-settings` — remote notification settings: fetch, validate, cache.
//!
//! # Overview
//!
//! The server delivers one JSON payload (`GET {base}/settings/notification`)
//! carrying risk buckets, announcements, and the reminder cadence config.
//! [`store::SettingsStore`] caches the validated snapshot for the process
//! lifetime and replaces it wholesale on each successful refresh.
//!
//! # Validation policy
//!
//! | Failure                              | Outcome                          |
//! |--------------------------------------|----------------------------------|
//! | Transport / non-2xx / top-level parse | `SettingsError`, cache untouched |
//! | One malformed announcement            | Entry dropped with a warning     |
//! | Invalid reminder cadence config       | Safe disabled default            |
//! | Absent optional field                 | Default value                    |

pub mod error;
pub mod parse;
pub mod store;
pub mod types;

pub use error::{Result, SettingsError};
pub use store::SettingsStore;
pub use types::NotificationSettings;
