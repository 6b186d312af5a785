use thiserror::Error;

/// Errors that can occur within the scheduling subsystem.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The notification primitive rejected a schedule or cancel call.
    ///
    /// For cancellation this is logged and skipped (best-effort); for
    /// scheduling it fails the whole reschedule and aborts the
    /// disabled → enabled transition.
    #[error("Notification primitive rejected {id}: {reason}")]
    Primitive { id: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
