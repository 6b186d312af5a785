use chrono::{DateTime, Duration, Timelike, Utc};
use remind_core::{QuietHours, ReminderNotificationConfig};

use crate::types::ReminderOccurrence;

/// Compute the full occurrence set for `config`, anchored at `now`.
///
/// Occurrence `k` (1-based) fires at `now + k * interval_hours`, deferred to
/// the end of the quiet window when it lands inside one. Deterministic: the
/// same `(config, now)` pair always yields the same occurrences, which is
/// what makes a repeated reschedule replace instead of duplicate.
///
/// A disabled or zero-cadence config yields the empty set — scheduling
/// nothing is how "reminders configured off" is expressed downstream.
pub fn compute_occurrences(
    config: &ReminderNotificationConfig,
    now: DateTime<Utc>,
) -> Vec<ReminderOccurrence> {
    if !config.enabled || config.validate().is_err() {
        return Vec::new();
    }

    (1..=config.max_scheduled)
        .map(|index| {
            let fire_at = now + Duration::hours(i64::from(config.interval_hours) * i64::from(index));
            ReminderOccurrence {
                index,
                fire_at: defer_past_quiet(fire_at, config.quiet_hours),
            }
        })
        .collect()
}

/// Push an instant landing inside the quiet window to the window's end
/// (HH:00). Windows may wrap midnight: 22 → 7 means 23:30 defers to 07:00
/// the next day and 03:00 defers to 07:00 the same day.
fn defer_past_quiet(at: DateTime<Utc>, quiet: Option<QuietHours>) -> DateTime<Utc> {
    let Some(q) = quiet else {
        return at;
    };
    let hour = at.hour() as u8;
    if !q.contains_hour(hour) {
        return at;
    }

    // Truncate to the top of the end hour; chrono only returns None here for
    // out-of-range values, which validation has already excluded.
    let deferred = at
        .with_hour(u32::from(q.end_hour))
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(at);

    // In a wrapped window the pre-midnight stretch defers to tomorrow.
    if q.start_hour > q.end_hour && hour >= q.start_hour {
        deferred + Duration::days(1)
    } else {
        deferred
    }
}
