use chrono::{DateTime, Days, Months, Utc};

use crate::model::task::Recurrence;

/// Hard cap on how many periods forward the next-occurrence search walks.
/// Hitting it means the anchor is corrupted (or decades in the past for a
/// daily task); the affected task is skipped, nothing else.
pub const MAX_RECURRENCE_STEPS: u32 = 10_000;

/// Error type for recurrence calculations
#[derive(Debug, thiserror::Error)]
pub enum RecurrenceError {
    #[error("task does not recur")]
    NotRecurring,
    #[error("no occurrence after {now} within {MAX_RECURRENCE_STEPS} steps of anchor {anchor}")]
    OutOfRange {
        anchor: DateTime<Utc>,
        now: DateTime<Utc>,
    },
}

/// Advance `anchor` by `k` periods of `cadence`.
///
/// Monthly steps are calendar months counted from the anchor itself (never
/// cumulative), so `Jan 31 + 1 month` clamps to `Feb 28`/`Feb 29` and
/// `Jan 31 + 2 months` is back on `Mar 31` — the day-of-month never drifts.
/// Returns `None` for a non-recurring cadence or on date overflow.
pub fn advance(anchor: DateTime<Utc>, cadence: Recurrence, k: u32) -> Option<DateTime<Utc>> {
    match cadence {
        Recurrence::None => None,
        Recurrence::Daily => anchor.checked_add_days(Days::new(u64::from(k))),
        Recurrence::Weekly => anchor.checked_add_days(Days::new(7 * u64::from(k))),
        Recurrence::Monthly => anchor.checked_add_months(Months::new(k)),
    }
}

/// Smallest `k >= 1` such that `advance(anchor, cadence, k)` lies strictly
/// after `now`.
///
/// Always at least 1: even an anchor already in the future advances one full
/// period. Fails with [`RecurrenceError::OutOfRange`] past
/// [`MAX_RECURRENCE_STEPS`].
pub fn next_step(
    anchor: DateTime<Utc>,
    cadence: Recurrence,
    now: DateTime<Utc>,
) -> Result<u32, RecurrenceError> {
    if !cadence.is_recurring() {
        return Err(RecurrenceError::NotRecurring);
    }
    for k in 1..=MAX_RECURRENCE_STEPS {
        match advance(anchor, cadence, k) {
            Some(next) if next > now => return Ok(k),
            Some(_) => continue,
            // date overflow; larger k will not help
            None => break,
        }
    }
    Err(RecurrenceError::OutOfRange { anchor, now })
}

/// Next valid occurrence of `anchor` strictly after `now`
pub fn next_occurrence(
    anchor: DateTime<Utc>,
    cadence: Recurrence,
    now: DateTime<Utc>,
) -> Result<DateTime<Utc>, RecurrenceError> {
    let k = next_step(anchor, cadence, now)?;
    advance(anchor, cadence, k).ok_or(RecurrenceError::OutOfRange { anchor, now })
}

/// Advance a due/start date pair by the same step count, preserving the
/// start-to-due offset across occurrences. The step is chosen from the due
/// date.
pub fn next_occurrence_pair(
    due_date: DateTime<Utc>,
    start_date: DateTime<Utc>,
    cadence: Recurrence,
    now: DateTime<Utc>,
) -> Result<(DateTime<Utc>, DateTime<Utc>), RecurrenceError> {
    let k = next_step(due_date, cadence, now)?;
    let due = advance(due_date, cadence, k);
    let start = advance(start_date, cadence, k);
    match (due, start) {
        (Some(due), Some(start)) => Ok((due, start)),
        _ => Err(RecurrenceError::OutOfRange {
            anchor: due_date,
            now,
        }),
    }
}
