use chrono::{DateTime, Utc};

use crate::model::task::{StoredTask, Task};
use crate::ops::recurrence::{self, RecurrenceError};

/// Whether any live task was cloned from the task with id `origin_id`.
///
/// `origin_task_id` is a weak back-reference looked up against the snapshot
/// being processed; it never implies the origin task still exists.
pub fn has_live_clone(live: &[StoredTask], origin_id: &str) -> bool {
    live.iter()
        .any(|t| t.task.origin_task_id.as_deref() == Some(origin_id))
}

/// Decide whether completing `stored` must produce its next occurrence.
///
/// False when the task is not completed or not recurring, and false when a
/// clone already exists in the live set — toggling the checkbox repeatedly
/// never produces a second clone.
pub fn should_clone(stored: &StoredTask, live: &[StoredTask]) -> bool {
    if !stored.task.is_completed || !stored.task.recurrence.is_recurring() {
        return false;
    }
    !has_live_clone(live, &stored.id)
}

/// Build the next-occurrence clone of a completed recurring task.
///
/// Every field is carried over except: completion is reset, due/start move
/// forward by the same number of periods, and `origin_task_id` points back
/// at the source. The clone has no id; the store assigns one on insertion.
/// Performs no I/O.
pub fn build_clone(stored: &StoredTask, now: DateTime<Utc>) -> Result<Task, RecurrenceError> {
    let (due_date, start_date) = recurrence::next_occurrence_pair(
        stored.task.due_date,
        stored.task.start_date,
        stored.task.recurrence,
        now,
    )?;
    let mut clone = stored.task.clone();
    clone.is_completed = false;
    clone.due_date = due_date;
    clone.start_date = start_date;
    clone.origin_task_id = Some(stored.id.clone());
    Ok(clone)
}
