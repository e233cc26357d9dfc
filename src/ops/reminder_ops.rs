use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::model::horizon::PlanHorizon;
use crate::model::notification::NotificationRequest;
use crate::model::task::StoredTask;
use crate::ops::clone_ops::has_live_clone;
use crate::ops::recurrence::advance;

/// Enumerate every notification a single task should fire, given the live
/// snapshot and the current instant.
///
/// Three independent sources feed the plan:
/// 1. the default reminder, `offset` minutes before the due date (muted when
///    the offset is negative);
/// 2. speculative reminders at predicted future occurrences of a recurring
///    task, emitted only while no real clone exists in the snapshot — once
///    the clone is live it plans its own reminders and these are superseded;
/// 3. the task's explicit absolute-time reminders.
///
/// Candidates not strictly in the future are dropped silently. The result
/// holds at most one request per distinct fire instant (first source wins)
/// and is sorted ascending by fire time.
pub fn plan(
    stored: &StoredTask,
    live: &[StoredTask],
    horizon: &PlanHorizon,
    now: DateTime<Utc>,
) -> Vec<NotificationRequest> {
    let task = &stored.task;
    if task.is_completed {
        return Vec::new();
    }

    let mut by_instant: BTreeMap<DateTime<Utc>, NotificationRequest> = BTreeMap::new();
    let mut emit = |fire_at: DateTime<Utc>| {
        if fire_at > now {
            by_instant
                .entry(fire_at)
                .or_insert_with(|| NotificationRequest::new(fire_at, &task.title, &task.notes, &stored.id));
        }
    };

    // 1. default reminder before the due date
    if task.reminder_offset_minutes >= 0 {
        emit(task.due_date - Duration::minutes(i64::from(task.reminder_offset_minutes)));
    }

    // 2. speculative future occurrences, only until the real clone exists
    if task.recurrence.is_recurring() && !has_live_clone(live, &stored.id) {
        for i in 1..=horizon.steps(task.recurrence) {
            if let Some(occurrence) = advance(task.due_date, task.recurrence, i) {
                emit(occurrence);
            }
        }
    }

    // 3. explicit reminders
    for reminder in &task.reminders {
        emit(reminder.date);
    }

    by_instant.into_values().collect()
}

/// Human description of a reminder offset, e.g. "5 minutes", "2 hours",
/// "3 days". Uses the magnitude, so a muted offset describes the value that
/// unmuting would restore.
pub fn describe_offset(minutes: i32) -> String {
    let minutes = i64::from(minutes).abs();
    if minutes < 60 {
        format!("{} {}", minutes, if minutes == 1 { "minute" } else { "minutes" })
    } else if minutes < 1_440 {
        let hours = minutes / 60;
        format!("{} {}", hours, if hours == 1 { "hour" } else { "hours" })
    } else {
        let days = minutes / 1_440;
        format!("{} {}", days, if days == 1 { "day" } else { "days" })
    }
}
