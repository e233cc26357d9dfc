use chrono::{DateTime, Duration, NaiveTime, Utc};

use crate::model::task::StoredTask;
use crate::model::timeline::{TaskSummary, TimelineDay, UpcomingTimeline};

/// Number of day buckets in the published timeline: today plus seven
pub const TIMELINE_DAYS: usize = 8;

/// UTC midnight of the day containing `t`
pub fn start_of_day(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Bucket tasks into the fixed 8-day widget timeline.
///
/// Buckets are half-open `[day_start, day_start + 1d)`: a due date exactly
/// on a midnight boundary belongs to the day it opens, and each task lands
/// in at most one bucket (first match). Tasks due outside the window are
/// omitted. Within a bucket, incomplete tasks sort before completed ones,
/// ties keeping their snapshot order. Entries carry only the display
/// summary, tinted with the caller's accent color.
pub fn build_timeline(tasks: &[StoredTask], tint: &str, now: DateTime<Utc>) -> UpcomingTimeline {
    let first = start_of_day(now);
    let starts: Vec<DateTime<Utc>> = (0..TIMELINE_DAYS)
        .map(|i| first + Duration::days(i as i64))
        .collect();

    let mut buckets: Vec<Vec<TaskSummary>> = vec![Vec::new(); TIMELINE_DAYS];
    for stored in tasks {
        let due = stored.task.due_date;
        for (bucket, &day_start) in buckets.iter_mut().zip(&starts) {
            if due >= day_start && due < day_start + Duration::days(1) {
                bucket.push(TaskSummary {
                    title: stored.task.title.clone(),
                    is_completed: stored.task.is_completed,
                    color: tint.to_string(),
                });
                break;
            }
        }
    }

    let days = starts
        .into_iter()
        .zip(buckets)
        .map(|(date, mut entries)| {
            entries.sort_by_key(|e| e.is_completed);
            TimelineDay { date, entries }
        })
        .collect();
    UpcomingTimeline { days }
}

/// True when every task due today is completed (vacuously true with no
/// tasks due today). Drives the "all done" state of the home-screen icon.
pub fn day_completed(tasks: &[StoredTask], now: DateTime<Utc>) -> bool {
    let start = start_of_day(now);
    let end = start + Duration::days(1);
    tasks
        .iter()
        .filter(|t| t.task.due_date >= start && t.task.due_date < end)
        .all(|t| t.task.is_completed)
}
