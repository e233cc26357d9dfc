//! Recurring-task lifecycle and reminder/timeline scheduling engine for a
//! cloud-synced to-do app.
//!
//! The surrounding app owns task CRUD, auth, and delivery; this crate owns
//! the hard part: computing next occurrences across irregular calendar
//! arithmetic, cloning a completed recurring task exactly once, rebuilding
//! the full notification plan from a snapshot, and publishing the 8-day
//! widget timeline. Everything is computed on immutable snapshots passed in
//! explicitly, so every component is deterministic and testable; the
//! external world is reached only through the traits in [`io`].

pub mod engine;
pub mod io;
pub mod model;
pub mod ops;

pub use engine::{EngineError, ReconcileOutcome, ScheduleEngine};
pub use io::dispatch::{NotificationDispatcher, PermissionOracle};
pub use io::publish::{FileTimelinePublisher, PublishError, TimelinePublisher, read_timeline};
pub use io::store::{StoreError, TaskStore};
pub use model::horizon::PlanHorizon;
pub use model::notification::NotificationRequest;
pub use model::task::{Priority, Recurrence, Reminder, StoredTask, Task};
pub use model::timeline::{TIMELINE_DOCUMENT_KEY, TaskSummary, TimelineDay, UpcomingTimeline};
pub use ops::clone_ops::{build_clone, has_live_clone, should_clone};
pub use ops::recurrence::{
    MAX_RECURRENCE_STEPS, RecurrenceError, advance, next_occurrence, next_occurrence_pair,
    next_step,
};
pub use ops::reminder_ops::{describe_offset, plan};
pub use ops::timeline_ops::{TIMELINE_DAYS, build_timeline, day_completed, start_of_day};
