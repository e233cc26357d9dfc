use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How often a task repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    /// Whether this task repeats at all
    pub fn is_recurring(self) -> bool {
        self != Recurrence::None
    }

    fn default_none() -> Self {
        Recurrence::None
    }
}

/// Task priority as shown in the editor UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    fn default_medium() -> Self {
        Priority::Medium
    }
}

/// A user-created absolute-time reminder on a task.
///
/// Reminders are independent of the default due-date reminder; the id keeps
/// two reminders with the same date distinguishable in the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: Uuid,
    pub date: DateTime<Utc>,
}

impl Reminder {
    pub fn new(date: DateTime<Utc>) -> Self {
        Reminder {
            id: Uuid::new_v4(),
            date,
        }
    }
}

/// A task as stored in the synced document collection.
///
/// The scheduling engine treats tasks as read-only snapshot data; the only
/// write it ever requests is the creation of a recurrence clone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Short task title, used as the notification title
    pub title: String,
    /// Longer free-text notes, used as the notification body
    #[serde(default)]
    pub notes: String,
    /// Start of the working window; invariant `start_date <= due_date`
    pub start_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// Minutes before the due date to fire the default reminder.
    /// Negative means the default reminder is muted; the magnitude still
    /// carries the configured offset so muting is reversible.
    #[serde(default = "default_reminder_offset")]
    pub reminder_offset_minutes: i32,
    /// Explicit absolute-time reminders
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default = "Recurrence::default_none")]
    pub recurrence: Recurrence,
    #[serde(default = "Priority::default_medium")]
    pub priority: Priority,
    #[serde(default)]
    pub is_completed: bool,
    /// Id of the recurring task this one was cloned from; `None` for
    /// originals. Set once at clone time and never mutated afterwards —
    /// it is the sole idempotency marker for cloning.
    #[serde(default)]
    pub origin_task_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub owner_id: Option<String>,
}

fn default_reminder_offset() -> i32 {
    5
}

impl Task {
    /// Create a task with the editor's defaults (5-minute default reminder,
    /// no recurrence, medium priority)
    pub fn new(
        title: impl Into<String>,
        start_date: DateTime<Utc>,
        due_date: DateTime<Utc>,
    ) -> Self {
        Task {
            title: title.into(),
            notes: String::new(),
            start_date,
            due_date,
            reminder_offset_minutes: default_reminder_offset(),
            reminders: Vec::new(),
            recurrence: Recurrence::None,
            priority: Priority::Medium,
            is_completed: false,
            origin_task_id: None,
            project_id: None,
            owner_id: None,
        }
    }

    /// Whether the default due-date reminder is muted
    pub fn default_reminder_muted(&self) -> bool {
        self.reminder_offset_minutes < 0
    }
}

/// A task paired with its store-assigned document id.
///
/// Snapshots fetched from the store are `Vec<StoredTask>`; a freshly built
/// clone is a bare [`Task`] until the store assigns it an id on insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTask {
    pub id: String,
    pub task: Task,
}

impl StoredTask {
    pub fn new(id: impl Into<String>, task: Task) -> Self {
        StoredTask {
            id: id.into(),
            task,
        }
    }
}
