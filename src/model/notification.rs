use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One pending local-notification request.
///
/// Requests are ephemeral: the reconciler regenerates the full set on every
/// pass and never persists them. `task_id` lets the dispatcher correlate a
/// fired notification back to its task for deep-link navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub id: Uuid,
    pub fire_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
    pub task_id: String,
}

impl NotificationRequest {
    pub fn new(
        fire_at: DateTime<Utc>,
        title: impl Into<String>,
        body: impl Into<String>,
        task_id: impl Into<String>,
    ) -> Self {
        NotificationRequest {
            id: Uuid::new_v4(),
            fire_at,
            title: title.into(),
            body: body.into(),
            task_id: task_id.into(),
        }
    }
}
