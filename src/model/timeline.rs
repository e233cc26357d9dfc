use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Well-known key under which the timeline document is published.
/// The widget reader looks the document up by this exact key.
pub const TIMELINE_DOCUMENT_KEY: &str = "widget_upcoming_days";

/// Reduced task view exposed to the display surface.
///
/// Deliberately carries nothing but what the widget renders; ids, dates and
/// ownership stay inside the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub title: String,
    #[serde(default)]
    pub is_completed: bool,
    /// Accent color hex string chosen by the user, e.g. `#007aff`
    #[serde(default)]
    pub color: String,
}

/// All tasks due within one day-long bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineDay {
    /// Start-of-day timestamp for the bucket (RFC3339 on the wire)
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub entries: Vec<TaskSummary>,
}

/// The full published timeline: today plus the next seven days.
///
/// Rebuilt wholesale on every pass and written under
/// [`TIMELINE_DOCUMENT_KEY`], replacing the previous document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UpcomingTimeline {
    #[serde(default)]
    pub days: Vec<TimelineDay>,
}

impl UpcomingTimeline {
    /// A timeline with no days at all — what the reader falls back to when
    /// the published document is missing or unreadable
    pub fn empty() -> Self {
        UpcomingTimeline::default()
    }

    /// Encode as the pretty-printed JSON document shared with the widget
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Decode a published document, degrading to an empty timeline on any
    /// decode failure. The widget must never crash on a bad document.
    pub fn decode(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|_| UpcomingTimeline::empty())
    }

    /// The first (today) bucket, if the timeline has one
    pub fn today(&self) -> Option<&TimelineDay> {
        self.days.first()
    }
}
