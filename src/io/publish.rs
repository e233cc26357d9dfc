use std::fs;
use std::path::{Path, PathBuf};

use crate::model::timeline::{TIMELINE_DOCUMENT_KEY, UpcomingTimeline};

/// Error type for timeline publishing
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("could not encode timeline document: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("could not write timeline document: {0}")]
    Write(#[from] std::io::Error),
}

/// Key/value-style sink the widget reads the timeline from.
///
/// Each publish replaces the whole document under the fixed key; there is no
/// incremental update.
pub trait TimelinePublisher {
    fn publish(&self, timeline: &UpcomingTimeline) -> Result<(), PublishError>;
}

/// Publishes the timeline as a JSON file in a directory shared with the
/// widget process (the app-group container).
pub struct FileTimelinePublisher {
    dir: PathBuf,
}

impl FileTimelinePublisher {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileTimelinePublisher { dir: dir.into() }
    }

    /// Path of the published document: `<dir>/widget_upcoming_days.json`
    pub fn document_path(&self) -> PathBuf {
        self.dir.join(format!("{TIMELINE_DOCUMENT_KEY}.json"))
    }
}

impl TimelinePublisher for FileTimelinePublisher {
    fn publish(&self, timeline: &UpcomingTimeline) -> Result<(), PublishError> {
        let json = timeline.to_json()?;
        fs::write(self.document_path(), json)?;
        Ok(())
    }
}

/// Reader side of the document contract, as the widget consumes it.
///
/// A missing, unreadable, or malformed document degrades to an empty
/// timeline ("nothing due today") — it must never surface as an error.
pub fn read_timeline(dir: &Path) -> UpcomingTimeline {
    let path = dir.join(format!("{TIMELINE_DOCUMENT_KEY}.json"));
    match fs::read_to_string(&path) {
        Ok(json) => UpcomingTimeline::decode(&json),
        Err(_) => UpcomingTimeline::empty(),
    }
}
