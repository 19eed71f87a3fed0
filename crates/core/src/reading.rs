use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One scalar measurement from a sensor source.
///
/// Readings are grouped the way the inspector displays them: `group` is the
/// section header (e.g. `"accelerometer"`), `name` the row within it
/// (e.g. `"x"`). The history key for a reading is `group/name`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub group: String,
    pub name:  String,
    pub value: f64,
}

impl Reading {
    pub fn new(group: impl Into<String>, name: impl Into<String>, value: f64) -> Self {
        Self {
            group: group.into(),
            name:  name.into(),
            value,
        }
    }

    /// History key for this reading, `"group/name"`.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}/{}", self.group, self.name)
    }
}

/// All readings collected in one sampling tick.
///
/// `taken_at` is display metadata only — within a series, ordering is by
/// append position, never by wall clock.
#[derive(Debug, Clone)]
pub struct ReadingBatch {
    pub taken_at: DateTime<Local>,
    pub readings: Vec<Reading>,
}

impl ReadingBatch {
    pub fn new(readings: Vec<Reading>) -> Self {
        Self {
            taken_at: Local::now(),
            readings,
        }
    }
}
