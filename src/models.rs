//! Row types shared by the server and the command-line client.
//!
//! Every type doubles as its own insert payload: `id` is `None` until the
//! database assigns one, and a missing `date` defaults to the current time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[cfg(test)]
use fake::Dummy;

/// A logged cardio session. `duration` is in seconds, `distance` in km.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[cfg_attr(test, derive(Dummy))]
pub struct Workout {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub duration: f64,
    pub distance: f64,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

/// Workout of the day. Same shape as [`Workout`] but `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[cfg_attr(test, derive(Dummy))]
pub struct Wod {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub duration: i64,
    pub distance: f64,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

/// A weights session. `exercises` is populated by the queries that need it
/// and is never stored on the row itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[cfg_attr(test, derive(Dummy))]
pub struct WeightsLog {
    pub id: Option<i64>,
    pub workout_type: String,
    #[serde(default)]
    #[sqlx(skip)]
    pub exercises: Vec<Exercise>,
    #[serde(default = "Utc::now")]
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[cfg_attr(test, derive(Dummy))]
pub struct Exercise {
    pub id: Option<i64>,
    pub weights_log_id: Option<i64>,
    pub name: String,
    pub set1: i64,
    pub set2: i64,
    pub set3: i64,
}

/// Catalog entry mapping a training category to an exercise name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[cfg_attr(test, derive(Dummy))]
pub struct WeightWorkout {
    pub id: Option<i64>,
    pub workout_type: String,
    pub exercise: String,
}
