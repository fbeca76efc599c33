//! Table-level CRUD for the admin pages.
//!
//! Every operation names its target with a [`Table`]. Unknown names are
//! refused before the body is decoded or the database is touched.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqlitePool;
use tracing::info;

use crate::db;
use crate::error::{Error, Result};
use crate::models::{Exercise, WeightWorkout, WeightsLog, Wod, Workout};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    Workouts,
    WeightsLogs,
    Exercises,
    Wods,
    WeightWorkouts,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Workouts => "workouts",
            Table::WeightsLogs => "weights_logs",
            Table::Exercises => "exercises",
            Table::Wods => "wods",
            Table::WeightWorkouts => "weight_workouts",
        }
    }
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "workouts" => Ok(Table::Workouts),
            "weights_logs" => Ok(Table::WeightsLogs),
            "exercises" => Ok(Table::Exercises),
            "wods" => Ok(Table::Wods),
            "weight_workouts" => Ok(Table::WeightWorkouts),
            _ => Err(Error::UnknownTable(s.to_string())),
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Body of an admin delete.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub id: i64,
}

/// Full contents of one table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Records {
    Workouts(Vec<Workout>),
    WeightsLogs(Vec<WeightsLog>),
    Exercises(Vec<Exercise>),
    Wods(Vec<Wod>),
    WeightWorkouts(Vec<WeightWorkout>),
}

impl Records {
    pub fn len(&self) -> usize {
        match self {
            Records::Workouts(rows) => rows.len(),
            Records::WeightsLogs(rows) => rows.len(),
            Records::Exercises(rows) => rows.len(),
            Records::Wods(rows) => rows.len(),
            Records::WeightWorkouts(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

/// Updates need the row id; without one the statement would silently match nothing.
fn require_id(id: Option<i64>) -> Result<()> {
    match id {
        Some(_) => Ok(()),
        None => Err(Error::MissingParameter("id")),
    }
}

/// Inserts one row decoded from `body`. Returns the new id.
pub async fn add(pool: &SqlitePool, table: Table, body: &[u8]) -> Result<i64> {
    let id = match table {
        Table::Workouts => db::write_workout(pool, &decode::<Workout>(body)?).await?,
        Table::WeightsLogs => db::write_weights_log(pool, &decode::<WeightsLog>(body)?).await?,
        Table::Exercises => db::write_exercise(pool, &decode::<Exercise>(body)?).await?,
        Table::Wods => db::write_wod(pool, &decode::<Wod>(body)?).await?,
        Table::WeightWorkouts => {
            db::write_weight_workout(pool, &decode::<WeightWorkout>(body)?).await?
        }
    };
    info!(%table, id, "Added record");

    Ok(id)
}

pub async fn update(pool: &SqlitePool, table: Table, body: &[u8]) -> Result<u64> {
    let rows = match table {
        Table::Workouts => {
            let workout: Workout = decode(body)?;
            require_id(workout.id)?;
            info!(%table, ?workout, "Received update request");
            db::update_workout(pool, &workout).await?
        }
        Table::WeightsLogs => {
            let weights_log: WeightsLog = decode(body)?;
            require_id(weights_log.id)?;
            info!(%table, ?weights_log, "Received update request");
            db::update_weights_log(pool, &weights_log).await?
        }
        Table::Exercises => {
            let exercise: Exercise = decode(body)?;
            require_id(exercise.id)?;
            info!(%table, ?exercise, "Received update request");
            db::update_exercise(pool, &exercise).await?
        }
        Table::Wods => {
            let wod: Wod = decode(body)?;
            require_id(wod.id)?;
            info!(%table, ?wod, "Received update request");
            db::update_wod(pool, &wod).await?
        }
        Table::WeightWorkouts => {
            let weight_workout: WeightWorkout = decode(body)?;
            require_id(weight_workout.id)?;
            info!(%table, ?weight_workout, "Received update request");
            db::update_weight_workout(pool, &weight_workout).await?
        }
    };

    Ok(rows)
}

pub async fn delete(pool: &SqlitePool, table: Table, body: &[u8]) -> Result<u64> {
    let DeleteRequest { id } = decode(body)?;
    info!(%table, id, "Received delete request");

    let rows = match table {
        Table::Workouts => db::delete_workout(pool, id).await?,
        Table::WeightsLogs => db::delete_weights_log(pool, id).await?,
        Table::Exercises => db::delete_exercise(pool, id).await?,
        Table::Wods => db::delete_wod(pool, id).await?,
        Table::WeightWorkouts => db::delete_weight_workout(pool, id).await?,
    };

    Ok(rows)
}

pub async fn view(pool: &SqlitePool, table: Table) -> Result<Records> {
    let records = match table {
        Table::Workouts => Records::Workouts(db::read_all_workouts(pool).await?),
        Table::WeightsLogs => Records::WeightsLogs(db::read_all_weights_logs(pool).await?),
        Table::Exercises => Records::Exercises(db::read_all_exercises(pool).await?),
        Table::Wods => Records::Wods(db::read_all_wods(pool).await?),
        Table::WeightWorkouts => {
            Records::WeightWorkouts(db::read_all_weight_workouts(pool).await?)
        }
    };

    Ok(records)
}

pub async fn empty(pool: &SqlitePool, table: Table) -> Result<u64> {
    let rows = match table {
        Table::Workouts => db::empty_workouts(pool).await?,
        Table::WeightsLogs => db::empty_weights_logs(pool).await?,
        Table::Exercises => db::empty_exercises(pool).await?,
        Table::Wods => db::empty_wods(pool).await?,
        Table::WeightWorkouts => db::empty_weight_workouts(pool).await?,
    };
    info!(%table, rows, "Emptied table");

    Ok(rows)
}
