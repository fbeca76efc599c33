use std::str::FromStr;

use chrono::Utc;
use lazy_static::lazy_static;
use sqlx::sqlite::{Sqlite, SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Executor;
use tracing::info;

use crate::error::Result;
use crate::models::{Exercise, WeightWorkout, WeightsLog, Wod, Workout};

/// Workout types that count as cardio. Matched case-insensitively.
pub const CARDIO_KINDS: [&str; 5] = ["run", "bike", "row", "walk", "crosstrainer"];

lazy_static! {
    static ref CARDIO_CONDITION: String = format!(
        "LOWER(type) IN ({})",
        CARDIO_KINDS
            .iter()
            .map(|kind| format!("'{}'", kind))
            .collect::<Vec<_>>()
            .join(", ")
    );
}

const SCHEMA: [&str; 5] = [
    "CREATE TABLE IF NOT EXISTS workouts (
        id INTEGER PRIMARY KEY,
        type TEXT NOT NULL,
        duration REAL NOT NULL,
        distance REAL NOT NULL,
        date TEXT NOT NULL
        )",
    "CREATE TABLE IF NOT EXISTS weights_logs (
        id INTEGER PRIMARY KEY,
        workout_type TEXT NOT NULL,
        date TEXT NOT NULL
        )",
    "CREATE TABLE IF NOT EXISTS exercises (
        id INTEGER PRIMARY KEY,
        weights_log_id INTEGER NOT NULL REFERENCES weights_logs(id),
        name TEXT NOT NULL CHECK (name <> ''),
        set1 INTEGER NOT NULL,
        set2 INTEGER NOT NULL,
        set3 INTEGER NOT NULL
        )",
    "CREATE TABLE IF NOT EXISTS wods (
        id INTEGER PRIMARY KEY,
        type TEXT NOT NULL,
        duration INTEGER NOT NULL,
        distance REAL NOT NULL,
        date TEXT NOT NULL
        )",
    "CREATE TABLE IF NOT EXISTS weight_workouts (
        id INTEGER PRIMARY KEY,
        workout_type TEXT NOT NULL,
        exercise TEXT NOT NULL
        )",
];

// (type, minutes, km)
const WOD_SEED: [(&str, i64, f64); 7] = [
    ("walk", 60, 5.0),
    ("run", 30, 5.0),
    ("run", 30, 5.0),
    ("crosstrainer", 30, 5.0),
    ("row", 30, 5.0),
    ("row", 30, 5.0),
    ("bike", 60, 20.0),
];

const WEIGHT_WORKOUT_SEED: [(&str, &str); 29] = [
    ("push", "Flat Dumbbells"),
    ("push", "Flat Flys"),
    ("push", "Seated Dumbbell front raises"),
    ("push", "Seated Dumbbell side raises"),
    ("push", "Seated Dumbbell shoulder press"),
    ("push", "Tricep Pushdowns"),
    ("push", "Incline Smith"),
    ("push", "Close Grip Incline Smith"),
    ("push", "Overhead Rope (Cables)"),
    ("push", "Assisted Dips/Dip machine"),
    ("pull", "Deadlifts"),
    ("pull", "Bent Over Rows (Underhand)"),
    ("pull", "Shrugs (Barbell or dumbbell)"),
    ("pull", "Lat Pulldown"),
    ("pull", "Upright Rows (Barbell or Rope)"),
    ("pull", "Rear Delt Raises (Dumbbell)"),
    ("pull", "Single Preacher Dumbbell Curls"),
    ("pull", "EZ Bar Standing Curls"),
    ("pull", "Double Dumbbell Hammer Curls"),
    ("legs", "Barbell Squat"),
    ("legs", "Straight leg deadlifts"),
    ("legs", "Front squat (added)"),
    ("legs", "Leg Press"),
    ("legs", "Calf Raises on Leg Press"),
    ("legs", "Leg Extensions"),
    ("legs", "Hamstring curls (Machine)"),
    ("legs", "Dumbbell lunges"),
    ("legs", "Ab/Crunch Machine"),
    ("legs", "Captains Chair Leg or Knee Raises"),
];

// (type, seconds, km)
const WORKOUT_SEED: [(&str, f64, f64); 3] = [
    ("run", 1800.0, 5.0),
    ("bike", 3600.0, 20.0),
    ("row", 1800.0, 5.0),
];

pub async fn setup_pool(db_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(db_url)?.create_if_missing(true);

    Ok(SqlitePoolOptions::new().connect_with(options).await?)
}

/// Creates missing tables and fills empty catalogs. Safe to run on every start.
pub async fn setup_db(pool: &SqlitePool) -> Result<()> {
    create_schema(pool).await?;
    seed(pool).await?;

    Ok(())
}

pub async fn create_schema(pool: &SqlitePool) -> Result<()> {
    for statement in SCHEMA.iter() {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}

async fn count_rows(pool: &SqlitePool, table: &str) -> Result<i64> {
    let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await?;

    Ok(count)
}

pub async fn seed(pool: &SqlitePool) -> Result<()> {
    let now = Utc::now();

    if count_rows(pool, "wods").await? == 0 {
        for &(kind, duration, distance) in WOD_SEED.iter() {
            sqlx::query("INSERT INTO wods(type, duration, distance, date) VALUES(?, ?, ?, ?)")
                .bind(kind)
                .bind(duration)
                .bind(distance)
                .bind(now)
                .execute(pool)
                .await?;
        }
        info!(rows = WOD_SEED.len(), "Seeded wods");
    }

    if count_rows(pool, "weight_workouts").await? == 0 {
        for &(workout_type, exercise) in WEIGHT_WORKOUT_SEED.iter() {
            sqlx::query("INSERT INTO weight_workouts(workout_type, exercise) VALUES(?, ?)")
                .bind(workout_type)
                .bind(exercise)
                .execute(pool)
                .await?;
        }
        info!(rows = WEIGHT_WORKOUT_SEED.len(), "Seeded weight_workouts");
    }

    if count_rows(pool, "workouts").await? == 0 {
        for &(kind, duration, distance) in WORKOUT_SEED.iter() {
            sqlx::query("INSERT INTO workouts(type, duration, distance, date) VALUES(?, ?, ?, ?)")
                .bind(kind)
                .bind(duration)
                .bind(distance)
                .bind(now)
                .execute(pool)
                .await?;
        }
        info!(rows = WORKOUT_SEED.len(), "Seeded workouts");
    }

    Ok(())
}

// Workouts

pub async fn read_all_workouts(pool: &SqlitePool) -> Result<Vec<Workout>> {
    Ok(sqlx::query_as::<_, Workout>("SELECT * FROM workouts")
        .fetch_all(pool)
        .await?)
}

pub async fn read_cardio_workouts(pool: &SqlitePool) -> Result<Vec<Workout>> {
    let query = format!(
        "SELECT * FROM workouts WHERE {} ORDER BY date DESC, id DESC",
        *CARDIO_CONDITION
    );

    Ok(sqlx::query_as::<_, Workout>(&query).fetch_all(pool).await?)
}

pub async fn read_last_cardio_workout(pool: &SqlitePool) -> Result<Workout> {
    let query = format!(
        "SELECT * FROM workouts WHERE {} ORDER BY date DESC, id DESC LIMIT 1",
        *CARDIO_CONDITION
    );

    Ok(sqlx::query_as::<_, Workout>(&query).fetch_one(pool).await?)
}

pub async fn write_workout(pool: &SqlitePool, workout: &Workout) -> Result<i64> {
    let id = sqlx::query("INSERT INTO workouts(type, duration, distance, date) VALUES(?, ?, ?, ?)")
        .bind(&workout.kind)
        .bind(workout.duration)
        .bind(workout.distance)
        .bind(workout.date)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(id)
}

pub async fn update_workout(pool: &SqlitePool, workout: &Workout) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE workouts SET type=?, duration=?, distance=?, date=?
        WHERE id=?",
    )
    .bind(&workout.kind)
    .bind(workout.duration)
    .bind(workout.distance)
    .bind(workout.date)
    .bind(workout.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_workout(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM workouts WHERE id=?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn empty_workouts(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM workouts").execute(pool).await?;

    Ok(result.rows_affected())
}

// Weights logs

async fn insert_exercise<'e, E>(executor: E, weights_log_id: i64, exercise: &Exercise) -> Result<i64>
where
    E: Executor<'e, Database = Sqlite>,
{
    let id = sqlx::query(
        "INSERT INTO exercises(weights_log_id, name, set1, set2, set3) VALUES(?, ?, ?, ?, ?)",
    )
    .bind(weights_log_id)
    .bind(&exercise.name)
    .bind(exercise.set1)
    .bind(exercise.set2)
    .bind(exercise.set3)
    .execute(executor)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Stores a weights session and its exercises as one unit, stamped with the
/// current time. Returns the new log id.
pub async fn save_weights_log(pool: &SqlitePool, weights_log: &WeightsLog) -> Result<i64> {
    let mut tx = pool.begin().await?;

    let log_id = sqlx::query("INSERT INTO weights_logs(workout_type, date) VALUES(?, ?)")
        .bind(&weights_log.workout_type)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

    // Any early return drops `tx`, which rolls the log and its exercises back.
    for exercise in weights_log.exercises.iter() {
        insert_exercise(&mut *tx, log_id, exercise).await?;
    }

    tx.commit().await?;

    Ok(log_id)
}

/// Inserts only the parent row, keeping the given date.
pub async fn write_weights_log(pool: &SqlitePool, weights_log: &WeightsLog) -> Result<i64> {
    let id = sqlx::query("INSERT INTO weights_logs(workout_type, date) VALUES(?, ?)")
        .bind(&weights_log.workout_type)
        .bind(weights_log.date)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(id)
}

/// Every log without its exercises.
pub async fn read_all_weights_logs(pool: &SqlitePool) -> Result<Vec<WeightsLog>> {
    Ok(sqlx::query_as::<_, WeightsLog>("SELECT * FROM weights_logs")
        .fetch_all(pool)
        .await?)
}

/// Every log with its exercises, newest first.
pub async fn read_weights_logs(pool: &SqlitePool) -> Result<Vec<WeightsLog>> {
    let mut logs = sqlx::query_as::<_, WeightsLog>(
        "SELECT * FROM weights_logs ORDER BY date DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    for log in logs.iter_mut() {
        if let Some(id) = log.id {
            log.exercises = read_exercises_for_log(pool, id).await?;
        }
    }

    Ok(logs)
}

pub async fn read_last_weights_log(
    pool: &SqlitePool,
    workout_type: &str,
) -> Result<Option<WeightsLog>> {
    let log = sqlx::query_as::<_, WeightsLog>(
        "SELECT * FROM weights_logs WHERE workout_type=? ORDER BY date DESC, id DESC LIMIT 1",
    )
    .bind(workout_type)
    .fetch_optional(pool)
    .await?;

    match log {
        Some(mut log) => {
            if let Some(id) = log.id {
                log.exercises = read_exercises_for_log(pool, id).await?;
            }
            Ok(Some(log))
        }
        None => Ok(None),
    }
}

pub async fn update_weights_log(pool: &SqlitePool, weights_log: &WeightsLog) -> Result<u64> {
    let result = sqlx::query("UPDATE weights_logs SET workout_type=?, date=? WHERE id=?")
        .bind(&weights_log.workout_type)
        .bind(weights_log.date)
        .bind(weights_log.id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Removes a log together with its exercises.
pub async fn delete_weights_log(pool: &SqlitePool, id: i64) -> Result<u64> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM exercises WHERE weights_log_id=?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM weights_logs WHERE id=?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected())
}

pub async fn empty_weights_logs(pool: &SqlitePool) -> Result<u64> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM exercises WHERE weights_log_id IN (SELECT id FROM weights_logs)")
        .execute(&mut *tx)
        .await?;

    let result = sqlx::query("DELETE FROM weights_logs")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(result.rows_affected())
}

// Exercises

pub async fn read_exercises_for_log(pool: &SqlitePool, weights_log_id: i64) -> Result<Vec<Exercise>> {
    Ok(
        sqlx::query_as::<_, Exercise>("SELECT * FROM exercises WHERE weights_log_id=? ORDER BY id")
            .bind(weights_log_id)
            .fetch_all(pool)
            .await?,
    )
}

pub async fn read_all_exercises(pool: &SqlitePool) -> Result<Vec<Exercise>> {
    Ok(sqlx::query_as::<_, Exercise>("SELECT * FROM exercises")
        .fetch_all(pool)
        .await?)
}

pub async fn write_exercise(pool: &SqlitePool, exercise: &Exercise) -> Result<i64> {
    // A missing parent id binds NULL and is refused by the NOT NULL constraint.
    let id = sqlx::query(
        "INSERT INTO exercises(weights_log_id, name, set1, set2, set3) VALUES(?, ?, ?, ?, ?)",
    )
    .bind(exercise.weights_log_id)
    .bind(&exercise.name)
    .bind(exercise.set1)
    .bind(exercise.set2)
    .bind(exercise.set3)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn update_exercise(pool: &SqlitePool, exercise: &Exercise) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE exercises SET weights_log_id=?, name=?, set1=?, set2=?, set3=?
        WHERE id=?",
    )
    .bind(exercise.weights_log_id)
    .bind(&exercise.name)
    .bind(exercise.set1)
    .bind(exercise.set2)
    .bind(exercise.set3)
    .bind(exercise.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_exercise(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM exercises WHERE id=?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn empty_exercises(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM exercises").execute(pool).await?;

    Ok(result.rows_affected())
}

// Workouts of the day

pub async fn random_wod(pool: &SqlitePool) -> Result<Wod> {
    Ok(
        sqlx::query_as::<_, Wod>("SELECT * FROM wods ORDER BY RANDOM() LIMIT 1")
            .fetch_one(pool)
            .await?,
    )
}

pub async fn read_all_wods(pool: &SqlitePool) -> Result<Vec<Wod>> {
    Ok(sqlx::query_as::<_, Wod>("SELECT * FROM wods")
        .fetch_all(pool)
        .await?)
}

pub async fn write_wod(pool: &SqlitePool, wod: &Wod) -> Result<i64> {
    let id = sqlx::query("INSERT INTO wods(type, duration, distance, date) VALUES(?, ?, ?, ?)")
        .bind(&wod.kind)
        .bind(wod.duration)
        .bind(wod.distance)
        .bind(wod.date)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(id)
}

pub async fn update_wod(pool: &SqlitePool, wod: &Wod) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE wods SET type=?, duration=?, distance=?, date=?
        WHERE id=?",
    )
    .bind(&wod.kind)
    .bind(wod.duration)
    .bind(wod.distance)
    .bind(wod.date)
    .bind(wod.id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_wod(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM wods WHERE id=?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn empty_wods(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM wods").execute(pool).await?;

    Ok(result.rows_affected())
}

// Weight workout catalog

pub async fn read_weight_workouts(
    pool: &SqlitePool,
    workout_type: &str,
) -> Result<Vec<WeightWorkout>> {
    Ok(sqlx::query_as::<_, WeightWorkout>(
        "SELECT * FROM weight_workouts WHERE workout_type=? ORDER BY id",
    )
    .bind(workout_type)
    .fetch_all(pool)
    .await?)
}

pub async fn read_all_weight_workouts(pool: &SqlitePool) -> Result<Vec<WeightWorkout>> {
    Ok(sqlx::query_as::<_, WeightWorkout>("SELECT * FROM weight_workouts")
        .fetch_all(pool)
        .await?)
}

pub async fn write_weight_workout(pool: &SqlitePool, weight_workout: &WeightWorkout) -> Result<i64> {
    let id = sqlx::query("INSERT INTO weight_workouts(workout_type, exercise) VALUES(?, ?)")
        .bind(&weight_workout.workout_type)
        .bind(&weight_workout.exercise)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(id)
}

pub async fn update_weight_workout(
    pool: &SqlitePool,
    weight_workout: &WeightWorkout,
) -> Result<u64> {
    let result = sqlx::query("UPDATE weight_workouts SET workout_type=?, exercise=? WHERE id=?")
        .bind(&weight_workout.workout_type)
        .bind(&weight_workout.exercise)
        .bind(weight_workout.id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn delete_weight_workout(pool: &SqlitePool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM weight_workouts WHERE id=?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

pub async fn empty_weight_workouts(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM weight_workouts")
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
