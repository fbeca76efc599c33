use std::convert::Infallible;
use std::path::PathBuf;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use tracing::{error, info, info_span, warn};
use tracing_futures::Instrument;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use crate::admin::{self, Table};
use crate::db;
use crate::error::Error;
use crate::models::{WeightsLog, Workout};

const BODY_LIMIT: u64 = 1024 * 16;

#[derive(Debug, Deserialize)]
struct WorkoutTypeQuery {
    #[serde(rename = "type")]
    workout_type: Option<String>,
}

impl WorkoutTypeQuery {
    fn required(self) -> Result<String, Error> {
        self.workout_type
            .filter(|t| !t.is_empty())
            .ok_or(Error::MissingParameter("workout type"))
    }
}

fn json_body<T: DeserializeOwned + Send>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone {
    warp::body::content_length_limit(BODY_LIMIT).and(warp::body::json())
}

fn raw_body() -> impl Filter<Extract = (Bytes,), Error = Rejection> + Clone {
    warp::body::content_length_limit(BODY_LIMIT).and(warp::body::bytes())
}

fn with_pool(pool: SqlitePool) -> impl Filter<Extract = (SqlitePool,), Error = Infallible> + Clone {
    warp::any().map(move || pool.clone())
}

/// Every endpoint plus static files, with errors rendered and each request
/// traced under its own id.
pub fn routes(
    pool: SqlitePool,
    static_dir: PathBuf,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    workout_of_the_day(pool.clone())
        .or(log_cardio(pool.clone()))
        .or(log_weights(pool.clone()))
        .or(cardio_logs(pool.clone()))
        .or(weights_logs(pool.clone()))
        .or(weight_workouts(pool.clone()))
        .or(last_cardio(pool.clone()))
        .or(last_weights(pool.clone()))
        .or(admin_add(pool.clone()))
        .or(admin_update(pool.clone()))
        .or(admin_delete(pool.clone()))
        .or(admin_view(pool.clone()))
        .or(admin_empty(pool))
        .or(static_files(static_dir))
        .recover(handle_rejection)
        .with(warp::trace(|info| {
            info_span!(
                "request",
                request_id = %Uuid::new_v4(),
                method = %info.method(),
                path = %info.path(),
            )
        }))
}

// Filters
pub fn workout_of_the_day(
    pool: SqlitePool,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("workout" / "today")
        .and(warp::get())
        .and(with_pool(pool))
        .and_then(workout_of_the_day_handler)
}

pub fn log_cardio(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("workout" / "log" / "cardio")
        .and(warp::post())
        .and(json_body::<Workout>())
        .and(with_pool(pool))
        .and_then(log_cardio_handler)
}

pub fn log_weights(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("workout" / "log" / "weights")
        .and(warp::post())
        .and(json_body::<WeightsLog>())
        .and(with_pool(pool))
        .and_then(log_weights_handler)
}

pub fn cardio_logs(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("workout" / "logs" / "cardio")
        .and(warp::get())
        .and(with_pool(pool))
        .and_then(cardio_logs_handler)
}

pub fn weights_logs(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("workout" / "logs" / "weights")
        .and(warp::get())
        .and(with_pool(pool))
        .and_then(weights_logs_handler)
}

pub fn weight_workouts(
    pool: SqlitePool,
) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("workout" / "weight-workouts")
        .and(warp::get())
        .and(warp::query::<WorkoutTypeQuery>())
        .and(with_pool(pool))
        .and_then(weight_workouts_handler)
}

pub fn last_cardio(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("workout" / "last" / "cardio")
        .and(warp::get())
        .and(with_pool(pool))
        .and_then(last_cardio_handler)
}

pub fn last_weights(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("workout" / "last" / "weights")
        .and(warp::get())
        .and(warp::query::<WorkoutTypeQuery>())
        .and(with_pool(pool))
        .and_then(last_weights_handler)
}

pub fn admin_add(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("admin" / "add" / String)
        .and(warp::post())
        .and(raw_body())
        .and(with_pool(pool))
        .and_then(admin_add_handler)
}

pub fn admin_update(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("admin" / "update" / String)
        .and(warp::post())
        .and(raw_body())
        .and(with_pool(pool))
        .and_then(admin_update_handler)
}

pub fn admin_delete(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("admin" / "delete" / String)
        .and(warp::post())
        .and(raw_body())
        .and(with_pool(pool))
        .and_then(admin_delete_handler)
}

pub fn admin_view(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("admin" / "view" / String)
        .and(warp::get())
        .and(with_pool(pool))
        .and_then(admin_view_handler)
}

pub fn admin_empty(pool: SqlitePool) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    warp::path!("admin" / "empty" / String)
        .and(warp::post())
        .and(with_pool(pool))
        .and_then(admin_empty_handler)
}

pub fn static_files(dir: PathBuf) -> impl Filter<Extract = impl Reply, Error = Rejection> + Clone {
    // Method is checked after the lookup so unknown paths stay 404 for every verb.
    warp::fs::dir(dir).and(warp::get())
}

// Handlers
async fn workout_of_the_day_handler(pool: SqlitePool) -> Result<impl Reply, Rejection> {
    let wod = db::random_wod(&pool).await?;

    Ok(warp::reply::json(&wod))
}

async fn log_cardio_handler(workout: Workout, pool: SqlitePool) -> Result<impl Reply, Rejection> {
    info!(?workout, "Received cardio workout log request");
    db::write_workout(&pool, &workout).await?;

    Ok(StatusCode::CREATED)
}

async fn log_weights_handler(
    weights_log: WeightsLog,
    pool: SqlitePool,
) -> Result<impl Reply, Rejection> {
    info!(?weights_log, "Received weights log request");
    let span = info_span!(
        "save_weights_log",
        workout_type = %weights_log.workout_type,
        exercises = weights_log.exercises.len(),
    );
    db::save_weights_log(&pool, &weights_log)
        .instrument(span)
        .await?;

    Ok(StatusCode::CREATED)
}

async fn cardio_logs_handler(pool: SqlitePool) -> Result<impl Reply, Rejection> {
    let workouts = db::read_cardio_workouts(&pool).await?;
    info!(count = workouts.len(), "Fetched logged cardio workouts");

    Ok(warp::reply::json(&workouts))
}

async fn weights_logs_handler(pool: SqlitePool) -> Result<impl Reply, Rejection> {
    let logs = db::read_weights_logs(&pool).await?;
    info!(count = logs.len(), "Fetched logged weights workouts");

    Ok(warp::reply::json(&logs))
}

async fn weight_workouts_handler(
    query: WorkoutTypeQuery,
    pool: SqlitePool,
) -> Result<impl Reply, Rejection> {
    let workout_type = query.required()?;
    let catalog = db::read_weight_workouts(&pool, &workout_type).await?;
    info!(%workout_type, count = catalog.len(), "Fetched weight workouts");

    Ok(warp::reply::json(&catalog))
}

async fn last_cardio_handler(pool: SqlitePool) -> Result<impl Reply, Rejection> {
    let workout = db::read_last_cardio_workout(&pool).await?;

    Ok(warp::reply::json(&workout))
}

async fn last_weights_handler(
    query: WorkoutTypeQuery,
    pool: SqlitePool,
) -> Result<impl Reply, Rejection> {
    let workout_type = query.required()?;

    match db::read_last_weights_log(&pool, &workout_type).await? {
        Some(weights_log) => Ok(warp::reply::json(&weights_log)),
        None => {
            info!(%workout_type, "No weights workout found");
            Err(Error::NotFound("No weights workout found".to_string()).into())
        }
    }
}

async fn admin_add_handler(
    table: String,
    body: Bytes,
    pool: SqlitePool,
) -> Result<impl Reply, Rejection> {
    let table: Table = table.parse()?;
    admin::add(&pool, table, &body).await?;

    Ok(StatusCode::CREATED)
}

async fn admin_update_handler(
    table: String,
    body: Bytes,
    pool: SqlitePool,
) -> Result<impl Reply, Rejection> {
    let table: Table = table.parse()?;
    admin::update(&pool, table, &body).await?;

    Ok(StatusCode::OK)
}

async fn admin_delete_handler(
    table: String,
    body: Bytes,
    pool: SqlitePool,
) -> Result<impl Reply, Rejection> {
    let table: Table = table.parse()?;
    admin::delete(&pool, table, &body).await?;

    Ok(StatusCode::OK)
}

async fn admin_view_handler(table: String, pool: SqlitePool) -> Result<impl Reply, Rejection> {
    let table: Table = table.parse()?;
    let records = admin::view(&pool, table).await?;

    Ok(warp::reply::json(&records))
}

async fn admin_empty_handler(table: String, pool: SqlitePool) -> Result<impl Reply, Rejection> {
    let table: Table = table.parse()?;
    admin::empty(&pool, table).await?;

    Ok(StatusCode::OK)
}

/// Turns every rejection into a plain-text response carrying the error message.
pub async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (status, message) = if let Some(e) = err.find::<Error>() {
        (e.status(), e.to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, e.to_string())
    } else if err.find::<warp::reject::InvalidQuery>().is_some() {
        (StatusCode::BAD_REQUEST, "Invalid query string".to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "Payload too large".to_string())
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        (StatusCode::LENGTH_REQUIRED, "Content-Length required".to_string())
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        (
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "Unsupported media type".to_string(),
        )
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not Found".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled rejection: {:?}", err),
        )
    };

    if status.is_server_error() {
        error!(%status, %message, "Request failed");
    } else {
        warn!(%status, %message, "Request rejected");
    }

    Ok(warp::reply::with_status(message, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::tests::{fake_exercise, fake_workout, setup_test_db, weights_log};
    use crate::models::{WeightWorkout, Wod};
    use anyhow::Result;
    use chrono::{Duration, Utc};
    use fake::{Fake, Faker};
    use serde_json::json;

    fn static_dir() -> PathBuf {
        let name: String = Faker.fake::<u64>().to_string();
        let dir = std::env::temp_dir().join(format!("momentum_web_{}", name));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("style.css"), "body { margin: 0; }").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_workout_of_the_day() -> Result<()> {
        let pool = setup_test_db().await?;
        db::seed(&pool).await?;

        let res = warp::test::request()
            .method("GET")
            .path("/workout/today")
            .reply(&routes(pool, static_dir()))
            .await;

        assert_eq!(res.status(), 200);
        let wod: Wod = serde_json::from_slice(res.body())?;
        assert!(db::CARDIO_KINDS.contains(&wod.kind.as_str()));

        Ok(())
    }

    #[tokio::test]
    async fn test_log_cardio() -> Result<()> {
        let pool = setup_test_db().await?;

        let res = warp::test::request()
            .method("POST")
            .path("/workout/log/cardio")
            .json(&json!({"type": "run", "duration": 1530, "distance": 5.2}))
            .reply(&routes(pool.clone(), static_dir()))
            .await;

        assert_eq!(res.status(), 201);

        let workouts = db::read_all_workouts(&pool).await?;
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].kind, "run");
        assert_eq!(workouts[0].duration, 1530.0);

        Ok(())
    }

    #[tokio::test]
    async fn test_log_cardio_malformed_body() -> Result<()> {
        let pool = setup_test_db().await?;

        let res = warp::test::request()
            .method("POST")
            .path("/workout/log/cardio")
            .header("content-type", "application/json")
            .body(r#"{"type": "run", "duration": "#)
            .reply(&routes(pool.clone(), static_dir()))
            .await;

        assert_eq!(res.status(), 400);
        assert!(db::read_all_workouts(&pool).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_oversized_body_is_rejected() -> Result<()> {
        let pool = setup_test_db().await?;
        let filter = routes(pool.clone(), static_dir());
        let body = vec![b' '; BODY_LIMIT as usize + 1];

        for path in ["/workout/log/cardio", "/admin/add/workouts"].iter() {
            let res = warp::test::request()
                .method("POST")
                .path(path)
                .header("content-type", "application/json")
                .body(body.clone())
                .reply(&filter)
                .await;

            assert_eq!(res.status(), 413);
        }
        assert!(db::read_all_workouts(&pool).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_log_weights() -> Result<()> {
        let pool = setup_test_db().await?;

        let log = weights_log("push", vec![fake_exercise("Flat Flys"), fake_exercise("Incline Smith")]);

        let res = warp::test::request()
            .method("POST")
            .path("/workout/log/weights")
            .json(&log)
            .reply(&routes(pool.clone(), static_dir()))
            .await;

        assert_eq!(res.status(), 201);

        let saved = db::read_last_weights_log(&pool, "push")
            .await?
            .expect("log was saved");
        assert_eq!(saved.exercises.len(), 2);
        assert!(saved.exercises.iter().all(|e| e.weights_log_id == saved.id));

        Ok(())
    }

    #[tokio::test]
    async fn test_log_weights_failure_is_server_error() -> Result<()> {
        let pool = setup_test_db().await?;

        let log = weights_log("legs", vec![fake_exercise("Leg Press"), fake_exercise("")]);

        let res = warp::test::request()
            .method("POST")
            .path("/workout/log/weights")
            .json(&log)
            .reply(&routes(pool.clone(), static_dir()))
            .await;

        assert_eq!(res.status(), 500);
        assert!(db::read_weights_logs(&pool).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_cardio_logs() -> Result<()> {
        let pool = setup_test_db().await?;
        let now = Utc::now();

        db::write_workout(&pool, &fake_workout("walk", now - Duration::days(2))).await?;
        db::write_workout(&pool, &fake_workout("squash", now - Duration::days(1))).await?;
        db::write_workout(&pool, &fake_workout("row", now)).await?;

        let res = warp::test::request()
            .method("GET")
            .path("/workout/logs/cardio")
            .reply(&routes(pool, static_dir()))
            .await;

        assert_eq!(res.status(), 200);
        let workouts: Vec<Workout> = serde_json::from_slice(res.body())?;
        let kinds: Vec<&str> = workouts.iter().map(|w| w.kind.as_str()).collect();
        assert_eq!(kinds, vec!["row", "walk"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_weights_logs() -> Result<()> {
        let pool = setup_test_db().await?;

        db::save_weights_log(&pool, &weights_log("pull", vec![fake_exercise("Deadlifts")])).await?;

        let res = warp::test::request()
            .method("GET")
            .path("/workout/logs/weights")
            .reply(&routes(pool, static_dir()))
            .await;

        assert_eq!(res.status(), 200);
        let logs: Vec<WeightsLog> = serde_json::from_slice(res.body())?;
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].workout_type, "pull");
        assert_eq!(logs[0].exercises[0].name, "Deadlifts");

        Ok(())
    }

    #[tokio::test]
    async fn test_weight_workouts_by_type() -> Result<()> {
        let pool = setup_test_db().await?;
        db::seed(&pool).await?;

        let res = warp::test::request()
            .method("GET")
            .path("/workout/weight-workouts?type=legs")
            .reply(&routes(pool, static_dir()))
            .await;

        assert_eq!(res.status(), 200);
        let catalog: Vec<WeightWorkout> = serde_json::from_slice(res.body())?;
        assert_eq!(catalog.len(), 10);
        assert!(catalog.iter().all(|w| w.workout_type == "legs"));

        Ok(())
    }

    #[tokio::test]
    async fn test_weight_workouts_missing_type() -> Result<()> {
        let pool = setup_test_db().await?;
        let filter = routes(pool, static_dir());

        for path in ["/workout/weight-workouts", "/workout/weight-workouts?type="].iter() {
            let res = warp::test::request()
                .method("GET")
                .path(path)
                .reply(&filter)
                .await;

            assert_eq!(res.status(), 400);
            assert_eq!(res.body(), "Missing workout type");
        }

        Ok(())
    }

    #[tokio::test]
    async fn test_last_cardio() -> Result<()> {
        let pool = setup_test_db().await?;
        let now = Utc::now();

        db::write_workout(&pool, &fake_workout("run", now - Duration::hours(3))).await?;
        let id = db::write_workout(&pool, &fake_workout("bike", now)).await?;

        let res = warp::test::request()
            .method("GET")
            .path("/workout/last/cardio")
            .reply(&routes(pool, static_dir()))
            .await;

        assert_eq!(res.status(), 200);
        let workout: Workout = serde_json::from_slice(res.body())?;
        assert_eq!(workout.id, Some(id));

        Ok(())
    }

    #[tokio::test]
    async fn test_last_weights() -> Result<()> {
        let pool = setup_test_db().await?;

        db::save_weights_log(&pool, &weights_log("legs", vec![fake_exercise("Leg Press")])).await?;

        let res = warp::test::request()
            .method("GET")
            .path("/workout/last/weights?type=legs")
            .reply(&routes(pool, static_dir()))
            .await;

        assert_eq!(res.status(), 200);
        let log: WeightsLog = serde_json::from_slice(res.body())?;
        assert_eq!(log.workout_type, "legs");
        assert_eq!(log.exercises[0].name, "Leg Press");

        Ok(())
    }

    #[tokio::test]
    async fn test_last_weights_not_found() -> Result<()> {
        let pool = setup_test_db().await?;

        db::save_weights_log(&pool, &weights_log("push", vec![])).await?;

        let res = warp::test::request()
            .method("GET")
            .path("/workout/last/weights?type=legs")
            .reply(&routes(pool, static_dir()))
            .await;

        assert_eq!(res.status(), 404);
        assert_eq!(res.body(), "No weights workout found");

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_unknown_table() -> Result<()> {
        let pool = setup_test_db().await?;
        let filter = routes(pool.clone(), static_dir());
        let body = json!({"id": 1, "type": "run", "duration": 60, "distance": 1.0});

        for operation in ["add", "update", "delete"].iter() {
            let res = warp::test::request()
                .method("POST")
                .path(&format!("/admin/{}/users", operation))
                .json(&body)
                .reply(&filter)
                .await;

            assert_eq!(res.status(), 400);
            assert_eq!(res.body(), "Invalid table name: users");
        }

        let res = warp::test::request()
            .method("POST")
            .path("/admin/empty/users")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), 400);

        let res = warp::test::request()
            .method("GET")
            .path("/admin/view/users")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), 400);

        assert!(db::read_all_workouts(&pool).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_add_view_delete() -> Result<()> {
        let pool = setup_test_db().await?;
        let filter = routes(pool, static_dir());

        let exp_workout = fake_workout("crosstrainer", Utc::now());

        let res = warp::test::request()
            .method("POST")
            .path("/admin/add/workouts")
            .json(&exp_workout)
            .reply(&filter)
            .await;
        assert_eq!(res.status(), 201);

        let res = warp::test::request()
            .method("GET")
            .path("/admin/view/workouts")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), 200);

        let workouts: Vec<Workout> = serde_json::from_slice(res.body())?;
        assert_eq!(workouts.len(), 1);
        let id = workouts[0].id.expect("stored rows carry an id");
        assert_eq!(
            workouts[0],
            Workout {
                id: Some(id),
                ..exp_workout
            }
        );

        let res = warp::test::request()
            .method("POST")
            .path("/admin/delete/workouts")
            .json(&json!({ "id": id }))
            .reply(&filter)
            .await;
        assert_eq!(res.status(), 200);

        let res = warp::test::request()
            .method("GET")
            .path("/admin/view/workouts")
            .reply(&filter)
            .await;
        assert_eq!(res.body(), "[]");

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_update() -> Result<()> {
        let pool = setup_test_db().await?;

        let mut workout = fake_workout("run", Utc::now());
        let id = db::write_workout(&pool, &workout).await?;
        workout.id = Some(id);
        workout.distance = 10.0;

        let res = warp::test::request()
            .method("POST")
            .path("/admin/update/workouts")
            .json(&workout)
            .reply(&routes(pool.clone(), static_dir()))
            .await;

        assert_eq!(res.status(), 200);
        assert_eq!(db::read_all_workouts(&pool).await?, vec![workout]);

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_empty_weights_logs() -> Result<()> {
        let pool = setup_test_db().await?;

        db::save_weights_log(
            &pool,
            &weights_log("push", vec![fake_exercise("Flat Flys"), fake_exercise("Flat Dumbbells")]),
        )
        .await?;

        let res = warp::test::request()
            .method("POST")
            .path("/admin/empty/weights_logs")
            .reply(&routes(pool.clone(), static_dir()))
            .await;

        assert_eq!(res.status(), 200);
        assert!(db::read_all_weights_logs(&pool).await?.is_empty());
        assert!(db::read_all_exercises(&pool).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_static_files() -> Result<()> {
        let pool = setup_test_db().await?;
        let filter = routes(pool, static_dir());

        let res = warp::test::request()
            .method("GET")
            .path("/style.css")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), 200);
        assert_eq!(res.body(), "body { margin: 0; }");

        let res = warp::test::request()
            .method("GET")
            .path("/missing.js")
            .reply(&filter)
            .await;
        assert_eq!(res.status(), 404);

        Ok(())
    }

    #[tokio::test]
    async fn test_wrong_method() -> Result<()> {
        let pool = setup_test_db().await?;

        let res = warp::test::request()
            .method("GET")
            .path("/workout/log/cardio")
            .reply(&routes(pool, static_dir()))
            .await;

        assert_eq!(res.status(), 405);

        Ok(())
    }
}
