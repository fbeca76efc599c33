pub mod admin;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod telemetry;

pub use error::{Error, Result};
pub use models::{Exercise, WeightWorkout, WeightsLog, Wod, Workout};
