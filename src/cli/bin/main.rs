// Std
use std::env;

// Crates
use anyhow::{anyhow, bail, Context, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};
use clap::{crate_version, value_parser, Arg, ArgAction, Command};
use dotenv::dotenv;
use http::StatusCode;
use indexmap::{indexmap, IndexMap};
use prettytable::{color, row, Attr, Cell, Row, Table};
use reqwest::Client;

// Local
use momentum::db::CARDIO_KINDS;
use momentum::{WeightWorkout, WeightsLog, Wod, Workout};

struct MinutesRow {
    kind: String,
    minutes: IndexMap<String, f64>,
}

impl MinutesRow {
    fn new(kind: &str) -> Self {
        MinutesRow {
            kind: kind.to_string(),
            minutes: indexmap! {
                "Sun".to_string() => 0.0,
                "Mon".to_string() => 0.0,
                "Tue".to_string() => 0.0,
                "Wed".to_string() => 0.0,
                "Thu".to_string() => 0.0,
                "Fri".to_string() => 0.0,
                "Sat".to_string() => 0.0,
            },
        }
    }

    fn convert_to_row(&self, text_color: color::Color) -> Row {
        let mut cells: Vec<Cell> = Vec::new();
        cells.push(Cell::new(&self.kind).with_style(Attr::ForegroundColor(text_color)));
        for (_, value) in self.minutes.iter() {
            cells.push(
                Cell::new(&format!("{:.0}", value)).with_style(Attr::ForegroundColor(text_color)),
            );
        }
        Row::new(cells)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let base_url: String = env::var("BASE_URL").context("BASE_URL env var must be set!")?;

    let client = Client::new();

    let matches = Command::new("momentum")
        .version(crate_version!())
        .about("A workout-logging command line program.")
        .arg(
            Arg::new("today")
                .short('t')
                .long("today")
                .action(ArgAction::SetTrue)
                .help("Display the workout of the day."),
        )
        .arg(
            Arg::new("cardio")
                .short('c')
                .long("cardio")
                .num_args(3)
                .value_names(["type", "duration", "distance"])
                .help("Log a cardio session. Duration is MM or MM:SS, distance in km."),
        )
        .arg(
            Arg::new("last_cardio")
                .long("last-cardio")
                .action(ArgAction::SetTrue)
                .help("Display the most recent cardio session."),
        )
        .arg(
            Arg::new("last")
                .short('l')
                .long("last")
                .value_name("type")
                .help("Display the most recent weights session of a type (push, pull, legs)."),
        )
        .arg(
            Arg::new("catalog")
                .long("catalog")
                .value_name("type")
                .help("List the catalog exercises for a weights type."),
        )
        .arg(
            Arg::new("week")
                .short('w')
                .long("week")
                .value_name("weeks_ago")
                .value_parser(value_parser!(i64))
                .help("Print weekly cardio report. 0 is the current week."),
        )
        .get_matches();

    if matches.get_flag("today") {
        match display_workout_of_the_day(&base_url, &client).await {
            Ok(table) => table.printstd(),
            Err(e) => {
                eprintln!("Error: {:?}", e);
                std::process::exit(1);
            }
        }
    }

    if let Some(values) = matches.get_many::<String>("cardio") {
        let values: Vec<&str> = values.map(|v| v.as_str()).collect();
        match log_cardio(&base_url, &client, &values).await {
            Ok(_) => println!("Cardio session logged."),
            Err(e) => {
                eprintln!("Error logging cardio session: {}", e);
                std::process::exit(1);
            }
        }
    }

    if matches.get_flag("last_cardio") {
        match display_last_cardio(&base_url, &client).await {
            Ok(table) => table.printstd(),
            Err(e) => {
                eprintln!("Error: {:?}", e);
                std::process::exit(1);
            }
        }
    }

    if let Some(workout_type) = matches.get_one::<String>("last") {
        match display_last_weights(&base_url, &client, workout_type).await {
            Ok(Some(table)) => table.printstd(),
            Ok(None) => println!("No {} workout logged yet.", workout_type),
            Err(e) => {
                eprintln!("Error: {:?}", e);
                std::process::exit(1);
            }
        }
    }

    if let Some(workout_type) = matches.get_one::<String>("catalog") {
        let url = format!("{}/workout/weight-workouts", &base_url);
        let catalog = client
            .get(&url)
            .query(&[("type", workout_type)])
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<WeightWorkout>>()
            .await?;

        let mut table = Table::new();
        table.add_row(row![Fb => "Type", "Exercise"]);

        for entry in catalog {
            table.add_row(row![entry.workout_type, entry.exercise]);
        }
        table.printstd();
    }

    if let Some(weeks_ago) = matches.get_one::<i64>("week") {
        create_weekly_report(&base_url, &client, *weeks_ago).await?;
    }

    Ok(())
}

async fn display_workout_of_the_day(base_url: &str, client: &Client) -> Result<Table> {
    let url = format!("{}/workout/today", base_url);
    let wod = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Wod>()
        .await?;

    let mut table = Table::new();
    table.add_row(row![Fb => "Type", "Minutes", "Distance (km)"]);
    table.add_row(row![wod.kind, wod.duration, wod.distance]);

    Ok(table)
}

async fn log_cardio(base_url: &str, client: &Client, values: &[&str]) -> Result<()> {
    let kind = values[0].to_lowercase();
    if !CARDIO_KINDS.contains(&kind.as_str()) {
        bail!(
            "unknown cardio type '{}', expected one of: {}",
            values[0],
            CARDIO_KINDS.join(", ")
        );
    }

    let duration = parse_duration(values[1])?;
    let distance: f64 = values[2]
        .parse()
        .with_context(|| format!("invalid distance '{}'", values[2]))?;

    let workout = Workout {
        id: None,
        kind,
        duration,
        distance,
        date: chrono::Utc::now(),
    };

    let url = format!("{}/workout/log/cardio", base_url);
    let res = client.post(&url).json(&workout).send().await?;

    match res.status() {
        StatusCode::CREATED => Ok(()),
        status => Err(anyhow!("Status code: {}", status)),
    }
}

/// Parses `MM` or `MM:SS` into seconds.
fn parse_duration(value: &str) -> Result<f64> {
    let (minutes, seconds) = match value.split_once(':') {
        Some((minutes, seconds)) => (minutes, seconds),
        None => (value, "0"),
    };

    let minutes: u32 = minutes
        .parse()
        .with_context(|| format!("invalid duration '{}'", value))?;
    let seconds: u32 = seconds
        .parse()
        .with_context(|| format!("invalid duration '{}'", value))?;
    if seconds >= 60 {
        bail!("invalid duration '{}': seconds must be below 60", value);
    }

    let total = minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| anyhow!("invalid duration '{}': too long", value))?;

    Ok(f64::from(total))
}

fn format_duration(seconds: f64) -> String {
    let total = seconds.round() as i64;
    format!("{}m {}s", total / 60, total % 60)
}

async fn display_last_cardio(base_url: &str, client: &Client) -> Result<Table> {
    let url = format!("{}/workout/last/cardio", base_url);
    let w = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Workout>()
        .await?;

    let mut table = Table::new();
    table.add_row(row![Fb => "Type", "Duration", "Distance (km)", "Date"]);
    table.add_row(row![
        w.kind,
        format_duration(w.duration),
        w.distance,
        w.date.with_timezone(&Local).format("%Y-%m-%d %H:%M")
    ]);

    Ok(table)
}

async fn display_last_weights(
    base_url: &str,
    client: &Client,
    workout_type: &str,
) -> Result<Option<Table>> {
    let url = format!("{}/workout/last/weights", base_url);
    let res = client
        .get(&url)
        .query(&[("type", workout_type)])
        .send()
        .await?;

    if res.status() == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    let log = res.error_for_status()?.json::<WeightsLog>().await?;

    let date = log.date.with_timezone(&Local).format("%Y-%m-%d %H:%M");
    let mut table = Table::new();
    table.add_row(row![Fb => "Exercise", "Set 1", "Set 2", "Set 3", "Date"]);
    for e in log.exercises {
        table.add_row(row![e.name, e.set1, e.set2, e.set3, date]);
    }

    Ok(Some(table))
}

/// Minutes of cardio per type and weekday for the week starting on `week_beginning`.
fn weekly_minutes(workouts: &[Workout], week_beginning: NaiveDate) -> Vec<MinutesRow> {
    let week_ending = week_beginning + Duration::days(7);
    let mut rows: IndexMap<String, MinutesRow> = IndexMap::new();

    for workout in workouts {
        let local = workout.date.with_timezone(&Local);
        let day = local.date_naive();
        if day < week_beginning || day >= week_ending {
            continue;
        }

        let kind = workout.kind.to_lowercase();
        let row = rows
            .entry(kind.clone())
            .or_insert_with(|| MinutesRow::new(&kind));
        let m = row.minutes.entry(local.weekday().to_string()).or_insert(0.0);
        *m += workout.duration / 60.0;
    }

    rows.sort_keys();
    rows.into_values().collect()
}

async fn create_weekly_report(base_url: &str, client: &Client, weeks_ago: i64) -> Result<()> {
    let today = Local::now().date_naive();
    let offset = i64::from(today.weekday().num_days_from_sunday()) + (7 * weeks_ago);
    let week_beginning = today - Duration::days(offset);

    let url = format!("{}/workout/logs/cardio", base_url);
    let workouts = client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<Workout>>()
        .await?;

    let mut table = Table::new();
    table.add_row(row![Fb => "Type", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"]);

    for (index, minutes_row) in weekly_minutes(&workouts, week_beginning).iter().enumerate() {
        let text_color = if index % 2 == 1 {
            color::MAGENTA
        } else {
            color::WHITE
        };
        table.add_row(minutes_row.convert_to_row(text_color));
    }

    println!("Week of {}", week_beginning);
    table.printstd();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn workout_at(kind: &str, seconds: f64, y: i32, m: u32, d: u32, h: u32) -> Workout {
        Workout {
            id: None,
            kind: kind.to_string(),
            duration: seconds,
            distance: 5.0,
            date: Local
                .with_ymd_and_hms(y, m, d, h, 0, 0)
                .unwrap()
                .with_timezone(&Utc),
        }
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("30").unwrap(), 1800.0);
        assert_eq!(parse_duration("25:30").unwrap(), 1530.0);
        assert!(parse_duration("25:75").is_err());
        assert!(parse_duration("half an hour").is_err());
        assert!(parse_duration("71582789").is_err());
        assert!(parse_duration("71582788:59").is_err());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1530.0), "25m 30s");
        assert_eq!(format_duration(59.6), "1m 0s");
    }

    #[test]
    fn test_weekly_minutes() {
        // Sunday 2024-03-03 starts the week.
        let week_beginning = NaiveDate::from_ymd_opt(2024, 3, 3).unwrap();
        let workouts = vec![
            workout_at("run", 1800.0, 2024, 3, 4, 7),
            workout_at("Run", 600.0, 2024, 3, 4, 18),
            workout_at("bike", 3600.0, 2024, 3, 9, 10),
            workout_at("row", 1200.0, 2024, 3, 2, 9),
            workout_at("walk", 1200.0, 2024, 3, 10, 9),
        ];

        let rows = weekly_minutes(&workouts, week_beginning);
        let kinds: Vec<&str> = rows.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec!["bike", "run"]);

        assert_eq!(rows[0].minutes["Sat"], 60.0);
        assert_eq!(rows[1].minutes["Mon"], 40.0);
        assert_eq!(rows[1].minutes["Tue"], 0.0);
    }
}
