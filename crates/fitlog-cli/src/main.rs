//! Fitlog CLI - training tracker front end
//!
//! The dashboard surface over `fitlog-core` / `fitlog-store`: tables and
//! plot-ready series for one user's workbook, plus the save action that
//! appends set progress to a per-exercise log.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use fitlog_core::{measurement_series, weight_series, Metric, SetEntry};
use fitlog_store::{DataDir, ProgressLog, UserWorkbook};

#[derive(Parser)]
#[command(name = "fitlog")]
#[command(author, version, about = "Personal training tracker over spreadsheet workbooks")]
struct Cli {
    /// Directory holding the per-user workbooks
    #[arg(long, default_value = "data", global = true)]
    data_dir: PathBuf,

    /// User identifier (resolves the workbook <data-dir>/<user>.xlsx)
    #[arg(short, long, global = true, default_value = "")]
    user: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which sheets the user's workbook provides
    Info,

    /// Print the body-measurement table
    Measures {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the (date, value) series of one metric, for plotting
    Series {
        /// Metric name: peso, pecho, cintura, gluteos, brazo or pierna
        #[arg(short, long)]
        metric: String,
    },

    /// Print the nutrition plan
    Nutrition,

    /// Print the routine, optionally filtered by day and muscle group
    Routine {
        /// Training day, e.g. "Lunes"
        #[arg(short, long)]
        day: Option<String>,

        /// Muscle group, e.g. "Pecho" (requires --day)
        #[arg(short, long)]
        group: Option<String>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the distinct training days of the routine
    Days,

    /// List the muscle groups trained on one day
    Groups {
        /// Training day, e.g. "Lunes"
        #[arg(short, long)]
        day: String,
    },

    /// Append one session's sets to an exercise's progress log
    Log {
        /// Exercise name, e.g. "Press banca"
        #[arg(short, long)]
        exercise: String,

        /// Session date (YYYY-MM-DD, default: today)
        #[arg(long)]
        date: Option<String>,

        /// One set as REPSxPESOxDESCANSO, e.g. 10x50x60; repeatable, in order
        #[arg(short, long = "set", required = true)]
        sets: Vec<String>,
    },

    /// Print the logged history of one exercise
    History {
        /// Exercise name, e.g. "Press banca"
        #[arg(short, long)]
        exercise: String,

        /// Print the (date, weight) series instead of the full table
        #[arg(long)]
        series: bool,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let dir = DataDir::new(&cli.data_dir);
    if cli.user.is_empty() {
        bail!("a user identifier is required (--user)");
    }

    match cli.command {
        Commands::Info => info(&dir, &cli.user),
        Commands::Measures { json } => measures(&dir, &cli.user, json),
        Commands::Series { metric } => series(&dir, &cli.user, &metric),
        Commands::Nutrition => nutrition(&dir, &cli.user),
        Commands::Routine { day, group, json } => routine(&dir, &cli.user, day, group, json),
        Commands::Days => days(&dir, &cli.user),
        Commands::Groups { day } => groups(&dir, &cli.user, &day),
        Commands::Log {
            exercise,
            date,
            sets,
        } => log_sets(&dir, &cli.user, &exercise, date.as_deref(), &sets),
        Commands::History {
            exercise,
            series,
            json,
        } => history(&dir, &cli.user, &exercise, series, json),
    }
}

fn open(dir: &DataDir, user: &str) -> Result<UserWorkbook> {
    UserWorkbook::open(dir, user).map_err(Into::into)
}

/// Per-sheet isolation: one unreadable sheet becomes a warning, the
/// remaining sheets still render.
fn info(dir: &DataDir, user: &str) -> Result<()> {
    let mut workbook = open(dir, user)?;

    match workbook.personal_data() {
        Ok(data) => {
            let name = data.name.as_deref().unwrap_or("-");
            let goal = data.goal.as_deref().unwrap_or("-");
            println!("Datos:     {name} (objetivo: {goal})");
        }
        Err(e) => eprintln!("Warning: {e}"),
    }
    match workbook.measurements() {
        Ok(records) => println!("Medidas:   {} record(s)", records.len()),
        Err(e) => eprintln!("Warning: {e}"),
    }
    match workbook.nutrition() {
        Ok(records) => println!("Nutricion: {} record(s)", records.len()),
        Err(e) => eprintln!("Warning: {e}"),
    }
    match workbook.routine() {
        Ok(routine) => println!(
            "Rutina:    {} entries over {} day(s)",
            routine.len(),
            routine.days().len()
        ),
        Err(e) => eprintln!("Warning: {e}"),
    }
    Ok(())
}

fn measures(dir: &DataDir, user: &str, json: bool) -> Result<()> {
    let records = open(dir, user)?.measurements()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    print!("{:<12}", "Fecha");
    for metric in Metric::ALL {
        print!("  {:>14}", metric.header());
    }
    println!();
    for record in &records {
        print!("{:<12}", record.date.to_string());
        for metric in Metric::ALL {
            match metric.value(record) {
                Some(v) => print!("  {v:>14.1}"),
                None => print!("  {:>14}", "-"),
            }
        }
        println!();
    }
    Ok(())
}

fn series(dir: &DataDir, user: &str, metric: &str) -> Result<()> {
    let metric: Metric = metric.parse()?;
    let records = open(dir, user)?.measurements()?;
    for (date, value) in measurement_series(&records, metric) {
        println!("{date}\t{value}");
    }
    Ok(())
}

fn nutrition(dir: &DataDir, user: &str) -> Result<()> {
    let records = open(dir, user)?.nutrition()?;
    for record in &records {
        let meals: Vec<String> = record
            .meals
            .iter()
            .map(|(name, text)| format!("{name}: {text}"))
            .collect();
        println!("{}  {}", record.date, meals.join(" | "));
    }
    Ok(())
}

fn routine(
    dir: &DataDir,
    user: &str,
    day: Option<String>,
    group: Option<String>,
    json: bool,
) -> Result<()> {
    let routine = open(dir, user)?.routine()?;
    let entries: Vec<_> = match (&day, &group) {
        (Some(day), Some(group)) => routine.filter_day_group(day, group),
        (Some(day), None) => routine.filter_day(day),
        (None, Some(_)) => bail!("--group requires --day"),
        (None, None) => routine.entries().iter().collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{:<12}{:<16}{:<24}{:>7}{:>6}{:>10}{:>10}",
        "Día", "Grupo", "Ejercicio", "Series", "Reps", "Peso", "Descanso"
    );
    for entry in entries {
        println!(
            "{:<12}{:<16}{:<24}{:>7}{:>6}{:>10}{:>10}",
            entry.day,
            entry.muscle_group,
            entry.exercise,
            fmt_opt_u32(entry.sets),
            fmt_opt_u32(entry.reps),
            fmt_opt_f64(entry.weight_kg),
            fmt_opt_f64(entry.rest_min),
        );
    }
    Ok(())
}

fn days(dir: &DataDir, user: &str) -> Result<()> {
    for day in open(dir, user)?.routine()?.days() {
        println!("{day}");
    }
    Ok(())
}

fn groups(dir: &DataDir, user: &str, day: &str) -> Result<()> {
    for group in open(dir, user)?.routine()?.muscle_groups(day) {
        println!("{group}");
    }
    Ok(())
}

fn log_sets(
    dir: &DataDir,
    user: &str,
    exercise: &str,
    date: Option<&str>,
    sets: &[String],
) -> Result<()> {
    let date = match date {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{text}', expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };
    let sets: Vec<SetEntry> = sets
        .iter()
        .map(|spec| parse_set(spec))
        .collect::<Result<_>>()?;

    ProgressLog::append(dir, user, exercise, date, &sets)
        .with_context(|| format!("failed to save progress for '{exercise}'"))?;
    println!("Saved {} set(s) for '{exercise}' on {date}", sets.len());
    Ok(())
}

/// Parse a REPSxPESOxDESCANSO spec like `10x50x60` or `8x52.5x90`
fn parse_set(spec: &str) -> Result<SetEntry> {
    let parts: Vec<&str> = spec.split('x').collect();
    if parts.len() != 3 {
        bail!("invalid set '{spec}', expected REPSxPESOxDESCANSO, e.g. 10x50x60");
    }
    let reps = parts[0]
        .trim()
        .parse()
        .with_context(|| format!("invalid reps in '{spec}'"))?;
    let weight_kg = parts[1]
        .trim()
        .parse()
        .with_context(|| format!("invalid weight in '{spec}'"))?;
    let rest_sec = parts[2]
        .trim()
        .parse()
        .with_context(|| format!("invalid rest in '{spec}'"))?;
    Ok(SetEntry::new(reps, weight_kg, rest_sec))
}

fn history(dir: &DataDir, user: &str, exercise: &str, series: bool, json: bool) -> Result<()> {
    let entries = ProgressLog::read_history(dir, user, exercise)?;

    if series {
        for (date, weight) in weight_series(&entries) {
            println!("{date}\t{weight}");
        }
        return Ok(());
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!(
        "{:<12}{:>6}{:>6}{:>10}{:>10}",
        "Fecha", "Serie", "Reps", "Peso", "Descanso"
    );
    for entry in &entries {
        println!(
            "{:<12}{:>6}{:>6}{:>10.1}{:>10.0}",
            entry.date.to_string(),
            entry.set_number,
            entry.reps,
            entry.weight_kg,
            entry.rest_sec
        );
    }
    Ok(())
}

fn fmt_opt_u32(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn fmt_opt_f64(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}
