//! LazyDo command-line view layer.
//!
//! # Responsibility
//! - Collect raw form input from argv and hand it to the validation
//!   contract untouched.
//! - Render whatever sequence the store currently holds.
//!
//! # Invariants
//! - No business logic lives here; rejected submissions never reach the
//!   store.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lazydo_core::db::open_db;
use lazydo_core::{
    default_log_level, init_logging, validate, PersistStatus, SqliteStateRepository, TaskForm,
    TodoStore,
};
use std::path::PathBuf;
use std::process::ExitCode;
use uuid::Uuid;

const DB_FILE_NAME: &str = "lazydo.sqlite3";

/// LazyDo - personal activity tracker
#[derive(Parser, Debug)]
#[command(name = "lazydo")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory holding the task database and logs
    #[arg(long, default_value = ".")]
    data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a task entry after validating the submitted fields
    Add {
        /// Activity label
        #[arg(long)]
        activity: String,

        /// Price as numeric text, e.g. "0" or "12.50"
        #[arg(long)]
        price: String,

        /// Category name (education, recreational, social, diy, charity,
        /// cooking, relaxation, music, busywork)
        #[arg(long = "type")]
        category: String,

        /// Whether the activity needs a booking ahead of time
        #[arg(long)]
        booking_required: bool,

        /// Accessibility score between 0.0 and 1.0 (defaults to 0.5)
        #[arg(long)]
        accessibility: Option<f64>,
    },

    /// List all task entries in insertion order
    List,

    /// Remove a task entry by id (unknown ids are a quiet no-op)
    Remove {
        /// Task id as printed by `add` and `list`
        id: Uuid,
    },

    /// Print the number of task entries
    Count,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let data_dir = prepare_data_dir(&cli.data_dir)?;

    let log_dir = data_dir.join("logs");
    let log_dir_str = log_dir
        .to_str()
        .context("log directory path is not valid UTF-8")?;
    let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
    init_logging(level, log_dir_str).map_err(anyhow::Error::msg)?;

    let conn = open_db(data_dir.join(DB_FILE_NAME)).context("failed to open task storage")?;
    let mut store = TodoStore::load(SqliteStateRepository::new(&conn));

    match cli.command {
        Commands::Add {
            activity,
            price,
            category,
            booking_required,
            accessibility,
        } => {
            let form = TaskForm {
                activity,
                price,
                category,
                booking_required: Some(booking_required),
                accessibility,
            };

            match validate(&form) {
                Ok(draft) => {
                    let (id, status) = store.add(draft);
                    println!("added {id}");
                    report_persist_status(status);
                    Ok(ExitCode::SUCCESS)
                }
                Err(errors) => {
                    for (field, error) in errors.iter() {
                        eprintln!("{field}: {error}");
                    }
                    Ok(ExitCode::FAILURE)
                }
            }
        }

        Commands::List => {
            render_list(&store);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Remove { id } => {
            let status = store.remove(id);
            println!("removed {id}");
            report_persist_status(status);
            Ok(ExitCode::SUCCESS)
        }

        Commands::Count => {
            println!("{}", store.count());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn prepare_data_dir(data_dir: &PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(data_dir).with_context(|| {
        format!("failed to create data directory `{}`", data_dir.display())
    })?;
    // Logging init requires an absolute directory.
    data_dir.canonicalize().with_context(|| {
        format!("failed to resolve data directory `{}`", data_dir.display())
    })
}

fn report_persist_status(status: PersistStatus) {
    if let PersistStatus::WriteFailed(err) = status {
        eprintln!("warning: state kept in memory but not persisted: {err}");
    }
}

fn render_list(store: &TodoStore<SqliteStateRepository<'_>>) {
    if store.count() == 0 {
        println!("no tasks");
        return;
    }

    for task in store.tasks() {
        println!(
            "{}  {:<12}  price={:<8}  booking={}  accessibility={:.1}  {}",
            task.id,
            task.category,
            task.price,
            if task.booking_required { "yes" } else { "no" },
            task.accessibility,
            task.activity,
        );
    }
    println!("{} task(s)", store.count());
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_well_formed() {
        Cli::command().debug_assert();
    }
}
