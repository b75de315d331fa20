use std::path::Path;

use anyhow::{Context, Result};
use fontinspector_core::FontInspector;

use crate::cli::{Commands, QueueCommand};

mod handlers;
mod queue;

use self::handlers::{handle_inspection, handle_project, handle_rebuild, handle_trace};
use self::queue::run_queue_worker;

pub(crate) fn run_from_root(root: &Path, command: Commands) -> Result<()> {
    let app = FontInspector::new(root).context("failed to create app")?;
    app.initialize().context("failed to initialize workspace")?;

    match command {
        Commands::Init => {
            println!("initialized at {}", root.display());
        }
        Commands::Project(args) => handle_project(&app, args.command)?,
        Commands::Inspection(args) => handle_inspection(&app, args.command)?,
        Commands::Link(args) => {
            let change = app.link(&args.project_id, &args.inspection_id)?;
            print_json(&change)?;
        }
        Commands::Unlink(args) => {
            let change = app.unlink(&args.project_id, &args.inspection_id)?;
            print_json(&change)?;
        }
        Commands::Rebuild(args) => handle_rebuild(&app, args.command)?,
        Commands::Queue(args) => match args.command {
            QueueCommand::Status { project_id } => {
                let snapshot = app.queue_snapshot(project_id.as_deref())?;
                print_json(&snapshot)?;
            }
            QueueCommand::Work {
                iterations,
                limit,
                sleep_ms,
                stop_when_idle,
            } => {
                let report = run_queue_worker(&app, iterations, limit, sleep_ms, stop_when_idle)?;
                print_json(&report)?;
            }
        },
        Commands::Trace(args) => handle_trace(&app, args.command)?,
        Commands::Web(args) => {
            fontinspector_web::serve_web(app, &args.host, args.port)?;
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
