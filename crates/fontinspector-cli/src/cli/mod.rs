use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;
mod inspection;
mod project;
mod queue;
mod trace;

pub use args::{LinkArgs, RebuildArgs, RebuildCommand, WebArgs};
pub use inspection::{InspectionArgs, InspectionCommand};
pub use project::{ProjectArgs, ProjectCommand};
pub use queue::{QueueArgs, QueueCommand};
pub use trace::{TraceArgs, TraceCommand};

#[derive(Debug, Parser)]
#[command(name = "fontinspector")]
#[command(about = "Font inspection projects, queue, and link maintenance", version)]
pub struct Cli {
    #[arg(long, default_value = ".fontinspector")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Init,
    Project(ProjectArgs),
    Inspection(InspectionArgs),
    Link(LinkArgs),
    Unlink(LinkArgs),
    Rebuild(RebuildArgs),
    Queue(QueueArgs),
    Trace(TraceArgs),
    Web(WebArgs),
}
