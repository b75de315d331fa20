use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct InspectionArgs {
    #[command(subcommand)]
    pub command: InspectionCommand,
}

#[derive(Debug, Subcommand)]
pub enum InspectionCommand {
    Create {
        #[arg(long)]
        url: String,
        #[arg(long)]
        project_id: Option<String>,
    },
    Get {
        #[arg(long)]
        id: String,
    },
    List {
        #[arg(long)]
        project_id: Option<String>,
    },
    Run {
        #[arg(long)]
        id: String,
    },
    Delete {
        #[arg(long)]
        id: String,
    },
}
