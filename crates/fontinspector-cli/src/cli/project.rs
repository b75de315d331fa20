use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ProjectArgs {
    #[command(subcommand)]
    pub command: ProjectCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    Create {
        #[arg(long)]
        name: String,
        /// Repeatable; one pending inspection is created and linked per URL.
        #[arg(long = "url")]
        urls: Vec<String>,
    },
    Get {
        #[arg(long)]
        id: String,
    },
    List,
    Delete {
        #[arg(long)]
        id: String,
    },
}
