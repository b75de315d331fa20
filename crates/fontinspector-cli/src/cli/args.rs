use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct LinkArgs {
    #[arg(long)]
    pub project_id: String,
    #[arg(long)]
    pub inspection_id: String,
}

#[derive(Debug, Args)]
pub struct RebuildArgs {
    #[command(subcommand)]
    pub command: RebuildCommand,
}

#[derive(Debug, Subcommand)]
pub enum RebuildCommand {
    Run {
        #[arg(long, default_value_t = false)]
        dry_run: bool,
        #[arg(long, default_value_t = 50)]
        max_orphan_sample: usize,
    },
    History {
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
}

#[derive(Debug, Args)]
pub struct WebArgs {
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
    #[arg(long, default_value_t = 8080)]
    pub port: u16,
}
