use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct QueueArgs {
    #[command(subcommand)]
    pub command: QueueCommand,
}

#[derive(Debug, Subcommand)]
pub enum QueueCommand {
    Status {
        #[arg(long)]
        project_id: Option<String>,
    },
    Work {
        #[arg(long, default_value_t = 20)]
        iterations: u32,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long, default_value_t = 500)]
        sleep_ms: u64,
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        stop_when_idle: bool,
    },
}
