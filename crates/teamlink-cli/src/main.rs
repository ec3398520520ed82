//! TeamLink CLI - Convert team records to and from the agent-mail schema.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use teamlink_core::{Heartbeat, OutboundMessage, TeamTask, WorkerMember};
use teamlink_proto::{convert, resolve_state_root, wire};

mod config;
mod error;

use config::Config;
use error::CliError;

/// TeamLink CLI - agent-mail schema adapter
#[derive(Parser, Debug)]
#[command(name = "teamlink")]
#[command(about = "Convert team orchestration records to and from agent-mail", long_about = None)]
struct Cli {
    /// Read the input record from this file instead of stdin
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Convert a task file into a wire task
    #[command(name = "to-task")]
    ToTask,

    /// Convert a wire task into a task file
    #[command(name = "from-task")]
    FromTask,

    /// Convert an outbox message into a wire message
    #[command(name = "to-message")]
    ToMessage {
        /// Worker sending the message
        #[arg(short, long)]
        sender: String,
    },

    /// Convert a wire message into an inbox message
    #[command(name = "from-message")]
    FromMessage,

    /// Convert a worker heartbeat into a wire heartbeat
    #[command(name = "to-heartbeat")]
    ToHeartbeat,

    /// Convert a wire heartbeat into a worker heartbeat
    #[command(name = "from-heartbeat")]
    FromHeartbeat {
        /// Worker name used when the heartbeat does not carry one
        #[arg(short, long)]
        worker: String,

        /// Team name used when the heartbeat does not carry one
        #[arg(short, long)]
        team: String,
    },

    /// Convert a team member into a wire roster entry
    #[command(name = "to-worker-info")]
    ToWorkerInfo,

    /// Print the state root for a working directory
    #[command(name = "state-root")]
    StateRoot {
        /// Working directory (defaults to the current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,
    },
}

impl Commands {
    /// Returns true if the command converts an input record.
    fn needs_input(&self) -> bool {
        !matches!(self, Self::StateRoot { .. })
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            pretty: !cli.compact,
            log_level: cli.log_level.clone(),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from(&cli);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let input = if cli.command.needs_input() {
        read_input(&config)?
    } else {
        String::new()
    };

    let output = run_command(&cli.command, &config, &input)?;
    println!("{}", output);

    Ok(())
}

fn read_input(config: &Config) -> Result<String, CliError> {
    match &config.input {
        Some(path) => {
            debug!(path = %path.display(), "Reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Run one command against an input document and render the result.
fn run_command(command: &Commands, config: &Config, input: &str) -> Result<String, CliError> {
    info!(command = ?command, "Converting record");

    match command {
        Commands::ToTask => {
            let task: TeamTask = parse(input, "task file")?;
            render(&convert::to_task(&task), config)
        }
        Commands::FromTask => {
            let item: wire::TaskItem = parse(input, "wire task")?;
            render(&convert::from_task(&item), config)
        }
        Commands::ToMessage { sender } => {
            let msg: OutboundMessage = parse(input, "outbox message")?;
            render(&convert::to_message(&msg, sender), config)
        }
        Commands::FromMessage => {
            let msg: wire::Message = parse(input, "wire message")?;
            render(&convert::from_message(&msg), config)
        }
        Commands::ToHeartbeat => {
            let hb: Heartbeat = parse(input, "heartbeat")?;
            render(&convert::to_heartbeat(&hb), config)
        }
        Commands::FromHeartbeat { worker, team } => {
            let hb: wire::Heartbeat = parse(input, "wire heartbeat")?;
            render(&convert::from_heartbeat(&hb, worker, team), config)
        }
        Commands::ToWorkerInfo => {
            let member: WorkerMember = parse(input, "team member")?;
            render(&convert::to_worker_info(&member), config)
        }
        Commands::StateRoot { cwd } => {
            let cwd = match cwd {
                Some(path) => path.clone(),
                None => std::env::current_dir()?,
            };
            Ok(resolve_state_root(cwd).display().to_string())
        }
    }
}

fn parse<T: DeserializeOwned>(input: &str, record: &'static str) -> Result<T, CliError> {
    serde_json::from_str(input).map_err(|source| CliError::InvalidRecord { record, source })
}

fn render<T: Serialize>(value: &T, config: &Config) -> Result<String, CliError> {
    let json = if config.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
