use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use lumen_client::{CommandOutcome, LumenAgent};
use shared::domain::{Command, Mode};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod console;
mod input;

use config::{load_settings, DEFAULT_CONFIG_PATH};
use console::ConsoleSurface;
use input::{parse_line, UserInput};

type Agent = Arc<LumenAgent<ConsoleSurface>>;

#[derive(Parser, Debug)]
#[command(name = "lumen-agent", about = "Presentation agent for a Lumen device")]
struct Args {
    /// Lumen service base url; overrides config file and environment.
    #[arg(long, global = true)]
    server_url: Option<String>,
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Poll continuously; read `mode <name>`, `scene <name>` or `quit` from stdin.
    Watch,
    /// Poll once and print the resulting status.
    Status,
    /// Switch the device mode, then poll once.
    Mode { mode: Mode },
    /// Switch the device scene, then poll once.
    Scene { name: String },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = load_settings(&args.config)?;
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_filter))
        .with_context(|| format!("invalid log filter '{}'", settings.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let agent = LumenAgent::new(&settings.server_url, ConsoleSurface::new())?;
    info!(server_url = %settings.server_url, "lumen agent ready");

    match args.command.unwrap_or(CliCommand::Watch) {
        CliCommand::Watch => watch(agent).await,
        CliCommand::Status => {
            agent.refresh_all().await;
            print_summary(&agent).await;
            Ok(())
        }
        CliCommand::Mode { mode } => one_shot(&agent, Command::SetMode(mode)).await,
        CliCommand::Scene { name } => one_shot(&agent, Command::SetScene(name)).await,
    }
}

async fn print_summary(agent: &Agent) {
    let summary = agent.inspect(|surface, _| surface.summary()).await;
    println!("{summary}");
}

async fn one_shot(agent: &Agent, command: Command) -> Result<()> {
    let description = command.to_string();
    if agent.dispatch(command).await == CommandOutcome::Failed {
        bail!("lumen service did not accept '{description}'");
    }
    print_summary(agent).await;
    Ok(())
}

async fn watch(agent: Agent) -> Result<()> {
    let poller = tokio::spawn(Arc::clone(&agent).run());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                signal.context("failed to listen for ctrl-c")?;
                break;
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line.context("failed to read stdin")? else {
                    stdin_open = false;
                    continue;
                };
                match parse_line(&line) {
                    Ok(Some(UserInput::Command(command))) => {
                        let agent = Arc::clone(&agent);
                        tokio::spawn(async move {
                            agent.dispatch(command).await;
                        });
                    }
                    Ok(Some(UserInput::Quit)) => break,
                    Ok(None) => {}
                    Err(err) => warn!("{err}"),
                }
            }
        }
    }

    info!("lumen agent stopping");
    poller.abort();
    Ok(())
}
