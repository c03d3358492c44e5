use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::infra::config::{AppConfig, RunMode};
use crate::tools::alerts::AlertsTool;

#[derive(Parser)]
#[command(name = "nws-alerts-mcp")]
#[command(about = "Weather alerts MCP server (National Weather Service)")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the server (stdio or HTTP, per MODE). Default when no subcommand is given.
    Serve,
    /// Health check a running HTTP server
    Health {
        /// Service URL to check
        #[arg(short, long, default_value = "http://localhost:8080")]
        url: String,
    },
    /// Validate configuration
    Config {
        /// Validate config without starting service
        #[arg(long)]
        validate: bool,
    },
    /// Fetch alerts for a state once and print them
    Alerts {
        /// Two-letter state code (e.g. CA, NY)
        state: String,
        /// Override the NWS API base URL
        #[arg(long)]
        base_url: Option<String>,
    },
}

pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    run_commands(cli.command.unwrap_or(Commands::Serve)).await
}

pub async fn run_commands(command: Commands) -> ExitCode {
    match command {
        Commands::Serve => match crate::infra::boot::run_server().await {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "server exited with error");
                ExitCode::FAILURE
            }
        },
        Commands::Health { url } => match health_check(&url).await {
            Ok(_) => {
                println!("Service is healthy");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Health check failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Config { validate: _ } => match validate_config() {
            Ok(_) => {
                println!("Configuration is valid");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Configuration validation failed: {}", e);
                ExitCode::FAILURE
            }
        },
        Commands::Alerts { state, base_url } => match fetch_once(&state, base_url).await {
            Ok(text) => {
                println!("{text}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Alerts lookup failed: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

async fn health_check(url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let response = client
        .get(format!("{}/healthz", url.trim_end_matches('/')))
        .timeout(std::time::Duration::from_millis(500))
        .send()
        .await?;

    if response.status().is_success() {
        Ok(())
    } else {
        Err(format!("HTTP {}", response.status()).into())
    }
}

fn validate_config() -> Result<(), Box<dyn std::error::Error>> {
    let mode = std::env::var("MODE").unwrap_or_else(|_| "stdio".into());
    let mode = RunMode::parse(&mode)
        .ok_or_else(|| format!("Invalid MODE: {}. Must be 'server' or 'stdio'", mode))?;

    if mode == RunMode::Server {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);

        if port == 0 {
            return Err("PORT cannot be 0".into());
        }
    }

    let app = AppConfig::from_env_and_toml()?;
    if !app.nws.base_url.starts_with("http://") && !app.nws.base_url.starts_with("https://") {
        return Err(format!("Invalid NWS base URL: {}", app.nws.base_url).into());
    }
    if app.nws.user_agent.trim().is_empty() {
        return Err("NWS user agent cannot be empty".into());
    }

    Ok(())
}

async fn fetch_once(state: &str, base_url: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    let mut app = AppConfig::from_env_and_toml()?;
    if let Some(base) = base_url {
        app.nws.base_url = base;
    }
    let tool = AlertsTool::from_config(&app.nws);
    Ok(tool.get_alerts(state).await.first_text().to_owned())
}
