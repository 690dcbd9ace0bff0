use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "bookbound",
    version,
    about = "A lightweight terminal client for the book-network lending platform",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Root URL of the backend API.
    #[arg(long, env = "BOOKBOUND_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Access token, skipping the interactive login.
    #[arg(long, env = "BOOKBOUND_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Page size for book listings.
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Persist the access token in the system keyring.
    #[arg(long)]
    pub persist_token: Option<bool>,
}
