//! CLI entry and dispatch.

use anyhow::{Context, Result};
use byline_core::config::Config;
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "byline")]
#[command(version)]
#[command(about = "Terminal client for a token-protected articles API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override the API base URL from config
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Log out and drop the stored session token
    Logout,

    /// Work with articles
    Articles {
        #[command(subcommand)]
        command: ArticleCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ArticleCommands {
    /// List all articles
    List,
    /// Create a new article
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        text: String,

        #[arg(long)]
        topic: String,
    },
    /// Update fields of an existing article
    Update {
        /// The ID of the article to update
        #[arg(value_name = "ARTICLE_ID")]
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        text: Option<String>,

        #[arg(long)]
        topic: Option<String>,
    },
    /// Delete an article
    Delete {
        /// The ID of the article to delete
        #[arg(value_name = "ARTICLE_ID")]
        id: i64,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Persist a new API base URL into the config file
    SetUrl {
        #[arg(value_name = "URL")]
        url: String,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load().context("load config")?;
    let _log_guard = crate::logging::init(&config).context("init logging")?;

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli, &config).await })
}

async fn dispatch(cli: Cli, config: &Config) -> Result<()> {
    let base_url = cli
        .api_url
        .unwrap_or_else(|| config.api_base_url.clone());
    tracing::debug!(%base_url, "dispatching command");

    match cli.command {
        Commands::Login { username, password } => {
            commands::auth::login(&base_url, username, password).await
        }
        Commands::Logout => commands::auth::logout(&base_url),

        Commands::Articles { command } => match command {
            ArticleCommands::List => commands::articles::list(&base_url).await,
            ArticleCommands::Create { title, text, topic } => {
                commands::articles::create(&base_url, title, text, topic).await
            }
            ArticleCommands::Update {
                id,
                title,
                text,
                topic,
            } => commands::articles::update(&base_url, id, title, text, topic).await,
            ArticleCommands::Delete { id } => commands::articles::delete(&base_url, id).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::SetUrl { url } => commands::config::set_url(&url),
        },
    }
}
