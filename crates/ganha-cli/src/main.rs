mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use ganha_core::SortKey;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ganha")]
#[command(about = "Regista & Ganha coupon catalog renderer")]
struct Cli {
    /// Page address to render; defaults to `GANHA_SITE_URL`.
    #[arg(long, global = true)]
    page: Option<String>,

    /// Sort order: featured, discount, price-asc, price-desc or alpha.
    #[arg(long, global = true, default_value = "featured")]
    sort: SortKey,

    /// Navigate to this category after the first render (`todos` for all).
    #[arg(long, global = true)]
    category: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Render the page as an HTML document.
    Render {
        /// Write the document here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the visible offers, one per line.
    List,
    /// Print every category in the catalog with its label and offer count.
    Categories,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = ganha_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let options = commands::SessionOptions {
        page: cli.page.as_deref(),
        sort: cli.sort,
        category: cli.category.as_deref(),
    };

    match cli.command {
        Commands::Render { out } => commands::run_render(&config, &options, out.as_deref()).await,
        Commands::List => commands::run_list(&config, &options).await,
        Commands::Categories => commands::run_categories(&config, &options).await,
    }
}
