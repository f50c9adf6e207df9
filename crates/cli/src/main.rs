use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use brewchat_agent::{MemoryStore, MockLlm, ToolAgent};
use brewchat_core::{BackendMode, Config};
use brewchat_store::{OutletStore, seed};
use brewchat_tools::{
    CalculatorTool, OutletSearchTool, ProductSearchTool, ProductVectorStore, ToolRegistry, sample_products,
};
use brewchat_transport::{ChatBackend, HttpBackend, LocalBackend};

mod chat;
mod demo;

/// brewchat - a retail coffee chatbot in your terminal
#[derive(Parser, Debug)]
#[command(name = "brewchat")]
#[command(about = "Chat with the Brew & Co assistant: products, outlets, and a calculator", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to brewchat.toml (default: ./brewchat.toml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Talk to a remote chat service at this base URL instead of the
        /// in-process backend
        #[arg(short, long, value_name = "URL")]
        url: Option<String>,

        /// Resume an existing session id
        #[arg(short, long, value_name = "SESSION")]
        session: Option<String>,
    },
    /// Run a scripted demo conversation and exit
    Demo,
    /// Initialize the outlet database with the embedded sample dataset
    Ingest,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(|| PathBuf::from("brewchat.toml"));
    let config = load_or_create_config(&config_path, cli.verbose)?;

    brewchat_core::init_logging(Some(config.logging.clone().into()))
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    match cli.command {
        Commands::Chat { url, session } => cmd_chat(config, url, session).await,
        Commands::Demo => cmd_demo(config).await,
        Commands::Ingest => cmd_ingest(config),
    }
}

/// Load config from file, writing a default one when none exists
fn load_or_create_config(path: &Path, verbose: bool) -> Result<Config> {
    if path.exists() {
        if verbose {
            println!("{} Loading config from {}", "Info:".blue().bold(), path.display());
        }
        Config::from_file(path).with_context(|| format!("failed to load config from {}", path.display()))
    } else {
        let config = Config::default();
        config
            .save(path)
            .with_context(|| format!("failed to write default config to {}", path.display()))?;
        println!(
            "{} Wrote default config to {}",
            "Info:".blue().bold(),
            path.display()
        );
        Ok(config)
    }
}

/// Build the in-process backend: tools, mock LLM, session store
fn build_local_backend(config: &Config) -> Result<LocalBackend> {
    let outlet_store = OutletStore::new(config.database.path.clone())
        .map_err(|e| anyhow::anyhow!("failed to open outlet database: {}", e))?;
    // idempotent; guarantees the demo data is queryable on first run
    seed::ingest(&outlet_store).map_err(|e| anyhow::anyhow!("failed to seed outlet database: {}", e))?;

    let catalog = if config.products.path.exists() {
        ProductVectorStore::from_file(&config.products.path)
            .map_err(|e| anyhow::anyhow!("failed to load product catalog: {}", e))?
    } else {
        ProductVectorStore::from_products(sample_products())
    };

    let tools = ToolRegistry::new();
    tools
        .register(CalculatorTool)
        .and_then(|_| tools.register(ProductSearchTool::new(catalog)))
        .and_then(|_| tools.register(OutletSearchTool::new(outlet_store)))
        .map_err(|e| anyhow::anyhow!("failed to register tools: {}", e))?;

    let store = MemoryStore::new();
    let agent = ToolAgent::new(tools, Arc::new(MockLlm::new()), store.clone());
    Ok(LocalBackend::new(store, agent))
}

/// Pick the backend: --url wins, then the config's backend mode
fn build_backend(config: &Config, url: Option<String>) -> Result<Arc<dyn ChatBackend>> {
    if let Some(url) = url {
        return Ok(Arc::new(HttpBackend::new(url)));
    }

    match config.backend.mode {
        BackendMode::Http => Ok(Arc::new(HttpBackend::new(config.backend.base_url.clone()))),
        BackendMode::Local => Ok(Arc::new(build_local_backend(config)?)),
    }
}

async fn cmd_chat(config: Config, url: Option<String>, session: Option<String>) -> Result<()> {
    let backend = build_backend(&config, url)?;
    chat::run_chat(backend, session).await
}

async fn cmd_demo(config: Config) -> Result<()> {
    let backend = Arc::new(build_local_backend(&config)?);
    demo::run_demo(backend).await
}

fn cmd_ingest(config: Config) -> Result<()> {
    let store = OutletStore::new(config.database.path.clone())
        .map_err(|e| anyhow::anyhow!("failed to open outlet database: {}", e))?;
    let report = seed::ingest(&store).map_err(|e| anyhow::anyhow!("ingest failed: {}", e))?;

    println!("{} Ingestion complete!", "OK:".green().bold());
    println!("   - Inserted: {} new outlets", report.inserted);
    println!("   - Updated: {} existing outlets", report.updated);
    println!(
        "   - Total in database: {}",
        store.count().map_err(|e| anyhow::anyhow!("{}", e))?
    );
    Ok(())
}
