use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use critterdex::api::{self, AppState};
use critterdex::client::CritterdexClient;
use critterdex::config::{self, AppConfig, NarrativePolicy};
use critterdex::models::{SearchPhase, SearchQuery};
use critterdex::orchestrator::LookupOrchestrator;
use critterdex::providers::Providers;
use critterdex::render;

#[derive(Parser)]
#[command(name = "critterdex")]
#[command(about = "Animal taxonomy lookup with generated illustrations and summaries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the critterdex server
    Serve {
        /// Port for HTTP server
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Look up an animal from the terminal
    Search {
        /// Animal name, e.g. "lion"
        name: String,

        /// Run against a critterdex server instead of the upstream providers
        /// (defaults to CRITTERDEX_URL when set)
        #[arg(long)]
        remote: Option<String>,

        /// Write the generated image to this path
        #[arg(long)]
        image_out: Option<PathBuf>,

        /// Success-path narrative: never, embedded or always
        #[arg(long, value_parser = parse_policy)]
        narrative: Option<NarrativePolicy>,

        /// Print the final session as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the phyla of a kingdom
    Kingdom { name: String },
    /// Show a phylum
    Phylum { name: String },
    /// Show a class
    Class { name: String },
}

fn parse_policy(s: &str) -> Result<NarrativePolicy, String> {
    NarrativePolicy::from_str(s).ok_or_else(|| format!("expected never, embedded or always, got {:?}", s))
}

/// Initialize tracing with output to stderr (for terminal searches) or stdout
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "critterdex=debug,tower_http=debug".into()),
    );

    if use_stderr {
        // Search mode prints results on stdout
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    match cli.command {
        Some(Commands::Serve { port, host }) => serve(&host, port).await?,
        Some(Commands::Search {
            name,
            remote,
            image_out,
            narrative,
            json,
        }) => search(name, remote, image_out, narrative, json).await?,
        Some(Commands::Kingdom { name }) => {
            let (text, found) = render::render_kingdom_text(&name);
            print!("{}", text);
            if !found {
                anyhow::bail!("unknown kingdom {}", name);
            }
        }
        Some(Commands::Phylum { name }) => print!("{}", render::render_phylum_text(&name)),
        Some(Commands::Class { name }) => {
            let (text, found) = render::render_class_text(&name);
            print!("{}", text);
            if !found {
                anyhow::bail!("unknown class {}", name);
            }
        }
        None => serve("127.0.0.1", 3000).await?,
    }

    Ok(())
}

async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting critterdex server on port {}", port);

    let config = AppConfig::from_env()?;
    let providers = Providers::from_config(&config)?;
    let app = api::create_router(AppState::from_config(&config, providers));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("critterdex server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn search(
    name: String,
    remote: Option<String>,
    image_out: Option<PathBuf>,
    narrative: Option<NarrativePolicy>,
    json: bool,
) -> anyhow::Result<()> {
    if SearchQuery::parse(&name).is_none() {
        anyhow::bail!("Animal name is required");
    }

    let (providers, policy) = match remote.or_else(config::remote_url_from_env) {
        Some(url) => {
            tracing::debug!("Searching via remote server {}", url);
            (CritterdexClient::new(url).into_providers(), narrative.unwrap_or_default())
        }
        None => {
            let config = AppConfig::from_env()?;
            let policy = narrative.unwrap_or(config.narrative_policy);
            (Providers::from_config(&config)?, policy)
        }
    };

    let orchestrator = Arc::new(LookupOrchestrator::new(providers, policy));
    let mut updates = orchestrator.subscribe();
    let run = tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move { orchestrator.run_search(&name).await }
    });

    let mut previous = updates.borrow_and_update().clone();
    while updates.changed().await.is_ok() {
        let current = updates.borrow_and_update().clone();
        if !json {
            print!("{}", render::render_stage_text(&previous, &current));
        }
        let settled = current.phase.is_settled();
        previous = current;
        if settled {
            break;
        }
    }
    let session = run.await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    }

    if let Some(path) = image_out {
        match &session.illustration {
            Some(asset) => {
                tokio::fs::write(&path, &asset.bytes).await?;
                tracing::info!("Wrote image to {}", path.display());
            }
            None => tracing::warn!("No image was generated, nothing written to {}", path.display()),
        }
    }

    if session.phase == SearchPhase::Failed {
        anyhow::bail!("search failed");
    }
    Ok(())
}
