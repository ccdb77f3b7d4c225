use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use pokedex_web::app::{DetailUseCase, ListUseCase, PokeApiPort};
use pokedex_web::config::Config;
use pokedex_web::infra::ReqwestPokeApi;
use pokedex_web::server::{create_router, start_server, AppState};
use pokedex_web::{logging, metrics};

#[derive(Parser)]
#[command(name = "pokedex_web")]
#[command(about = "Server-rendered Pokédex backed by PokeAPI")]
#[command(version)]
struct Cli {
    /// Path to a TOML config file (default: pokedex.toml if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch and print one Pokémon
    Show {
        /// Numeric ID or name
        id_or_name: String,
        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Fetch and print the Pokémon list
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    let _log_guard = logging::init_logging(&config.logging);

    let command = cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
    });

    match command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            serve(config).await
        }
        Commands::Show { id_or_name, json } => show(&config, &id_or_name, json).await,
        Commands::List { limit, offset } => {
            if let Some(limit) = limit {
                config.pokeapi.list_limit = limit;
            }
            if let Some(offset) = offset {
                config.pokeapi.list_offset = offset;
            }
            list(&config).await
        }
    }
}

fn build_api(config: &Config) -> Result<Arc<dyn PokeApiPort>> {
    let api = ReqwestPokeApi::from_config(&config.pokeapi).context("building PokeAPI client")?;
    Ok(Arc::new(api))
}

async fn serve(config: Config) -> Result<()> {
    let api = build_api(&config)?;
    let handle = if config.metrics.enabled {
        metrics::init_metrics()
    } else {
        None
    };

    info!(base_url = %config.pokeapi.base_url, "Starting pokedex_web");
    let state = AppState::new(api, &config.pokeapi).with_metrics(handle);
    let router = create_router(state, &config.server.static_dir);
    start_server(router, (config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| format!("serving on {}:{}", config.server.host, config.server.port))?;
    Ok(())
}

async fn show(config: &Config, id_or_name: &str, json: bool) -> Result<()> {
    let page = DetailUseCase::new(build_api(config)?)
        .build(id_or_name)
        .await;

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    match (&page.pokemon, &page.error_message) {
        (Some(p), _) => {
            println!("#{} {}", p.id, p.name);
            println!("  Height:    {} cm", p.height_cm);
            println!("  Weight:    {} kg", p.weight_display());
            println!("  Types:     {}", p.types.join(", "));
            println!("  Abilities: {}", p.abilities.join(", "));
            for stat in &p.stats {
                println!("  {:<16} {}", stat.name, stat.value);
            }
        }
        (None, Some(message)) => println!("{}", message),
        (None, None) => {}
    }
    Ok(())
}

async fn list(config: &Config) -> Result<()> {
    let page = ListUseCase::new(
        build_api(config)?,
        config.pokeapi.list_limit,
        config.pokeapi.list_offset,
    )
    .build()
    .await;

    println!("{} ({} entries)", page.title, page.pokemons.len());
    for entry in &page.pokemons {
        println!("{:>4}  {}", entry.id, entry.name);
    }
    Ok(())
}
