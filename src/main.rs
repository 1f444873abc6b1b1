mod cli;

use sora::{
    client::{self, PageClient},
    config,
    metadata::{SimilarProvider, TmdbProvider},
    server,
};
use sora_common::{Locale, TvId};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::sync::Arc;

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // CLI flags win over the config file
    config::apply_server_overrides(&mut config, host, port)?;

    tracing::info!("Starting Sora server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );

    let provider: Arc<dyn SimilarProvider> = Arc::new(TmdbProvider::new(&config.tmdb)?);
    server::start_server(config, provider).await
}

async fn show_similar(
    tv_id: &str,
    page: u32,
    server_url: &str,
    lang: Option<String>,
    api_key: Option<String>,
) -> Result<()> {
    let tv_id = TvId::parse(tv_id)?;

    let mut page_client = PageClient::new(server_url);
    if let Some(lang) = lang {
        page_client = page_client.with_locale(Locale::new(lang));
    }
    if let Some(key) = api_key {
        page_client = page_client.with_api_key(key);
    }

    let session = client::browse(&page_client, tv_id, page).await?;

    let Some(props) = session.pagination() else {
        println!("No similar TV shows found.");
        return Ok(());
    };

    println!("Similar Tv Shows");
    for (i, item) in props.items.iter().enumerate() {
        print!("  {:>2}. {}", i + 1, item.title);
        if let Some(year) = item.release_date.as_deref().and_then(|d| d.get(..4)) {
            print!(" ({})", year);
        }
        if let Some(rating) = item.vote_average {
            print!(" - {:.1}", rating);
        }
        println!();
    }
    println!("\nPage {} of {}", props.current_page, props.total_pages);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "sora=trace,sora_common=debug,tower_http=debug".to_string()
        } else {
            "sora=info,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Similar {
            tv_id,
            page,
            server,
            lang,
            api_key,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(show_similar(&tv_id, page, &server, lang, api_key))
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("sora {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Auth enabled: {}", config.server.auth.enabled);
            println!("  TMDB key set: {}", !config.tmdb.api_key.is_empty());
            println!(
                "  Languages: {} (fallback {})",
                config.i18n.supported_languages.join(", "),
                config.i18n.fallback_language
            );
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
        }
    }

    Ok(())
}
