use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sora")]
#[command(author, version, about = "Localized similar TV shows, backed by TMDB")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Start {
        /// Host to bind to (overrides `server.host`)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides `server.port`)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show one page of TV shows similar to a show, from a running server
    Similar {
        /// TMDB TV show identifier
        tv_id: String,

        /// Page to show
        #[arg(long, default_value = "1")]
        page: u32,

        /// Base URL of the sora server
        #[arg(long, default_value = "http://127.0.0.1:8080")]
        server: String,

        /// Preferred language (sent as Accept-Language)
        #[arg(long)]
        lang: Option<String>,

        /// API key for servers with auth enabled
        #[arg(long, env = "SORA_API_KEY")]
        api_key: Option<String>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
