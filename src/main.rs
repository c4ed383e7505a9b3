mod cli;

use streamflix::{
    catalog::{
        load_catalog, view::render_text, MemoryMovieStore, MovieStore, PageRenderer,
        SqliteMovieStore, TmdbImageResolver,
    },
    config, server,
};
use streamflix_db::{models::Movie, pool::init_pool, queries::movies};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting StreamFlix catalog server");

    let db_path = config::database_path(&config, config_path);
    let db_path_str = db_path.to_string_lossy();
    tracing::info!("Opening database at {}", db_path_str);
    let db_pool = init_pool(&db_path_str)?;

    server::start_server(config, db_pool).await
}

async fn show_home(
    movies_file: Option<&Path>,
    json: bool,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let store: Box<dyn MovieStore> = match movies_file {
        Some(path) => {
            let store = MemoryMovieStore::from_json_file(path)
                .with_context(|| format!("Failed to load movies from {:?}", path))?;
            tracing::debug!("Loaded {} movies from {:?}", store.len(), path);
            Box::new(store)
        }
        None => {
            let db_path = config::database_path(&config, config_path);
            Box::new(SqliteMovieStore::new(init_pool(&db_path.to_string_lossy())?))
        }
    };

    let catalog = load_catalog(store.as_ref()).await?;
    let resolver = TmdbImageResolver::from_config(&config.media);
    let page = PageRenderer::new(&resolver, &config.media.placeholder_path).render_home(&catalog);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        println!("{}", render_text(&page));
    }

    Ok(())
}

fn import_movies(file: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {:?}", file))?;
    let records: Vec<Movie> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse movies from {:?}", file))?;

    let db_path = config::database_path(&config, config_path);
    let pool = init_pool(&db_path.to_string_lossy())?;
    let conn = pool.get().context("Failed to get database connection")?;

    let tx = conn.unchecked_transaction()?;
    for movie in &records {
        movies::upsert_movie(&tx, movie)
            .with_context(|| format!("Failed to import movie {}", movie.id))?;
    }
    tx.commit()?;

    let total = movies::count_movies(&conn)?;
    tracing::info!("Imported {} movies into {:?}", records.len(), db_path);
    println!("Imported {} movies ({} in catalog)", records.len(), total);

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Database: {:?}", config::database_path(&config, Some(p)));
            println!("  Image host: {}", config.media.image_base_url);
            println!("  Browse limit: {}", config.catalog.browse_limit);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Server: {}:{}", config.server.host, config.server.port);
            println!("  Image host: {}", config.media.image_base_url);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "streamflix=trace,streamflix_db=debug,streamflix_common=debug,tower_http=debug"
                .to_string()
        } else {
            "streamflix=info,streamflix_db=info,tower_http=info".to_string()
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
        Commands::Home { movies, json } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(show_home(movies.as_deref(), json, cli.config.as_deref()))
        }
        Commands::Import { file } => import_movies(&file, cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("streamflix {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
