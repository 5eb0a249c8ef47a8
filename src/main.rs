use movie_api::catalog::loader::load_catalog;
use movie_api::config::{Config, USAGE};
use movie_api::server::serve;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            eprintln!("Example: movie_api --data movies.json --bind 127.0.0.1:5000");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    tracing::info!("Starting movie search API on {}", config.bind_addr);

    // 1. Catalog (read once, shared read-only):
    let catalog = load_catalog(&config.data_path).await?;
    if catalog.is_empty() {
        tracing::warn!("Dataset is empty; every search will return 404");
    }

    // 2. HTTP server:
    serve(config.bind_addr, catalog.into_shared()).await
}
