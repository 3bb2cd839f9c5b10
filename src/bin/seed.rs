//! Resets the database schema and loads the example dataset.
//!
//! Drops and recreates every table via the migrations, then inserts the sample
//! catalog, user, and favorites. Run with `cargo run --bin seed`.

use migration::{Migrator, MigratorTrait};
use sea_orm::Database;

use holocron::server::{config::Config, error::Error, seed};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("seed=info,holocron=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), Error> {
    let db = Database::connect(&config.database_url).await?;

    // Drop everything and rebuild so the dataset lands in a clean schema
    Migrator::fresh(&db).await?;

    seed::seed_database(&db).await?;

    Ok(())
}
