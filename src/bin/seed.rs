//! One-shot seeder: loads the demonstration rows into every resource table.
//! Run out-of-band from the server; each run appends a fresh copy.

use artist_cms::{connect, ensure_resource_tables, seed_all, ResourceRegistry, Settings};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("artist_cms=info")))
        .init();

    let settings = Settings::from_env()?;
    let pool = connect(&settings).await?;
    ensure_resource_tables(&pool, &ResourceRegistry::default()).await?;

    tracing::info!("seeding database");
    let result = seed_all(&pool).await;
    pool.close().await;
    match result {
        Ok(report) => {
            tracing::info!(rows = report.total(), "database seeded");
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "seeding failed");
            Err(e.into())
        }
    }
}
