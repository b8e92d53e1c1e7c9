//! Notes manager API server.

use anyhow::Result;

mod application;
mod settings;

use settings::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("server=info".parse()?)
                .add_directive("api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    let settings = Settings::new()?;
    application::serve(settings).await
}
