//! Wire the pieces together and serve.

use api::auth::TokenService;
use api::{db, router, AppState};
use chrono::Duration;
use tracing::info;

use crate::settings::Settings;

/// Connect to the store, build the router, and serve until shutdown.
pub async fn serve(settings: Settings) -> anyhow::Result<()> {
    let pool = db::connect(&settings.database.url).await?;
    let tokens = TokenService::new(
        &settings.auth.secret,
        Duration::minutes(settings.auth.lifetime),
    );

    let app = router(AppState::new(pool, tokens));

    let addr = settings.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
