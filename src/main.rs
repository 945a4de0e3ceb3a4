use anyhow::Context;
use dotenv::dotenv;

use freelancehub::{
    config::Config,
    db::{db::DBClient, sessiondb::SessionExt},
    service::seed,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::init();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    let db_client = match &config.storage_dir {
        Some(dir) => {
            let client = DBClient::open_dir(dir)
                .await
                .with_context(|| format!("failed to open storage directory {}", dir.display()))?;
            tracing::info!("✅ Marketplace data stored in {}", dir.display());
            client
        }
        None => {
            tracing::warn!("⚠️ STORAGE_DIR not set, data lives in memory only");
            DBClient::in_memory()
        }
    };

    let app_state = AppState::new(db_client, config.clone());

    if config.seed_defaults {
        seed::seed_categories(&app_state.db_client)
            .await
            .context("failed to seed categories")?;
    }
    if let Some(admin) = &config.admin {
        seed::seed_admin(&app_state.auth_service, admin)
            .await
            .context("failed to create bootstrap admin")?;
    }

    let stats = app_state
        .dashboard_service
        .platform_stats()
        .await
        .context("failed to read platform totals")?;
    tracing::info!(
        "📊 {} users, {} gigs ({} active), {} orders, {} open disputes",
        stats.total_users,
        stats.total_gigs,
        stats.active_gigs,
        stats.total_orders,
        stats.active_disputes
    );

    match app_state.db_client.get_current_session().await? {
        Some(session) => tracing::info!("Signed in as {} ({})", session.email, session.role.to_str()),
        None => tracing::info!("No active session"),
    }

    Ok(())
}
