use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pizza_shack::{config::Config, model::app::AppState, session::SeaOrmStore, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,pizza_shack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config)
        .await
        .expect("Failed to set up database");
    let session = startup::session_layer(&config, db.clone()).expect("Failed to set up sessions");

    // Expired rows never load, this just keeps the table from growing.
    let sweeper = SeaOrmStore::new(db.clone());
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(600));
        loop {
            interval.tick().await;
            match sweeper.delete_expired().await {
                Ok(swept) if swept > 0 => tracing::debug!(swept, "Removed expired sessions"),
                Ok(_) => {}
                Err(e) => tracing::error!("Expired session sweep failed: {e}"),
            }
        }
    });

    let port = config.port;
    let state = AppState { db, config };
    let app = startup::build_router(state, session);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("Failed to bind listen port");

    tracing::info!("Listening on port {port}");

    axum::serve(listener, app).await.expect("Server error");
}
