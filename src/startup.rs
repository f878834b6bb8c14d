use axum::{middleware::from_fn_with_state, routing::any, Router};
use sea_orm::DatabaseConnection;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{service::SignedCookie, SessionManagerLayer};

use crate::{
    config::Config,
    controller,
    error::{config::ConfigError, Error},
    middleware::{auth::resolve_principal, error::report_errors},
    model::app::AppState,
    router,
    session::SeaOrmStore,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Configure session management over the relational store.
///
/// Exactly one session manager governs both the cookie and persistence: the
/// cookie is signed with the configured secret, `HttpOnly`, `SameSite=Lax`,
/// `Secure` in production, and expiry extends on activity.
pub fn session_layer(
    config: &Config,
    db: DatabaseConnection,
) -> Result<SessionManagerLayer<SeaOrmStore, SignedCookie>, Error> {
    use time::Duration;
    use tower_sessions::{cookie::Key, cookie::SameSite, Expiry};

    let store = SeaOrmStore::new(db);

    let key = Key::try_from(config.session_secret.as_bytes()).map_err(|e| {
        ConfigError::InvalidEnvValue {
            var: "SESSION_SECRET".to_string(),
            reason: e.to_string(),
        }
    })?;

    Ok(SessionManagerLayer::new(store)
        .with_secure(config.environment.is_production())
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(Duration::hours(
            config.session_ttl_hours,
        )))
        .with_signed(key))
}

/// Assemble the full request pipeline around the page routes.
pub fn build_router(
    state: AppState,
    session: SessionManagerLayer<SeaOrmStore, SignedCookie>,
) -> Router {
    build_router_with(router::routes(), state, session)
}

/// Assemble the pipeline around an arbitrary route table.
///
/// Stages run in this order: request tracing, error reporting, session
/// load/attach, authentication (when the profile enables it), route dispatch,
/// static assets, 404 fallback.
pub fn build_router_with(
    routes: Router<AppState>,
    state: AppState,
    session: SessionManagerLayer<SeaOrmStore, SignedCookie>,
) -> Router {
    let fallback = any(controller::pages::not_found).with_state(state.clone());
    let static_files = ServeDir::new(&state.config.public_dir).not_found_service(fallback);

    let mut app = routes
        .fallback_service(static_files)
        .with_state(state.clone());

    if state.config.auth_enabled {
        app = app.layer(from_fn_with_state(state.clone(), resolve_principal));
    }

    app.layer(session)
        .layer(from_fn_with_state(state, report_errors))
        .layer(TraceLayer::new_for_http())
}
