use axum::{extract::State, http::StatusCode, routing::get, Router};
use shack_test_utils::TestError;
use tower::ServiceExt;
use tower_sessions::Session;

use pizza_shack::{
    config::{Config, Environment},
    data::user::UserRepository,
    error::Error,
    model::{
        app::AppState,
        session::{flash::SessionFlash, user::SessionUserId},
    },
};

use crate::util::{
    body_text, request, request_with_cookie, session_cookie, spawn_app_with_config, test_config,
};

/// Writes a flash message for the next rendering to consume.
async fn promo(session: Session) -> Result<&'static str, Error> {
    SessionFlash::set(&session, "Two for one today!").await?;

    Ok("ok")
}

/// Signs the fixture user into the session.
async fn sign_in(State(state): State<AppState>, session: Session) -> Result<String, Error> {
    let user = UserRepository::new(&state.db)
        .find_by_email("mario@pizzashack.test")
        .await?
        .ok_or_else(|| Error::InternalError("fixture user missing".to_string()))?;

    SessionUserId::insert(&session, user.id).await?;

    Ok(user.email)
}

fn extra_routes() -> Router<AppState> {
    pizza_shack::router::routes()
        .route("/promo", get(promo))
        .route("/sign-in", get(sign_in))
}

fn config_without_auth() -> Config {
    let mut config = test_config(Environment::Development);
    config.auth_enabled = false;
    config
}

#[tokio::test]
/// Expect pages to render anonymously when authentication is disabled
async fn pages_render_when_auth_disabled() -> Result<(), TestError> {
    let test = spawn_app_with_config(extra_routes(), config_without_auth()).await?;

    let response = test.app.oneshot(request("/login")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Login"));
    assert!(body.contains("🍕 Pizza Shack"));

    Ok(())
}

#[tokio::test]
/// Expect a signed-in session to stay anonymous when authentication is disabled
async fn signed_in_session_stays_anonymous_when_auth_disabled() -> Result<(), TestError> {
    let test = spawn_app_with_config(extra_routes(), config_without_auth()).await?;
    UserRepository::new(&test.db)
        .create("mario@pizzashack.test")
        .await?;

    let signed_in = test.app.clone().oneshot(request("/sign-in")).await.unwrap();
    let cookie = session_cookie(&signed_in).expect("no session cookie issued");

    let page = test
        .app
        .oneshot(request_with_cookie("/login", &cookie))
        .await
        .unwrap();
    let body = body_text(page).await;

    assert!(!body.contains("mario@pizzashack.test"));
    assert!(body.contains("Login"));

    Ok(())
}

#[tokio::test]
/// Expect the flash path to survive with authentication disabled
async fn flash_works_when_auth_disabled() -> Result<(), TestError> {
    let test = spawn_app_with_config(extra_routes(), config_without_auth()).await?;

    let set = test.app.clone().oneshot(request("/promo")).await.unwrap();
    let cookie = session_cookie(&set).expect("no session cookie issued");

    let first = test
        .app
        .clone()
        .oneshot(request_with_cookie("/login", &cookie))
        .await
        .unwrap();
    assert!(body_text(first).await.contains("Two for one today!"));

    let second = test
        .app
        .oneshot(request_with_cookie("/login", &cookie))
        .await
        .unwrap();
    assert!(!body_text(second).await.contains("Two for one today!"));

    Ok(())
}
