use axum::{
    http::{header::CONTENT_TYPE, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use shack_test_utils::{TestBuilder, TestError};
use tower::ServiceExt;

use pizza_shack::{
    config::Environment, error::Error, middleware::error::report_errors, model::app::AppState,
};

use crate::util::{body_text, request, test_config};

async fn boom() -> Result<&'static str, Error> {
    Err(Error::InternalError("the oven exploded".to_string()))
}

async fn failing_app(environment: Environment) -> Result<Router, TestError> {
    let test = TestBuilder::new().build().await?;
    let state = AppState {
        db: test.db,
        config: test_config(environment),
    };

    Ok(Router::new()
        .route("/boom", get(boom))
        .with_state(state.clone())
        .layer(from_fn_with_state(state, report_errors)))
}

#[tokio::test]
/// Expect production to respond with the bare status and no diagnostic body
async fn production_hides_error_detail() -> Result<(), TestError> {
    let app = failing_app(Environment::Production).await?;

    let response = app.oneshot(request("/boom")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_text(response).await;
    assert!(!body.contains("the oven exploded"));
    assert!(body.is_empty());

    Ok(())
}

#[tokio::test]
/// Expect development to respond with the full detail as plain text
async fn development_exposes_error_detail() -> Result<(), TestError> {
    let app = failing_app(Environment::Development).await?;

    let response = app.oneshot(request("/boom")).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let body = body_text(response).await;
    assert!(body.contains("the oven exploded"));

    Ok(())
}

#[tokio::test]
/// Expect successful responses to pass through the error stage untouched
async fn successful_responses_pass_through() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state = AppState {
        db: test.db,
        config: test_config(Environment::Production),
    };
    let app = Router::new()
        .route("/ok", get(|| async { "all good" }))
        .with_state(state.clone())
        .layer(from_fn_with_state(state, report_errors));

    let response = app.oneshot(request("/ok")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "all good");

    Ok(())
}
