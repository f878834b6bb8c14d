use axum::http::{header::CONTENT_TYPE, StatusCode};
use shack_test_utils::TestError;
use tower::ServiceExt;

use crate::util::{body_text, request, spawn_app};

#[tokio::test]
/// Expect the login page to render with its title, status 200
async fn login_page_renders() -> Result<(), TestError> {
    let test = spawn_app().await?;

    let response = test.app.oneshot(request("/login")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Login"));
    assert!(body.contains("🍕 Pizza Shack"));

    Ok(())
}

#[tokio::test]
/// Expect the register page to render with its title, status 200
async fn register_page_renders() -> Result<(), TestError> {
    let test = spawn_app().await?;

    let response = test.app.oneshot(request("/register")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Register"));

    Ok(())
}

#[tokio::test]
/// Expect an undefined path to render the 404 page with status 200
async fn unknown_path_renders_not_found_page() -> Result<(), TestError> {
    let test = spawn_app().await?;

    let response = test.app.oneshot(request("/no-such-page")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("404"));

    Ok(())
}

#[test]
/// Expect no public asset to sit at a registered route path; routes dispatch
/// before the static service, so a collision would make the asset unreachable
fn no_asset_shadows_a_route() {
    for path in ["login", "register"] {
        assert!(
            !std::path::Path::new("public").join(path).exists(),
            "public/{path} collides with a registered route"
        );
    }
}

#[tokio::test]
/// Expect static assets to be served from the public directory before the fallback
async fn static_asset_is_served() -> Result<(), TestError> {
    let test = spawn_app().await?;

    let response = test.app.oneshot(request("/css/style.css")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(content_type.starts_with("text/css"));

    Ok(())
}
