use axum::{
    extract::{Request, State},
    http::header::{CONTENT_TYPE, USER_AGENT},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{error::ErrorDetail, model::app::AppState};

/// Terminal error-reporting stage.
///
/// Captures the method, URI, and user-agent of the request, then runs the
/// rest of the pipeline. When a stage failed (signalled by an [`ErrorDetail`]
/// extension on the response), one structured log line and one diagnostic log
/// are emitted; the response body is the full detail as plain text outside
/// production and empty in production.
pub async fn report_errors(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let user_agent = request
        .headers()
        .get(USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let response = next.run(request).await;

    let Some(ErrorDetail(detail)) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let status = response.status();
    tracing::error!(
        %method,
        %uri,
        status = status.as_u16(),
        user_agent = %user_agent,
        "{}",
        status.canonical_reason().unwrap_or("error"),
    );
    tracing::debug!("{detail}");

    if state.config.environment.is_production() {
        status.into_response()
    } else {
        (
            status,
            [(CONTENT_TYPE, "text/plain; charset=utf-8")],
            detail,
        )
            .into_response()
    }
}
