use axum::{
    extract::{OriginalUri, Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use gate::GateRequest;
use std::sync::Arc;
use crate::AppState;

struct HttpGateRequest<'a> {
    path: &'a str,
    jar: &'a CookieJar,
}

impl GateRequest for HttpGateRequest<'_> {
    fn path(&self) -> &str {
        self.path
    }

    fn cookie(&self, name: &str) -> Option<&str> {
        self.jar.get(name).map(|cookie| cookie.value())
    }
}

pub async fn gate_middleware(
    State(state): State<Arc<AppState>>,
    OriginalUri(uri): OriginalUri,
    jar: CookieJar,
    request: Request,
    next: Next,
) -> Response {
    // Nested services see a stripped URI, the gate always matches on the full one.
    let path = uri.path();

    if state.matcher.is_excluded(path) {
        tracing::trace!(path, "excluded from request gate");
        return next.run(request).await;
    }

    let decision = gate::evaluate(
        &HttpGateRequest { path, jar: &jar },
        &state.config.access_token_cookie,
    );
    tracing::debug!(path, ?decision, "request gate decision");

    if let Some(target) = decision.redirect_target() {
        return Redirect::temporary(target).into_response();
    }

    next.run(request).await
}
