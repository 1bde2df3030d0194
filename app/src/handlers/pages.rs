use askama::Template;
use axum::{
    extract::OriginalUri,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate;

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub path: String,
}

fn render<T: Template>(template: &T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(%err, "failed to render template");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template Error").into_response()
        }
    }
}

pub async fn home() -> Response {
    render(&HomeTemplate)
}

// Credentials are handled by the external auth service that sets the cookie.
pub async fn login() -> Response {
    render(&LoginTemplate)
}

pub async fn dashboard() -> Response {
    render(&DashboardTemplate)
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    let template = NotFoundTemplate { path: uri.path().to_string() };
    (StatusCode::NOT_FOUND, render(&template)).into_response()
}
