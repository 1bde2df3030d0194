use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

#[derive(RustEmbed, Clone)]
#[folder = "public/"]
pub struct Assets;

pub async fn favicon() -> Response {
    match Assets::get("favicon.ico") {
        Some(file) => (
            [(header::CONTENT_TYPE, "image/x-icon")],
            file.data.into_owned(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
