//! Response wrappers

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use maud::Markup;

/// HTML fragment response, marked uncacheable since page links embed live state
pub struct Html(pub Markup);

impl IntoResponse for Html {
    fn into_response(self) -> Response {
        (
            [(header::CACHE_CONTROL, "no-store")],
            axum::response::Html(self.0.into_string()),
        )
            .into_response()
    }
}
