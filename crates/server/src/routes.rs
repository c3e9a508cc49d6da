use axum::{routing::get, Json, Router};
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use common::types::Health;

use crate::pages::{self, SharedStore};

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router over the catalog store.
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route("/", get(pages::list_products))
        .route("/health", get(health))
        .route("/add", get(pages::new_product_form).post(pages::create_product))
        .route("/:id/edit", get(pages::edit_product_form).post(pages::update_product))
        .route("/:id/remove", get(pages::remove_product_confirm).post(pages::delete_product))
        .with_state(store)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
