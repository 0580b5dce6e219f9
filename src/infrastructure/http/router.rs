use crate::bootstrap::AppState;
use crate::infrastructure::http::controllers::{countdown_api, og_card, pages};
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Christmas lives at the site root
        .route("/", get(pages::home))
        .route("/sitemap.xml", get(pages::sitemap))
        .route("/api/og", get(og_card::render_card))
        .route("/api/countdown/:slug", get(countdown_api::get_countdown))
        .route("/:slug", get(pages::holiday_page))
        .fallback(pages::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
