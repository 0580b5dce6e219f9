use crate::bootstrap::AppState;
use crate::domain::format;
use crate::infrastructure::http::middleware::{ApiError, ApiResult};
use askama::Template;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

/// Query parameters for the social card.
///
/// `sleeps` is an explicit parameter rather than a clock read so a
/// crawler re-fetching the image reproduces exactly the count the page
/// metadata embedded.
#[derive(Deserialize)]
pub struct OgParams {
    holiday: Option<String>,
    sleeps: Option<String>,
    size: Option<String>,
}

#[derive(Template)]
#[template(path = "og_card.svg", escape = "html")]
struct OgCardTemplate {
    width: u32,
    height: u32,
    background: String,
    primary: String,
    text: String,
    number_text: String,
    number_size: u32,
    headline: String,
    subtitle: String,
    site: String,
}

pub async fn render_card(
    State(state): State<AppState>,
    Query(params): Query<OgParams>,
) -> ApiResult<Response> {
    let slug = params.holiday.unwrap_or_else(|| "christmas".to_string());
    let holiday = state
        .registry
        .get(&slug)
        .ok_or_else(|| ApiError::NotFound(format!("Holiday {} not found", slug)))?;

    // Malformed or missing counts render the zero-sleeps card
    let sleeps = params
        .sleeps
        .as_deref()
        .and_then(|raw| raw.parse::<i64>().ok())
        .unwrap_or(0)
        .max(0);

    let (width, height) = match params.size.as_deref() {
        Some("small") => (600, 315),
        _ => (1200, 630),
    };

    let colors = holiday.theme.colors();
    let site = display_host(&state.config.base_url);

    let template = OgCardTemplate {
        width,
        height,
        background: colors.background.to_string(),
        primary: colors.primary.to_string(),
        text: colors.text.to_string(),
        number_text: if sleeps == 0 {
            "\u{1F389}".to_string()
        } else {
            sleeps.to_string()
        },
        number_size: if sleeps > 99 { 120 } else { 180 },
        headline: format::card_headline(sleeps, holiday),
        subtitle: if sleeps == 0 {
            holiday.message.clone()
        } else {
            format!("Track the countdown at {}", site)
        },
        site,
    };

    let svg = template.render()?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}

fn display_host(base_url: &str) -> String {
    base_url
        .trim_start_matches("https://")
        .trim_start_matches("http://")
        .to_string()
}
