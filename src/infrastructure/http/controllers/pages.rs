use crate::bootstrap::AppState;
use crate::domain::countdown::compute_countdown;
use crate::domain::format;
use crate::domain::holiday::Holiday;
use crate::infrastructure::http::middleware::ApiResult;
use crate::infrastructure::workers::countdown_worker::today_in;
use crate::services::metadata::{NotFoundMetadata, PageMetadata, SitemapEntry};
use askama::Template;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

#[derive(Template)]
#[template(path = "holiday.html")]
struct HolidayTemplate {
    meta: PageMetadata,
    structured_data: String,
    display_number: i64,
    display_label: String,
    is_today: bool,
    message: String,
    background: String,
    text_color: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    meta: NotFoundMetadata,
    links: Vec<HolidayLink>,
}

struct HolidayLink {
    href: String,
    name: String,
}

#[derive(Template)]
#[template(path = "sitemap.xml")]
struct SitemapTemplate {
    entries: Vec<SitemapEntry>,
}

/// The site root serves the christmas countdown.
pub async fn home(State(state): State<AppState>) -> Response {
    let holiday = state.registry.default_holiday();
    holiday_response(&state, holiday)
}

/// Holiday pages by slug. `/christmas` 404s because the root already
/// serves it, matching the canonical URL scheme.
pub async fn holiday_page(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    if slug == state.registry.default_holiday().slug {
        return not_found_response(&state);
    }
    match state.registry.get(&slug) {
        Some(holiday) => holiday_response(&state, holiday),
        None => not_found_response(&state),
    }
}

pub async fn not_found(State(state): State<AppState>) -> Response {
    not_found_response(&state)
}

pub async fn sitemap(State(state): State<AppState>) -> ApiResult<Response> {
    let today = today_in(state.config.timezone);
    let entries = state.metadata.sitemap_entries(&state.registry, today);
    let xml = SitemapTemplate { entries }.render()?;
    Ok(([(header::CONTENT_TYPE, "application/xml")], xml).into_response())
}

fn holiday_response(state: &AppState, holiday: &Holiday) -> Response {
    // One clock read per request: the on-screen number, the metadata,
    // and the structured data all derive from the same snapshot
    let today = today_in(state.config.timezone);
    let countdown = compute_countdown(holiday, today);

    let meta = state.metadata.page_metadata_for(holiday, &countdown);
    let structured_data = state
        .metadata
        .structured_data(holiday, &countdown)
        .to_string();
    let colors = holiday.theme.colors();

    HolidayTemplate {
        meta,
        structured_data,
        display_number: countdown.sleeps_until,
        display_label: format::display_label(&countdown, holiday),
        is_today: countdown.is_today,
        message: holiday.message.clone(),
        background: colors.background.to_string(),
        text_color: colors.text.to_string(),
    }
    .into_response()
}

fn not_found_response(state: &AppState) -> Response {
    let links = state
        .registry
        .iter()
        .map(|holiday| HolidayLink {
            href: state.metadata.canonical_url(holiday),
            name: holiday.name.clone(),
        })
        .collect();

    let template = NotFoundTemplate {
        meta: state.metadata.not_found_metadata(),
        links,
    };
    (StatusCode::NOT_FOUND, template).into_response()
}
