use crate::config::Config;
use crate::domain::countdown::{compute_countdown, Countdown};
use crate::domain::format;
use crate::domain::holiday::Holiday;
use crate::services::registry::HolidayRegistry;
use chrono::NaiveDate;
use serde_json::{json, Value};

/// SEO-facing values for one holiday page.
///
/// Every field is derived from a single countdown evaluation, so the
/// count in the title always equals the count baked into the social
/// image URLs and the alt text.
#[derive(Debug, Clone)]
pub struct PageMetadata {
    pub title: String,
    pub full_title: String,
    pub description: String,
    pub keywords: String,
    pub canonical_url: String,
    pub image_url: String,
    pub image_url_small: String,
    pub image_alt: String,
    pub theme_color: String,
}

/// Static metadata for the 404 page.
#[derive(Debug, Clone)]
pub struct NotFoundMetadata {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: String,
    pub change_frequency: &'static str,
    pub priority: &'static str,
}

/// Builds page metadata, structured data, and the sitemap.
///
/// Callers that also render on-screen values must reuse the same
/// `Countdown` they pass here; the `*_for` methods take it explicitly
/// so one request never reads the clock twice.
#[derive(Clone)]
pub struct MetadataService {
    base_url: String,
    site_name: String,
}

impl MetadataService {
    pub fn new(config: &Config) -> Self {
        MetadataService {
            base_url: config.base_url.clone(),
            site_name: config.site_name.clone(),
        }
    }

    /// Canonical URL for a holiday page. Christmas lives at the root.
    pub fn canonical_url(&self, holiday: &Holiday) -> String {
        if holiday.slug == "christmas" {
            self.base_url.clone()
        } else {
            format!("{}/{}", self.base_url, holiday.slug)
        }
    }

    /// Metadata from a fresh countdown evaluation at `today`.
    pub fn page_metadata(&self, holiday: &Holiday, today: NaiveDate) -> PageMetadata {
        let countdown = compute_countdown(holiday, today);
        self.page_metadata_for(holiday, &countdown)
    }

    /// Metadata from an already-computed countdown.
    pub fn page_metadata_for(&self, holiday: &Holiday, countdown: &Countdown) -> PageMetadata {
        let title = format::countdown_title(countdown, holiday);
        let full_title = format!("{} | {}", title, self.site_name);
        let description = format::holiday_description(countdown, holiday);

        let keywords = [
            "holiday countdown",
            "sleeps until",
            &holiday.name.to_lowercase(),
            "christmas countdown",
            "holiday tracker",
            "celebration countdown",
        ]
        .join(", ");

        let sleeps = countdown.sleeps_until;
        let image_url = format!(
            "{}/api/og?holiday={}&sleeps={}",
            self.base_url, holiday.slug, sleeps
        );
        let image_url_small = format!("{}&size=small", image_url);
        let image_alt = format!("{} sleeps until {}", sleeps, holiday.name);

        PageMetadata {
            title,
            full_title,
            description,
            keywords,
            canonical_url: self.canonical_url(holiday),
            image_url,
            image_url_small,
            image_alt,
            theme_color: holiday.theme.colors().primary.to_string(),
        }
    }

    /// JSON-LD structured data for a holiday page.
    ///
    /// The Event `startDate` is the resolved target date (this year's
    /// or next year's occurrence), not a bare month/day.
    pub fn structured_data(&self, holiday: &Holiday, countdown: &Countdown) -> Value {
        let page_url = self.canonical_url(holiday);
        let title = format::countdown_title(countdown, holiday);

        let mut breadcrumbs = vec![json!({
            "@type": "ListItem",
            "position": 1,
            "name": "Home",
            "item": self.base_url,
        })];
        if holiday.slug != "christmas" {
            breadcrumbs.push(json!({
                "@type": "ListItem",
                "position": 2,
                "name": holiday.name,
                "item": page_url,
            }));
        }

        json!({
            "@context": "https://schema.org",
            "@type": "WebPage",
            "name": title,
            "description": format::holiday_description(countdown, holiday),
            "url": page_url,
            "mainEntity": {
                "@type": "Event",
                "name": holiday.name,
                "description": holiday.message,
                "startDate": countdown.target_date.format("%Y-%m-%d").to_string(),
                "eventStatus": "https://schema.org/EventScheduled",
            },
            "publisher": {
                "@type": "Organization",
                "name": self.site_name,
                "url": self.base_url,
            },
            "breadcrumb": {
                "@type": "BreadcrumbList",
                "itemListElement": breadcrumbs,
            },
        })
    }

    pub fn not_found_metadata(&self) -> NotFoundMetadata {
        NotFoundMetadata {
            title: format!("Page Not Found | {}", self.site_name),
            description: "The page you're looking for seems to have wandered off into \
                the holiday spirit. Choose from our festive destinations to get back \
                to celebrating!"
                .to_string(),
        }
    }

    /// Sitemap entries: the root page plus every non-christmas holiday page.
    pub fn sitemap_entries(&self, registry: &HolidayRegistry, today: NaiveDate) -> Vec<SitemapEntry> {
        let last_modified = today.format("%Y-%m-%d").to_string();

        let mut entries = vec![SitemapEntry {
            url: self.base_url.clone(),
            last_modified: last_modified.clone(),
            change_frequency: "daily",
            priority: "1.0",
        }];

        for slug in registry.slugs() {
            if slug == "christmas" {
                continue;
            }
            entries.push(SitemapEntry {
                url: format!("{}/{}", self.base_url, slug),
                last_modified: last_modified.clone(),
                change_frequency: "daily",
                priority: "0.8",
            });
        }

        entries
    }
}
