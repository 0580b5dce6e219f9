pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;

pub use config::Config;
pub use domain::countdown::{compute_countdown, Countdown};
pub use domain::holiday::{Holiday, HolidayTheme};
pub use services::metadata::MetadataService;
pub use services::registry::HolidayRegistry;
