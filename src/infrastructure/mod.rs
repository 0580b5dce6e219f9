pub mod http;
pub mod workers;
