pub mod countdown;
pub mod errors;
pub mod format;
pub mod holiday;
