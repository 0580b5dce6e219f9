pub mod countdown_worker;

pub use countdown_worker::*;
