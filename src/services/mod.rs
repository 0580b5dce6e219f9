pub mod metadata;
pub mod registry;

pub use metadata::*;
pub use registry::*;
