//! Error types for the LinkStart protocol layer.

mod entry;
mod metadata;
mod platform;
mod store;

pub use entry::*;
pub use metadata::*;
pub use platform::*;
pub use store::*;
