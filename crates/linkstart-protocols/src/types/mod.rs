//! Common types used across the LinkStart crates.

mod entry;
mod message;
mod window;

pub use entry::*;
pub use message::*;
pub use window::*;
