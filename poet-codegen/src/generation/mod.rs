//! Output helpers.
//!
//! - [`ImportCollector`] - Module import tracking and rendering

mod imports;

pub use imports::ImportCollector;
