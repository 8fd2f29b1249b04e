pub mod config;
pub mod error;
pub mod layout;

// Re-export the primary entry points
pub use config::{resolve_weights, GridConfig};
pub use error::FigGridLayoutError;
pub use layout::{row_from_bottom, Layout};
