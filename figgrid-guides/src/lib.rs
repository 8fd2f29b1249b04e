pub mod colorbar;
pub mod error;
pub mod label;
