// Core modules
pub mod context;
pub mod error;
pub mod render;
pub mod store;

// Re-export commonly used types
pub use error::{Result, TexdraftError};
