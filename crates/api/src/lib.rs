pub mod error;
pub mod models;
pub mod resolver;

// Re-export commonly used types
pub use error::{CoordinateError, DependencyResolutionError, ResolutionResult};
pub use models::*;
pub use resolver::RemoteResolver;
