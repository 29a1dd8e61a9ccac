pub mod artifact;
pub mod coordinate;
pub mod module;
pub mod repository;
pub mod util;

pub use artifact::*;
pub use coordinate::*;
pub use module::*;
pub use repository::*;
