//! Maven repository backed implementation of the resolution protocol.

pub mod fetch;
pub mod index;
pub mod layout;
pub mod resolver;

pub use fetch::HttpFetcher;
pub use index::ClosureIndex;
pub use layout::LocalRepository;
pub use resolver::RepositoryResolver;
