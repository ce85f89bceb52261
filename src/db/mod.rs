pub mod artifacts;
pub mod cache;

pub use artifacts::ModelArtifacts;
pub use cache::{CacheStore, MetadataCache};
