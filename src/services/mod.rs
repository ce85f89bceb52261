pub mod enrichment;
pub mod movie_detail;
pub mod providers;
pub mod recommendations;
pub mod search;

pub use providers::{MetadataProvider, OmdbProvider};
