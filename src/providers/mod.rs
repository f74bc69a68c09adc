//! Search provider adapter implementations.
//!
//! Each module provides a struct implementing [`crate::provider::SearchProvider`]
//! that queries one external search API and maps its native response shape
//! into the common result schema.

pub mod brave;
pub mod duckduckgo;
pub mod google;
pub mod news;
pub mod wikipedia;

pub use brave::BraveProvider;
pub use duckduckgo::DuckDuckGoProvider;
pub use google::GoogleProvider;
pub use news::NewsProvider;
pub use wikipedia::WikipediaProvider;
