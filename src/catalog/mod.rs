//! Item catalog: persistent cache and mirror-fallback loading

pub mod cache;
pub mod store;

pub use cache::CatalogCache;
pub use store::CatalogStore;
