//! Cache
//!
//! Este módulo contiene el cache de lecturas sobre el store tabular.

pub mod cache_config;
pub mod table_cache;

pub use cache_config::CacheConfig;
pub use table_cache::TableCache;
