//! Cache LRU genérico de capacidade fixa.
//!
//! Este módulo implementa um cache Least Recently Used (LRU): um mapa
//! chave-valor limitado a `capacity` entradas, onde a entrada tocada há
//! mais tempo é removida quando uma chave nova é inserida com o cache
//! cheio.

mod lru;
mod stats;

pub use lru::LruCache;
pub use stats::CacheStats;
