//! Tipos compartilhados do Memocache.

pub mod errors;

pub use errors::{CacheError, CacheResult};
