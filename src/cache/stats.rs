//! Estatísticas do cache.

/// Estatísticas do cache.
///
/// Retrato instantâneo obtido via [`LruCache::stats`](crate::LruCache::stats).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima.
    pub capacity: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
