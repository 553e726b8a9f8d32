//! # Memocache
//!
//! Cache LRU (Least Recently Used) genérico, em memória, com capacidade
//! fixa definida na construção.
//!
//! O cache mantém no máximo `capacity` entradas; ao inserir uma chave nova
//! com o cache cheio, a entrada tocada há mais tempo (leitura ou escrita)
//! é removida. É um bloco de construção para memoização limitada: sem
//! persistência, sem TTL e sem sincronização interna (quem precisar de
//! acesso concorrente envolve o cache em um lock externo).
//!
//! ## Módulos
//!
//! - [`cache`] - Cache LRU e suas estatísticas
//! - [`types`] - Tipos compartilhados
//!
//! ## Exemplo
//!
//! ```
//! use memocache::LruCache;
//!
//! let mut cache: LruCache<u32, String> = LruCache::new(2).unwrap();
//! cache.put(1, "first".to_string());
//! cache.put(2, "second".to_string());
//!
//! // Toca a chave 1; a chave 2 vira a menos recente.
//! assert_eq!(cache.get(&1), Some(&"first".to_string()));
//!
//! cache.put(3, "third".to_string());
//! assert!(!cache.contains(&2));
//! ```

pub mod cache;
pub mod types;

pub use cache::{CacheStats, LruCache};
pub use types::errors::{CacheError, CacheResult};
