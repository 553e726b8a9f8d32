//! Tipos de erro do Memocache.

use thiserror::Error;

/// Tipo de resultado padrão do Memocache.
pub type CacheResult<T> = Result<T, CacheError>;

/// Erros possíveis no Memocache.
///
/// A ausência de uma chave nunca é um erro: `contains` retorna `false` e
/// `get` retorna `None`. Falhas do produtor em `try_get_or_insert_with`
/// pertencem ao tipo de erro do chamador e são propagadas sem embrulho.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Capacidade inválida: {0} (deve ser pelo menos 1)")]
    InvalidCapacity(usize),
}
