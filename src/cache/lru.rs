//! Cache LRU genérico de capacidade fixa.

use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::stats::CacheStats;
use crate::types::errors::{CacheError, CacheResult};

/// Índice sentinela para "nenhum nó".
const NIL: usize = usize::MAX;

/// Nó da lista duplamente encadeada de recência.
///
/// Os nós vivem em uma arena (`Vec`) e se encadeiam por índices, da
/// entrada menos recente (frente) para a mais recente (fundo).
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,

    /// Índice do vizinho menos recente.
    prev: usize,

    /// Índice do vizinho mais recente.
    next: usize,
}

/// Cache LRU genérico.
///
/// Mapa chave-valor limitado a `capacity` entradas. Cada acesso bem
/// sucedido (leitura ou escrita) "toca" a entrada, movendo-a para a
/// posição mais recente; ao inserir uma chave nova com o cache cheio, a
/// entrada menos recente é removida.
///
/// Todas as operações são síncronas e O(1) amortizado. O cache não tem
/// sincronização interna: para acesso concorrente, envolva-o em um lock.
///
/// # Exemplo
///
/// ```
/// use memocache::LruCache;
///
/// let mut cache = LruCache::new(2).unwrap();
/// cache.put("a", 1);
/// cache.put("b", 2);
/// cache.put("c", 3); // remove "a"
///
/// assert!(!cache.contains(&"a"));
/// assert_eq!(cache.get(&"b"), Some(&2));
/// ```
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Arena de nós; nunca passa de `capacity` posições.
    nodes: Vec<Node<K, V>>,

    /// Mapa de chave para índice na arena.
    map: HashMap<K, usize>,

    /// Índice da entrada menos recente (frente da lista).
    head: usize,

    /// Índice da entrada mais recente (fundo da lista).
    tail: usize,

    /// Capacidade máxima, imutável após a construção.
    capacity: usize,

    hits: u64,
    misses: u64,
}

impl<K, V> LruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Cria um novo cache com a capacidade dada.
    ///
    /// # Erros
    /// Retorna [`CacheError::InvalidCapacity`] se `capacity` for zero.
    pub fn new(capacity: usize) -> CacheResult<Self> {
        if capacity == 0 {
            tracing::error!("Capacidade inválida para o cache LRU: 0");
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            nodes: Vec::with_capacity(capacity),
            map: HashMap::with_capacity(capacity),
            head: NIL,
            tail: NIL,
            capacity,
            hits: 0,
            misses: 0,
        })
    }

    /// Verifica se a chave está presente.
    ///
    /// Consulta pura: não altera a ordem de recência nem os contadores
    /// (diferente de [`get`](Self::get)).
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Busca o valor da chave, tocando a entrada se presente.
    ///
    /// Retorna `None` se a chave não estiver no cache; ausência é um
    /// resultado normal, não um erro.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.map.get(key).copied() {
            Some(idx) => {
                self.touch(idx);
                self.hits += 1;
                Some(&self.nodes[idx].value)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    /// Insere ou atualiza a entrada da chave.
    ///
    /// - Chave existente: substitui o valor e toca a entrada.
    /// - Chave nova com espaço livre: insere na posição mais recente.
    /// - Chave nova com o cache cheio: remove a entrada menos recente e
    ///   insere na posição mais recente.
    ///
    /// Nunca falha.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(idx) = self.map.get(&key).copied() {
            self.nodes[idx].value = value;
            self.touch(idx);
        } else {
            self.insert_new(key, value);
        }
    }

    /// Busca o valor da chave ou o produz e insere se ausente.
    ///
    /// Em caso de acerto, comporta-se como [`get`](Self::get) e `producer`
    /// não é chamado. Em caso de falta, `producer` é chamado exatamente uma
    /// vez e o valor é inserido com a semântica de [`put`](Self::put) para
    /// chave nova (incluindo remoção da entrada menos recente se cheio).
    pub fn get_or_insert_with<F>(&mut self, key: K, producer: F) -> &V
    where
        F: FnOnce(&K) -> V,
    {
        if let Some(idx) = self.map.get(&key).copied() {
            self.touch(idx);
            self.hits += 1;
            return &self.nodes[idx].value;
        }

        self.misses += 1;
        let value = producer(&key);
        let idx = self.insert_new(key, value);
        &self.nodes[idx].value
    }

    /// Variante falível de [`get_or_insert_with`](Self::get_or_insert_with).
    ///
    /// Se `producer` falhar, o erro é propagado sem embrulho e o cache fica
    /// exatamente como estava antes da chamada: nenhuma entrada é inserida
    /// e a recência das demais não muda.
    pub fn try_get_or_insert_with<F, E>(&mut self, key: K, producer: F) -> Result<&V, E>
    where
        F: FnOnce(&K) -> Result<V, E>,
    {
        if let Some(idx) = self.map.get(&key).copied() {
            self.touch(idx);
            self.hits += 1;
            return Ok(&self.nodes[idx].value);
        }

        self.misses += 1;
        let value = producer(&key)?;
        let idx = self.insert_new(key, value);
        Ok(&self.nodes[idx].value)
    }

    /// Capacidade máxima do cache.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Número atual de entradas.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Verifica se o cache está vazio.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.nodes.len(),
            capacity: self.capacity,
            hits: self.hits,
            misses: self.misses,
        }
    }

    /// Insere uma chave ausente, reciclando o slot da entrada menos
    /// recente se o cache estiver cheio. Retorna o índice do nó inserido.
    fn insert_new(&mut self, key: K, value: V) -> usize {
        let idx = if self.nodes.len() < self.capacity {
            let idx = self.nodes.len();
            self.nodes.push(Node {
                key: key.clone(),
                value,
                prev: NIL,
                next: NIL,
            });
            idx
        } else {
            // Cheio: a entrada na frente da lista é a menos recente.
            let idx = self.head;
            self.detach(idx);

            let evicted = std::mem::replace(&mut self.nodes[idx].key, key.clone());
            self.map.remove(&evicted);
            self.nodes[idx].value = value;

            tracing::trace!(size = self.nodes.len(), "Entrada menos recente removida");
            idx
        };

        self.map.insert(key, idx);
        self.push_back(idx);
        idx
    }

    /// Move o nó para a posição mais recente.
    fn touch(&mut self, idx: usize) {
        if self.tail == idx {
            return;
        }
        self.detach(idx);
        self.push_back(idx);
    }

    /// Desliga o nó da lista de recência.
    fn detach(&mut self, idx: usize) {
        let prev = self.nodes[idx].prev;
        let next = self.nodes[idx].next;

        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }

        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    /// Liga o nó no fundo da lista (posição mais recente).
    fn push_back(&mut self, idx: usize) {
        self.nodes[idx].prev = self.tail;
        self.nodes[idx].next = NIL;

        if self.tail == NIL {
            self.head = idx;
        } else {
            self.nodes[self.tail].next = idx;
        }

        self.tail = idx;
    }
}
