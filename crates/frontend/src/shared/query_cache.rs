//! Cache de consultas do cliente
//!
//! Guarda a última resposta bem-sucedida de cada consulta, evita refazer
//! consultas ainda frescas ou já em andamento e invalida por prefixo após
//! mutações. Consultas sem uso por mais que o tempo de coleta são
//! descartadas em [`QueryCache::collect_garbage`]. Não faz I/O: quem executa a requisição informa início, fim e
//! falha de cada busca.

use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{DateTime, Duration, Utc};
use contracts::domain::common::{AggregateId, AggregateRoot};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::api_utils::ApiRequest;
use super::config::ClientConfig;
use super::errors::ApiError;

// ============================================================================
// Query keys
// ============================================================================

/// Chave de uma consulta: raiz da entidade + escopo
///
/// `["estoque"]` é prefixo de `["estoque", "list", "page=0&size=20"]` e de
/// `["estoque", "detail", "<id>"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub root: String,
    pub parts: Vec<String>,
}

impl QueryKey {
    pub fn root(root: &str) -> Self {
        Self {
            root: root.to_string(),
            parts: Vec::new(),
        }
    }

    pub fn for_aggregate<A: AggregateRoot>() -> Self {
        Self::root(A::collection_name())
    }

    pub fn list<A: AggregateRoot>(query: &str) -> Self {
        Self::for_aggregate::<A>().sub("list").sub(query)
    }

    pub fn detail<A: AggregateRoot>(id: &A::Id) -> Self
    where
        A::Id: AggregateId,
    {
        Self::for_aggregate::<A>().sub("detail").sub(&id.as_string())
    }

    pub fn sub(mut self, part: &str) -> Self {
        self.parts.push(part.to_string());
        self
    }

    pub fn starts_with(&self, prefix: &QueryKey) -> bool {
        self.root == prefix.root && self.parts.starts_with(&prefix.parts)
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for part in &self.parts {
            write!(f, "/{}", part)?;
        }
        Ok(())
    }
}

// ============================================================================
// Cache
// ============================================================================

#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub value: Value,
    pub fetched_at: DateTime<Utc>,
    /// Última busca ou pedido da consulta por alguma tela
    pub last_used: DateTime<Utc>,
    pub invalidated: bool,
}

/// O que fazer quando uma tela pede uma consulta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchDecision {
    /// Há dado fresco no cache; não buscar
    Fresh,
    /// Buscar agora (a consulta passa a constar como em andamento)
    Start,
    /// Uma busca idêntica já está em andamento
    AlreadyInFlight,
}

#[derive(Debug, Clone)]
pub struct QueryCache {
    entries: HashMap<QueryKey, CacheEntry>,
    in_flight: HashSet<QueryKey>,
    /// Buscas em andamento atingidas por uma invalidação
    invalidated_in_flight: HashSet<QueryKey>,
    stale_time: Duration,
    gc_time: Duration,
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(Duration::seconds(30), Duration::seconds(300))
    }
}

impl QueryCache {
    pub fn new(stale_time: Duration, gc_time: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            in_flight: HashSet::new(),
            invalidated_in_flight: HashSet::new(),
            stale_time,
            gc_time,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.stale_time(), config.gc_time())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Último valor conhecido, mesmo que vencido (a tela mostra enquanto recarrega)
    pub fn get<T: DeserializeOwned>(&self, key: &QueryKey) -> Option<T> {
        let entry = self.entries.get(key)?;
        match serde_json::from_value(entry.value.clone()) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("Cache {}: valor incompatível: {}", key, e);
                None
            }
        }
    }

    pub fn is_stale(&self, key: &QueryKey, now: DateTime<Utc>) -> bool {
        match self.entries.get(key) {
            Some(entry) => entry.invalidated || now - entry.fetched_at >= self.stale_time,
            None => true,
        }
    }

    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.in_flight.contains(key)
    }

    pub fn begin_fetch(&mut self, key: &QueryKey, now: DateTime<Utc>) -> FetchDecision {
        if let Some(entry) = self.entries.get_mut(key) {
            entry.last_used = now;
        }
        if self.in_flight.contains(key) {
            return FetchDecision::AlreadyInFlight;
        }
        if !self.is_stale(key, now) {
            return FetchDecision::Fresh;
        }
        self.in_flight.insert(key.clone());
        FetchDecision::Start
    }

    pub fn complete_fetch<T: Serialize>(
        &mut self,
        key: &QueryKey,
        value: &T,
        now: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        self.in_flight.remove(key);
        // resposta anterior a uma mutação já nasce vencida
        let invalidated = self.invalidated_in_flight.remove(key);
        let value = serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.entries.insert(
            key.clone(),
            CacheEntry {
                value,
                fetched_at: now,
                last_used: now,
                invalidated,
            },
        );
        Ok(())
    }

    /// Busca falhou: libera a chave e mantém o valor anterior, se houver
    pub fn fail_fetch(&mut self, key: &QueryKey) {
        self.in_flight.remove(key);
        self.invalidated_in_flight.remove(key);
    }

    /// Marca como vencidas todas as consultas sob o prefixo; retorna quantas
    pub fn invalidate(&mut self, prefix: &QueryKey) -> usize {
        let mut count = 0;
        for (key, entry) in self.entries.iter_mut() {
            if key.starts_with(prefix) {
                entry.invalidated = true;
                count += 1;
            }
        }
        for key in &self.in_flight {
            if key.starts_with(prefix) {
                self.invalidated_in_flight.insert(key.clone());
            }
        }
        log::debug!("Cache: {} consulta(s) invalidada(s) sob {}", count, prefix);
        count
    }

    /// Após uma mutação bem-sucedida, invalida o que ela declara
    pub fn apply_mutation(&mut self, request: &ApiRequest) -> usize {
        request
            .invalidates
            .iter()
            .map(|prefix| self.invalidate(prefix))
            .sum()
    }

    /// Descarta consultas sem uso há mais que o tempo de coleta; retorna quantas
    ///
    /// Consultas com busca em andamento nunca são descartadas.
    pub fn collect_garbage(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        let gc_time = self.gc_time;
        let in_flight = &self.in_flight;
        self.entries
            .retain(|key, entry| in_flight.contains(key) || now - entry.last_used < gc_time);
        let removed = before - self.entries.len();
        if removed > 0 {
            log::debug!("Cache: {} consulta(s) sem uso descartada(s)", removed);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.in_flight.clear();
        self.invalidated_in_flight.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use contracts::domain::a001_part::{Part, PartId};
    use contracts::domain::a003_stock_movement::StockMovement;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_key_prefix() {
        let id = PartId::new_v4();
        let detail = QueryKey::detail::<Part>(&id);
        let list = QueryKey::list::<Part>("page=0&size=20");
        let root = QueryKey::for_aggregate::<Part>();

        assert!(detail.starts_with(&root));
        assert!(list.starts_with(&root));
        assert!(!root.starts_with(&list));
        assert!(!list.starts_with(&QueryKey::for_aggregate::<StockMovement>()));
        assert_eq!(list.to_string(), "estoque/list/page=0&size=20");
    }

    #[test]
    fn test_fetch_lifecycle() {
        let mut cache = QueryCache::new(Duration::seconds(30), Duration::seconds(300));
        let key = QueryKey::root("estoque").sub("alertas").sub("baixo");

        assert_eq!(cache.begin_fetch(&key, t0()), FetchDecision::Start);
        assert_eq!(cache.begin_fetch(&key, t0()), FetchDecision::AlreadyInFlight);

        cache.complete_fetch(&key, &vec![1u32, 2, 3], t0()).unwrap();
        assert!(!cache.is_in_flight(&key));
        assert_eq!(cache.get::<Vec<u32>>(&key), Some(vec![1, 2, 3]));

        let later = t0() + Duration::seconds(10);
        assert_eq!(cache.begin_fetch(&key, later), FetchDecision::Fresh);

        let much_later = t0() + Duration::seconds(30);
        assert!(cache.is_stale(&key, much_later));
        assert_eq!(cache.begin_fetch(&key, much_later), FetchDecision::Start);

        cache.fail_fetch(&key);
        assert!(!cache.is_in_flight(&key));
        assert_eq!(cache.get::<Vec<u32>>(&key), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_invalidate_by_prefix() {
        let mut cache = QueryCache::default();
        let part_list = QueryKey::list::<Part>("page=0&size=20");
        let part_detail = QueryKey::detail::<Part>(&PartId::new_v4());
        let movements = QueryKey::list::<StockMovement>("page=0&size=20");

        for key in [&part_list, &part_detail, &movements] {
            cache.complete_fetch(key, &0u8, t0()).unwrap();
        }

        assert_eq!(cache.invalidate(&QueryKey::for_aggregate::<Part>()), 2);
        assert!(cache.is_stale(&part_list, t0()));
        assert!(cache.is_stale(&part_detail, t0()));
        assert!(!cache.is_stale(&movements, t0()));
        // o valor continua disponível até a nova busca
        assert_eq!(cache.get::<u8>(&part_list), Some(0));
    }

    #[test]
    fn test_invalidate_during_fetch() {
        let mut cache = QueryCache::default();
        let key = QueryKey::list::<Part>("page=0&size=20");
        cache.complete_fetch(&key, &1u8, t0()).unwrap();

        let refetch = t0() + Duration::seconds(31);
        assert_eq!(cache.begin_fetch(&key, refetch), FetchDecision::Start);
        // mutação concluída enquanto a busca ainda não voltou
        cache.invalidate(&QueryKey::for_aggregate::<Part>());
        cache
            .complete_fetch(&key, &1u8, refetch + Duration::seconds(1))
            .unwrap();

        let next = refetch + Duration::seconds(2);
        assert!(cache.is_stale(&key, next));
        assert_eq!(cache.begin_fetch(&key, next), FetchDecision::Start);
        cache.complete_fetch(&key, &2u8, next).unwrap();
        assert_eq!(
            cache.begin_fetch(&key, next + Duration::seconds(1)),
            FetchDecision::Fresh
        );
    }

    #[test]
    fn test_invalidate_during_failed_fetch() {
        let mut cache = QueryCache::default();
        let key = QueryKey::root("estoque").sub("marcas");
        assert_eq!(cache.begin_fetch(&key, t0()), FetchDecision::Start);
        cache.invalidate(&QueryKey::root("estoque"));
        cache.fail_fetch(&key);

        assert_eq!(cache.begin_fetch(&key, t0()), FetchDecision::Start);
        cache.complete_fetch(&key, &vec!["Bosch"], t0()).unwrap();
        assert!(!cache.is_stale(&key, t0()));
    }

    #[test]
    fn test_collect_garbage() {
        let mut cache = QueryCache::new(Duration::seconds(30), Duration::seconds(300));
        let old = QueryKey::list::<Part>("page=3&size=20");
        let used = QueryKey::list::<Part>("page=0&size=20");
        let pending = QueryKey::list::<Part>("page=1&size=20");

        cache.complete_fetch(&old, &0u8, t0()).unwrap();
        cache.complete_fetch(&used, &0u8, t0()).unwrap();
        cache.complete_fetch(&pending, &0u8, t0()).unwrap();

        // tela voltou a pedir a primeira página
        let revisit = t0() + Duration::seconds(200);
        assert_eq!(cache.begin_fetch(&used, revisit), FetchDecision::Start);
        cache.complete_fetch(&used, &0u8, revisit).unwrap();
        assert_eq!(
            cache.begin_fetch(&pending, t0() + Duration::seconds(299)),
            FetchDecision::Start
        );

        let later = t0() + Duration::seconds(400);
        assert_eq!(cache.collect_garbage(later), 1);
        assert_eq!(cache.get::<u8>(&old), None);
        assert_eq!(cache.get::<u8>(&used), Some(0));
        assert_eq!(cache.len(), 2);

        cache.fail_fetch(&pending);
        assert_eq!(cache.collect_garbage(t0() + Duration::seconds(600)), 2);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_get_with_wrong_type() {
        let mut cache = QueryCache::default();
        let key = QueryKey::root("x");
        cache.complete_fetch(&key, &"texto", t0()).unwrap();
        assert_eq!(cache.get::<u32>(&key), None);
    }
}
