//! Estado de filtros das telas de listagem
//!
//! Cada tela guarda um objeto de filtro serializável. Ações do usuário passam
//! por um redutor puro (`reduce`), e o filtro gera os parâmetros de consulta:
//! textos vazios ou só com espaços são omitidos, `None` é omitido, booleanos
//! só aparecem quando `true`; paginação e ordenação vão sempre.

use std::fmt;

use chrono::NaiveDate;
use contracts::domain::common::AggregateRoot;
use contracts::shared::{PageRequest, SortOrder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::api_utils::{self, ApiRequest};
use super::config::ListConfig;
use super::errors::ApiError;
use super::list_state::ListState;
use super::state::FormStateStore;

// ============================================================================
// Normalização
// ============================================================================

/// Texto aparado; vazio vira `None`
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Booleano enviado apenas quando ligado
pub fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}

/// Período com datas invertidas é trocado
pub fn date_range(
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> (Option<NaiveDate>, Option<NaiveDate>) {
    match (from, to) {
        (Some(f), Some(t)) if f > t => (Some(t), Some(f)),
        other => other,
    }
}

pub fn to_query_string<T: Serialize>(query: &T) -> Result<String, ApiError> {
    serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))
}

// ============================================================================
// Filtros rápidos mutuamente exclusivos
// ============================================================================

/// Grupo de filtros rápidos em que no máximo um fica ligado
///
/// Ligar um desliga o que estava ativo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusiveGroup<T> {
    active: Option<T>,
}

impl<T> Default for ExclusiveGroup<T> {
    fn default() -> Self {
        Self { active: None }
    }
}

impl<T: Copy + Eq> ExclusiveGroup<T> {
    pub fn is_active(&self, flag: T) -> bool {
        self.active == Some(flag)
    }

    pub fn active(&self) -> Option<T> {
        self.active
    }

    pub fn set(&mut self, flag: T, on: bool) {
        if on {
            self.active = Some(flag);
        } else if self.is_active(flag) {
            self.active = None;
        }
    }

    pub fn toggle(&mut self, flag: T) {
        let on = !self.is_active(flag);
        self.set(flag, on);
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

// ============================================================================
// Contrato das telas de listagem
// ============================================================================

pub trait ListFilter: Clone + Default + PartialEq + Serialize + DeserializeOwned {
    type Aggregate: AggregateRoot;
    type Query: Serialize;
    type Action: fmt::Debug;

    /// Redutor puro das ações do usuário
    fn reduce(&mut self, action: Self::Action);

    fn to_query(&self, page: PageRequest) -> Self::Query;

    /// Ordenação inicial da tela
    fn default_sort() -> Option<SortOrder> {
        None
    }

    /// Chave do estado salvo no [`FormStateStore`]
    fn form_key() -> String {
        <Self::Aggregate as AggregateRoot>::full_name()
    }

    fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Serialize, Deserialize)]
struct SavedScreen<F> {
    filter: F,
    list: ListState,
}

/// Filtro + paginação de uma tela de listagem
#[derive(Debug, Clone, PartialEq)]
pub struct ListScreen<F: ListFilter> {
    pub filter: F,
    pub list: ListState,
}

impl<F: ListFilter> ListScreen<F> {
    pub fn new(config: &ListConfig) -> Self {
        let mut list = ListState::from_config(config);
        if let Some(sort) = F::default_sort() {
            list = list.with_sort(&sort.field, sort.direction.is_ascending());
        }
        Self {
            filter: F::default(),
            list,
        }
    }

    /// Aplica a ação ao filtro; toda mudança de filtro volta para a primeira página
    pub fn dispatch(&mut self, action: F::Action) {
        log::debug!("{}: {:?}", F::form_key(), action);
        self.filter.reduce(action);
        self.list.reset_page();
    }

    pub fn clear_filters(&mut self) {
        self.filter = F::default();
        self.list.reset_page();
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.list.toggle_sort(field);
    }

    pub fn query(&self) -> F::Query {
        self.filter.to_query(self.list.page_request())
    }

    pub fn query_string(&self) -> Result<String, ApiError> {
        to_query_string(&self.query())
    }

    pub fn request(&self) -> Result<ApiRequest, ApiError> {
        api_utils::list::<F::Aggregate, _>(&self.query())
    }

    pub fn save(&self, store: &mut FormStateStore) {
        store.save(
            &F::form_key(),
            &SavedScreen {
                filter: self.filter.clone(),
                list: self.list.clone(),
            },
        );
    }

    /// Estado salvo da tela, ou o inicial se não houver
    pub fn restore(config: &ListConfig, store: &FormStateStore) -> Self {
        match store.load::<SavedScreen<F>>(&F::form_key()) {
            Some(saved) => Self {
                filter: saved.filter,
                list: saved.list,
            },
            None => Self::new(config),
        }
    }
}
