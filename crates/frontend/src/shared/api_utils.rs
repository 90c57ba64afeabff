//! Descritores de requisição para o backend REST
//!
//! Nada aqui faz I/O: cada operação produz um [`ApiRequest`] com método,
//! caminho, parâmetros, corpo e as chaves de cache que a mutação invalida.
//! Quem executa a requisição é a camada de transporte do aplicativo.

use contracts::domain::common::{AggregateId, AggregateRoot};
use contracts::shared::{ActiveState, Lifecycle, LifecycleAction};
use serde::Serialize;
use serde_json::Value;

use super::config::ApiConfig;
use super::errors::ApiError;
use super::filters::to_query_string;
use super::query_cache::QueryKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Requisição pronta para envio
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Caminho relativo ao prefixo da API ("/estoque/{id}")
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
    /// Chave de cache da consulta (apenas GET)
    pub query_key: Option<QueryKey>,
    /// Prefixos de cache invalidados após sucesso (apenas mutações)
    pub invalidates: Vec<QueryKey>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            body: None,
            query_key: None,
            invalidates: Vec::new(),
        }
    }

    /// Parâmetros de consulta; uma string vazia não gera `?`
    ///
    /// Se a requisição já tem chave de cache, os parâmetros entram nela.
    pub fn with_query<Q: Serialize>(mut self, query: &Q) -> Result<Self, ApiError> {
        let encoded = to_query_string(query)?;
        self.query = if encoded.is_empty() { None } else { Some(encoded) };
        self.query_key = self.query_key.take().map(|key| match &self.query {
            Some(query) => key.sub(query),
            None => key,
        });
        Ok(self)
    }

    pub fn with_body<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn with_key(mut self, key: QueryKey) -> Self {
        self.query_key = Some(key);
        self
    }

    pub fn invalidating(mut self, key: QueryKey) -> Self {
        if !self.invalidates.contains(&key) {
            self.invalidates.push(key);
        }
        self
    }

    pub fn is_mutation(&self) -> bool {
        self.method != HttpMethod::Get
    }

    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.path, query),
            None => self.path.clone(),
        }
    }

    pub fn url(&self, config: &ApiConfig) -> String {
        api_url(config, &self.path_and_query())
    }
}

/// URL completa a partir de um caminho relativo ao prefixo da API
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config.api, "/estoque/alertas/baixo");
/// ```
pub fn api_url(config: &ApiConfig, path: &str) -> String {
    format!("{}{}{}", config.base_url, config.prefix, path)
}

/// Segmento de caminho com escape (`/`, espaços, acentos)
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

// ============================================================================
// Operações genéricas sobre agregados
// ============================================================================

fn item_path<A: AggregateRoot>(id: &A::Id) -> String
where
    A::Id: AggregateId,
{
    format!("{}/{}", A::api_path(), path_segment(&id.as_string()))
}

/// `GET /{colecao}?...` com a chave de cache da listagem
pub fn list<A: AggregateRoot, Q: Serialize>(query: &Q) -> Result<ApiRequest, ApiError> {
    let request = ApiRequest::get(A::api_path()).with_query(query)?;
    let key = QueryKey::list::<A>(request.query.as_deref().unwrap_or_default());
    Ok(request.with_key(key))
}

/// `GET /{colecao}/{sub}` para consultas nomeadas (alertas, filtros...)
pub fn sub_query<A: AggregateRoot>(segments: &[&str]) -> ApiRequest {
    let mut key = QueryKey::for_aggregate::<A>();
    let mut path = A::api_path();
    for segment in segments {
        path.push('/');
        path.push_str(&path_segment(segment));
        key = key.sub(segment);
    }
    ApiRequest::get(path).with_key(key)
}

pub fn detail<A: AggregateRoot>(id: &A::Id) -> ApiRequest
where
    A::Id: AggregateId,
{
    ApiRequest::get(item_path::<A>(id)).with_key(QueryKey::detail::<A>(id))
}

pub fn create<A: AggregateRoot, B: Serialize>(body: &B) -> Result<ApiRequest, ApiError> {
    Ok(ApiRequest::post(A::api_path())
        .with_body(body)?
        .invalidating(QueryKey::for_aggregate::<A>()))
}

pub fn update<A: AggregateRoot, B: Serialize>(id: &A::Id, body: &B) -> Result<ApiRequest, ApiError>
where
    A::Id: AggregateId,
{
    Ok(ApiRequest::put(item_path::<A>(id))
        .with_body(body)?
        .invalidating(QueryKey::for_aggregate::<A>()))
}

/// `DELETE /{colecao}/{id}`
pub fn delete<A: AggregateRoot>(id: &A::Id) -> ApiRequest
where
    A::Id: AggregateId,
{
    ApiRequest::delete(item_path::<A>(id)).invalidating(QueryKey::for_aggregate::<A>())
}

/// Exclusão lógica: o backend apenas inativa o registro
pub fn deactivate<A: AggregateRoot>(id: &A::Id, state: ActiveState) -> Result<ApiRequest, ApiError>
where
    A::Id: AggregateId,
{
    state.transition(LifecycleAction::Cancel)?;
    Ok(delete::<A>(id))
}

pub fn reactivate<A: AggregateRoot>(id: &A::Id, state: ActiveState) -> Result<ApiRequest, ApiError>
where
    A::Id: AggregateId,
{
    action::<A, _>(id, state, LifecycleAction::Reactivate)
}

/// `PATCH /{colecao}/{id}/{acao}`, recusada antes do envio se o status atual não permite
pub fn action<A: AggregateRoot, S: Lifecycle>(
    id: &A::Id,
    status: S,
    action: LifecycleAction,
) -> Result<ApiRequest, ApiError>
where
    A::Id: AggregateId,
{
    status.transition(action)?;
    Ok(ApiRequest::patch(format!(
        "{}/{}",
        item_path::<A>(id),
        action.path_segment()
    ))
    .invalidating(QueryKey::for_aggregate::<A>()))
}
