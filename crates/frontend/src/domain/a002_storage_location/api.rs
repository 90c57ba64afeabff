//! Rotas de `/locais-armazenamento`

use contracts::domain::a002_storage_location::{
    StorageLocation, StorageLocationId, StorageLocationRequest,
};
use contracts::domain::common::AggregateId;

use crate::shared::api_utils::{self, ApiRequest};
use crate::shared::errors::ApiError;

/// Locais sem pai (primeiro nível da árvore)
pub fn list_roots() -> ApiRequest {
    api_utils::sub_query::<StorageLocation>(&["raizes"])
}

pub fn list_children(id: &StorageLocationId) -> ApiRequest {
    api_utils::sub_query::<StorageLocation>(&[id.as_string().as_str(), "filhos"])
}

pub fn get(id: &StorageLocationId) -> ApiRequest {
    api_utils::detail::<StorageLocation>(id)
}

pub fn create(request: &StorageLocationRequest) -> Result<ApiRequest, ApiError> {
    api_utils::create::<StorageLocation, _>(request)
}

pub fn update(
    id: &StorageLocationId,
    request: &StorageLocationRequest,
) -> Result<ApiRequest, ApiError> {
    api_utils::update::<StorageLocation, _>(id, request)
}

pub fn delete(location: &StorageLocation) -> Result<ApiRequest, ApiError> {
    api_utils::deactivate::<StorageLocation>(&location.id, location.active_state())
}

pub fn reactivate(location: &StorageLocation) -> Result<ApiRequest, ApiError> {
    api_utils::reactivate::<StorageLocation>(&location.id, location.active_state())
}
