//! Rotas de `/estoque`

use contracts::domain::a001_part::{DefineLocationRequest, Part, PartId, PartRequest};
use contracts::domain::a002_storage_location::StorageLocationId;
use contracts::domain::common::{AggregateId, AggregateRoot};

use crate::shared::api_utils::{self, ApiRequest};
use crate::shared::errors::ApiError;
use crate::shared::query_cache::QueryKey;

pub fn list_low_stock() -> ApiRequest {
    api_utils::sub_query::<Part>(&["alertas", "baixo"])
}

pub fn list_out_of_stock() -> ApiRequest {
    api_utils::sub_query::<Part>(&["alertas", "zerado"])
}

pub fn list_without_location() -> ApiRequest {
    api_utils::sub_query::<Part>(&["sem-localizacao"])
}

/// Marcas distintas para o filtro de marca
pub fn list_brands() -> ApiRequest {
    api_utils::sub_query::<Part>(&["filtros", "marcas"])
}

pub fn get(id: &PartId) -> ApiRequest {
    api_utils::detail::<Part>(id)
}

pub fn create(request: &PartRequest) -> Result<ApiRequest, ApiError> {
    api_utils::create::<Part, _>(request)
}

pub fn update(id: &PartId, request: &PartRequest) -> Result<ApiRequest, ApiError> {
    api_utils::update::<Part, _>(id, request)
}

pub fn deactivate(part: &Part) -> Result<ApiRequest, ApiError> {
    api_utils::deactivate::<Part>(&part.id, part.active_state())
}

pub fn reactivate(part: &Part) -> Result<ApiRequest, ApiError> {
    api_utils::reactivate::<Part>(&part.id, part.active_state())
}

/// `PATCH /estoque/{id}/definir-localizacao`; `None` remove a peça do local
pub fn define_location(
    id: &PartId,
    location: Option<StorageLocationId>,
) -> Result<ApiRequest, ApiError> {
    let path = format!("{}/{}/definir-localizacao", Part::api_path(), id.as_string());
    Ok(ApiRequest::patch(path)
        .with_body(&DefineLocationRequest {
            storage_location_id: location,
        })?
        .invalidating(QueryKey::for_aggregate::<Part>()))
}
