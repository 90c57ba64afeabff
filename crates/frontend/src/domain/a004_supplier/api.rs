//! Rotas de `/fornecedores`

use contracts::domain::a004_supplier::{Supplier, SupplierId, SupplierRequest};

use crate::shared::api_utils::{self, ApiRequest};
use crate::shared::errors::ApiError;

pub fn get(id: &SupplierId) -> ApiRequest {
    api_utils::detail::<Supplier>(id)
}

pub fn create(request: &SupplierRequest) -> Result<ApiRequest, ApiError> {
    api_utils::create::<Supplier, _>(request)
}

pub fn update(id: &SupplierId, request: &SupplierRequest) -> Result<ApiRequest, ApiError> {
    api_utils::update::<Supplier, _>(id, request)
}

/// `DELETE /fornecedores/{id}` apenas inativa o fornecedor
pub fn deactivate(supplier: &Supplier) -> Result<ApiRequest, ApiError> {
    api_utils::deactivate::<Supplier>(&supplier.id, supplier.active_state())
}

pub fn reactivate(supplier: &Supplier) -> Result<ApiRequest, ApiError> {
    api_utils::reactivate::<Supplier>(&supplier.id, supplier.active_state())
}
