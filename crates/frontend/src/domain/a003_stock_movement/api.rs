//! Rotas de `/movimentacoes-estoque`
//!
//! Toda movimentação altera o saldo da peça, então invalida também as
//! consultas de `/estoque`.

use contracts::domain::a001_part::{Part, PartId};
use contracts::domain::a003_stock_movement::{
    StockAdjustmentRequest, StockEntryRequest, StockExitRequest, StockMovement,
};
use contracts::domain::common::{AggregateId, AggregateRoot, WorkOrderId};
use contracts::shared::PageRequest;

use crate::shared::api_utils::{self, ApiRequest};
use crate::shared::errors::ApiError;
use crate::shared::query_cache::QueryKey;

fn register<B: serde::Serialize>(kind: &str, body: &B) -> Result<ApiRequest, ApiError> {
    Ok(
        ApiRequest::post(format!("{}/{}", StockMovement::api_path(), kind))
            .with_body(body)?
            .invalidating(QueryKey::for_aggregate::<StockMovement>())
            .invalidating(QueryKey::for_aggregate::<Part>()),
    )
}

pub fn register_entry(request: &StockEntryRequest) -> Result<ApiRequest, ApiError> {
    register("entrada", request)
}

pub fn register_exit(request: &StockExitRequest) -> Result<ApiRequest, ApiError> {
    register("saida", request)
}

pub fn register_adjustment(request: &StockAdjustmentRequest) -> Result<ApiRequest, ApiError> {
    register("ajuste", request)
}

/// Histórico de uma peça
pub fn list_by_part(part_id: &PartId, page: &PageRequest) -> Result<ApiRequest, ApiError> {
    api_utils::sub_query::<StockMovement>(&["peca", part_id.as_string().as_str()]).with_query(page)
}

/// Peças baixadas por uma ordem de serviço
pub fn list_by_work_order(work_order_id: &WorkOrderId) -> ApiRequest {
    api_utils::sub_query::<StockMovement>(&["ordem-servico", work_order_id.as_string().as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::query_cache::QueryCache;
    use chrono::Utc;

    #[test]
    fn test_entry_invalidates_parts() {
        let request = register_entry(&StockEntryRequest {
            part_id: PartId::new_v4(),
            quantity: 5,
            unit_price: Some(12.5),
            reason: None,
            note: None,
        })
        .unwrap();
        assert_eq!(request.path, "/movimentacoes-estoque/entrada");
        assert_eq!(request.body.as_ref().unwrap()["quantidade"], 5);

        let mut cache = QueryCache::default();
        let now = Utc::now();
        let part_list = QueryKey::list::<Part>("page=0&size=20");
        cache.complete_fetch(&part_list, &0u8, now).unwrap();
        assert_eq!(cache.apply_mutation(&request), 1);
        assert!(cache.is_stale(&part_list, now));
    }

    #[test]
    fn test_exit_and_adjustment_routes() {
        let part_id = PartId::new_v4();
        let exit = register_exit(&StockExitRequest {
            part_id,
            quantity: 2,
            work_order_id: Some(WorkOrderId::new_v4()),
            reason: None,
            note: None,
        })
        .unwrap();
        assert_eq!(exit.path, "/movimentacoes-estoque/saida");
        assert!(exit.body.unwrap().get("ordemServicoId").is_some());

        let adjustment = register_adjustment(&StockAdjustmentRequest {
            part_id,
            new_quantity: 10,
            reason: "Inventário".to_string(),
            note: None,
        })
        .unwrap();
        assert_eq!(adjustment.path, "/movimentacoes-estoque/ajuste");
        assert_eq!(adjustment.invalidates.len(), 2);
    }

    #[test]
    fn test_history_routes() {
        let part_id = PartId::new_v4();
        let request = list_by_part(&part_id, &PageRequest::new(0, 10)).unwrap();
        assert_eq!(
            request.path_and_query(),
            format!("/movimentacoes-estoque/peca/{}?page=0&size=10", part_id.as_string())
        );
        assert_eq!(
            request.query_key.unwrap().parts.last().map(String::as_str),
            Some("page=0&size=10")
        );

        let work_order = WorkOrderId::new_v4();
        assert!(list_by_work_order(&work_order)
            .path
            .starts_with("/movimentacoes-estoque/ordem-servico/"));
    }
}
