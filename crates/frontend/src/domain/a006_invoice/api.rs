//! Rotas de `/notas-fiscais`

use contracts::domain::a006_invoice::{Invoice, InvoiceCancelRequest, InvoiceId, InvoiceRequest};
use contracts::shared::LifecycleAction;

use crate::shared::api_utils::{self, ApiRequest};
use crate::shared::errors::ApiError;

pub fn get(id: &InvoiceId) -> ApiRequest {
    api_utils::detail::<Invoice>(id)
}

pub fn create(request: &InvoiceRequest) -> Result<ApiRequest, ApiError> {
    api_utils::create::<Invoice, _>(request)
}

pub fn update(id: &InvoiceId, request: &InvoiceRequest) -> Result<ApiRequest, ApiError> {
    api_utils::update::<Invoice, _>(id, request)
}

pub fn delete(id: &InvoiceId) -> ApiRequest {
    api_utils::delete::<Invoice>(id)
}

/// `PATCH /notas-fiscais/{id}/cancelar` com o motivo; só notas autorizadas
pub fn cancel(invoice: &Invoice, reason: &str) -> Result<ApiRequest, ApiError> {
    api_utils::action::<Invoice, _>(&invoice.id, invoice.status, LifecycleAction::Cancel)?
        .with_body(&InvoiceCancelRequest {
            reason: reason.trim().to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_invoice::{InvoiceKind, InvoiceStatus};
    use contracts::domain::common::EntityMetadata;

    fn invoice(status: InvoiceStatus) -> Invoice {
        Invoice {
            id: InvoiceId::new_v4(),
            number: Some(1234),
            series: Some("1".to_string()),
            kind: InvoiceKind::Nfse,
            status,
            access_key: None,
            total_amount: 480.0,
            issued_at: None,
            work_order_id: None,
            recipient_name: None,
            cancellation_reason: None,
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_cancel_authorized_invoice() {
        let request = cancel(&invoice(InvoiceStatus::Autorizada), " Valor incorreto ").unwrap();
        assert!(request.path.ends_with("/cancelar"));
        assert_eq!(request.body.unwrap()["motivo"], "Valor incorreto");
    }

    #[test]
    fn test_cancel_rejected_before_sending() {
        for status in [InvoiceStatus::EmDigitacao, InvoiceStatus::Cancelada, InvoiceStatus::Rejeitada] {
            assert!(cancel(&invoice(status), "x").is_err());
        }
    }
}
