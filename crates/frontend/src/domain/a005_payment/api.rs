//! Rotas de `/pagamentos`

use chrono::NaiveDate;
use contracts::domain::a005_payment::{Payment, PaymentId, PaymentRequest};
use contracts::shared::LifecycleAction;

use crate::shared::api_utils::{self, ApiRequest};
use crate::shared::errors::ApiError;

pub fn get(id: &PaymentId) -> ApiRequest {
    api_utils::detail::<Payment>(id)
}

pub fn create(request: &PaymentRequest) -> Result<ApiRequest, ApiError> {
    api_utils::create::<Payment, _>(request)
}

pub fn update(id: &PaymentId, request: &PaymentRequest) -> Result<ApiRequest, ApiError> {
    api_utils::update::<Payment, _>(id, request)
}

pub fn delete(id: &PaymentId) -> ApiRequest {
    api_utils::delete::<Payment>(id)
}

/// `PATCH /pagamentos/{id}/{confirmar|cancelar|estornar}`
///
/// A ação é conferida contra o status exibido (vencido inclusive).
pub fn run_action(
    payment: &Payment,
    action: LifecycleAction,
    today: NaiveDate,
) -> Result<ApiRequest, ApiError> {
    api_utils::action::<Payment, _>(&payment.id, payment.effective_status(today), action)
}

pub fn confirm(payment: &Payment, today: NaiveDate) -> Result<ApiRequest, ApiError> {
    run_action(payment, LifecycleAction::Confirm, today)
}

pub fn cancel(payment: &Payment, today: NaiveDate) -> Result<ApiRequest, ApiError> {
    run_action(payment, LifecycleAction::Cancel, today)
}

pub fn reverse(payment: &Payment, today: NaiveDate) -> Result<ApiRequest, ApiError> {
    run_action(payment, LifecycleAction::Reverse, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_payment::{PaymentMethod, PaymentStatus};
    use contracts::domain::common::EntityMetadata;

    fn payment(status: PaymentStatus) -> Payment {
        Payment {
            id: PaymentId::new_v4(),
            work_order_id: None,
            method: PaymentMethod::Boleto,
            status,
            amount: 350.0,
            installments: 1,
            current_installment: 1,
            due_date: NaiveDate::from_ymd_opt(2024, 5, 10),
            paid_on: None,
            note: None,
            metadata: EntityMetadata::default(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
    }

    #[test]
    fn test_confirm_overdue_payment() {
        let request = confirm(&payment(PaymentStatus::Pendente), today()).unwrap();
        assert!(request.path.ends_with("/confirmar"));
        assert!(request.path.starts_with("/pagamentos/"));
    }

    #[test]
    fn test_reverse_only_when_paid() {
        assert!(reverse(&payment(PaymentStatus::Pago), today()).is_ok());
        let err = reverse(&payment(PaymentStatus::Pendente), today()).unwrap_err();
        assert_eq!(
            err.user_message(),
            "Ação 'Estornar' não permitida para o status 'Vencido'"
        );
        assert!(cancel(&payment(PaymentStatus::Cancelado), today()).is_err());
    }
}
