//! Rotas de `/financeiro/assinaturas`

use contracts::domain::a007_subscription::{Subscription, SubscriptionId, SubscriptionRequest};
use contracts::domain::common::AggregateId;
use contracts::shared::LifecycleAction;

use crate::shared::api_utils::{self, ApiRequest};
use crate::shared::errors::ApiError;

pub fn get(id: &SubscriptionId) -> ApiRequest {
    api_utils::detail::<Subscription>(id)
}

pub fn create(request: &SubscriptionRequest) -> Result<ApiRequest, ApiError> {
    api_utils::create::<Subscription, _>(request)
}

pub fn update(id: &SubscriptionId, request: &SubscriptionRequest) -> Result<ApiRequest, ApiError> {
    api_utils::update::<Subscription, _>(id, request)
}

pub fn delete(id: &SubscriptionId) -> ApiRequest {
    api_utils::delete::<Subscription>(id)
}

/// `PATCH /financeiro/assinaturas/{id}/{pausar|reativar|cancelar}`
pub fn run_action(
    subscription: &Subscription,
    action: LifecycleAction,
) -> Result<ApiRequest, ApiError> {
    api_utils::action::<Subscription, _>(&subscription.id, subscription.status, action)
}

pub fn pause(subscription: &Subscription) -> Result<ApiRequest, ApiError> {
    run_action(subscription, LifecycleAction::Pause)
}

pub fn reactivate(subscription: &Subscription) -> Result<ApiRequest, ApiError> {
    run_action(subscription, LifecycleAction::Reactivate)
}

pub fn cancel(subscription: &Subscription) -> Result<ApiRequest, ApiError> {
    run_action(subscription, LifecycleAction::Cancel)
}

/// Faturas geradas pela assinatura
pub fn list_invoices(id: &SubscriptionId) -> ApiRequest {
    api_utils::sub_query::<Subscription>(&[id.as_string().as_str(), "faturas"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a007_subscription::{Periodicity, SubscriptionStatus};
    use contracts::domain::common::{CustomerId, EntityMetadata};

    fn subscription(status: SubscriptionStatus) -> Subscription {
        Subscription {
            id: SubscriptionId::new_v4(),
            customer_id: CustomerId::new_v4(),
            customer_name: Some("Transportadora Rota Sul".to_string()),
            plan_name: "Manutenção de frota".to_string(),
            periodicity: Periodicity::Mensal,
            status,
            amount: 1200.0,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            next_billing_date: None,
            due_day: Some(15),
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_pause_and_reactivate() {
        let active = subscription(SubscriptionStatus::Ativa);
        let request = pause(&active).unwrap();
        assert!(request.path.starts_with("/financeiro/assinaturas/"));
        assert!(request.path.ends_with("/pausar"));
        assert!(reactivate(&active).is_err());

        let paused = subscription(SubscriptionStatus::Pausada);
        assert!(reactivate(&paused).unwrap().path.ends_with("/reativar"));
        assert!(pause(&paused).is_err());

        assert!(cancel(&subscription(SubscriptionStatus::Cancelada)).is_err());
    }

    #[test]
    fn test_invoices_route() {
        let id = SubscriptionId::new_v4();
        assert_eq!(
            list_invoices(&id).path,
            format!("/financeiro/assinaturas/{}/faturas", id.as_string())
        );
        assert_eq!(
            list_invoices(&id).query_key.unwrap().root,
            "financeiro/assinaturas"
        );
    }
}
