use contracts::domain::a007_subscription::{
    Periodicity, Subscription, SubscriptionListQuery, SubscriptionStatus,
};
use contracts::shared::{PageRequest, SortOrder};
use serde::{Deserialize, Serialize};

use crate::shared::filters::{non_blank, ListFilter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionFilter {
    pub customer_name: String,
    pub status: Option<SubscriptionStatus>,
    pub periodicity: Option<Periodicity>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubscriptionFilterAction {
    SetCustomerName(String),
    SetStatus(Option<SubscriptionStatus>),
    SetPeriodicity(Option<Periodicity>),
    Clear,
}

impl ListFilter for SubscriptionFilter {
    type Aggregate = Subscription;
    type Query = SubscriptionListQuery;
    type Action = SubscriptionFilterAction;

    fn reduce(&mut self, action: SubscriptionFilterAction) {
        match action {
            SubscriptionFilterAction::SetCustomerName(value) => self.customer_name = value,
            SubscriptionFilterAction::SetStatus(value) => self.status = value,
            SubscriptionFilterAction::SetPeriodicity(value) => self.periodicity = value,
            SubscriptionFilterAction::Clear => *self = SubscriptionFilter::default(),
        }
    }

    fn to_query(&self, page: PageRequest) -> SubscriptionListQuery {
        SubscriptionListQuery {
            cliente_nome: non_blank(&self.customer_name),
            status: self.status,
            periodicidade: self.periodicity,
            page,
        }
    }

    fn default_sort() -> Option<SortOrder> {
        Some(SortOrder::asc("dataProximaCobranca"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::to_query_string;

    #[test]
    fn test_query_string() {
        let mut filter = SubscriptionFilter::default();
        filter.reduce(SubscriptionFilterAction::SetCustomerName("   ".to_string()));
        filter.reduce(SubscriptionFilterAction::SetStatus(Some(SubscriptionStatus::Inadimplente)));
        filter.reduce(SubscriptionFilterAction::SetPeriodicity(Some(Periodicity::Trimestral)));
        let query = to_query_string(&filter.to_query(PageRequest::new(0, 20))).unwrap();
        assert_eq!(query, "status=INADIMPLENTE&periodicidade=TRIMESTRAL&page=0&size=20");
    }
}
