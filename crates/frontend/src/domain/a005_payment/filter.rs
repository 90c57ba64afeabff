use chrono::NaiveDate;
use contracts::domain::a005_payment::{Payment, PaymentListQuery, PaymentMethod, PaymentStatus};
use contracts::domain::common::WorkOrderId;
use contracts::shared::{PageRequest, SortOrder};
use serde::{Deserialize, Serialize};

use crate::shared::filters::{date_range, flag, ExclusiveGroup, ListFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentQuickFilter {
    OnlyOverdue,
    OnlyPending,
}

impl PaymentQuickFilter {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentQuickFilter::OnlyOverdue => "Apenas vencidos",
            PaymentQuickFilter::OnlyPending => "Apenas pendentes",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentFilter {
    pub status: Option<PaymentStatus>,
    pub method: Option<PaymentMethod>,
    pub work_order_id: Option<WorkOrderId>,
    pub due_from: Option<NaiveDate>,
    pub due_to: Option<NaiveDate>,
    pub quick: ExclusiveGroup<PaymentQuickFilter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentFilterAction {
    SetStatus(Option<PaymentStatus>),
    SetMethod(Option<PaymentMethod>),
    SetWorkOrder(Option<WorkOrderId>),
    SetPeriod(Option<NaiveDate>, Option<NaiveDate>),
    SetQuick(PaymentQuickFilter, bool),
    ToggleQuick(PaymentQuickFilter),
    Clear,
}

impl ListFilter for PaymentFilter {
    type Aggregate = Payment;
    type Query = PaymentListQuery;
    type Action = PaymentFilterAction;

    fn reduce(&mut self, action: PaymentFilterAction) {
        match action {
            PaymentFilterAction::SetStatus(value) => self.status = value,
            PaymentFilterAction::SetMethod(value) => self.method = value,
            PaymentFilterAction::SetWorkOrder(value) => self.work_order_id = value,
            PaymentFilterAction::SetPeriod(from, to) => {
                self.due_from = from;
                self.due_to = to;
            }
            PaymentFilterAction::SetQuick(quick, on) => self.quick.set(quick, on),
            PaymentFilterAction::ToggleQuick(quick) => self.quick.toggle(quick),
            PaymentFilterAction::Clear => *self = PaymentFilter::default(),
        }
    }

    fn to_query(&self, page: PageRequest) -> PaymentListQuery {
        let (data_inicio, data_fim) = date_range(self.due_from, self.due_to);
        PaymentListQuery {
            status: self.status,
            tipo: self.method,
            ordem_servico_id: self.work_order_id,
            data_inicio,
            data_fim,
            vencidos: flag(self.quick.is_active(PaymentQuickFilter::OnlyOverdue)),
            pendentes: flag(self.quick.is_active(PaymentQuickFilter::OnlyPending)),
            page,
        }
    }

    fn default_sort() -> Option<SortOrder> {
        Some(SortOrder::asc("dataVencimento"))
    }
}
