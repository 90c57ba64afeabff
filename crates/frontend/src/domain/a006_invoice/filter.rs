use chrono::NaiveDate;
use contracts::domain::a006_invoice::{Invoice, InvoiceKind, InvoiceListQuery, InvoiceStatus};
use contracts::shared::{PageRequest, SortOrder};
use serde::{Deserialize, Serialize};

use crate::shared::filters::{date_range, non_blank, ListFilter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceFilter {
    pub number: String,
    pub kind: Option<InvoiceKind>,
    pub status: Option<InvoiceStatus>,
    pub issued_from: Option<NaiveDate>,
    pub issued_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InvoiceFilterAction {
    SetNumber(String),
    SetKind(Option<InvoiceKind>),
    SetStatus(Option<InvoiceStatus>),
    SetPeriod(Option<NaiveDate>, Option<NaiveDate>),
    Clear,
}

impl ListFilter for InvoiceFilter {
    type Aggregate = Invoice;
    type Query = InvoiceListQuery;
    type Action = InvoiceFilterAction;

    fn reduce(&mut self, action: InvoiceFilterAction) {
        match action {
            InvoiceFilterAction::SetNumber(value) => self.number = value,
            InvoiceFilterAction::SetKind(value) => self.kind = value,
            InvoiceFilterAction::SetStatus(value) => self.status = value,
            InvoiceFilterAction::SetPeriod(from, to) => {
                self.issued_from = from;
                self.issued_to = to;
            }
            InvoiceFilterAction::Clear => *self = InvoiceFilter::default(),
        }
    }

    fn to_query(&self, page: PageRequest) -> InvoiceListQuery {
        let (data_inicio, data_fim) = date_range(self.issued_from, self.issued_to);
        InvoiceListQuery {
            numero: non_blank(&self.number),
            tipo: self.kind,
            status: self.status,
            data_inicio,
            data_fim,
            page,
        }
    }

    fn default_sort() -> Option<SortOrder> {
        Some(SortOrder::desc("dataEmissao"))
    }
}
