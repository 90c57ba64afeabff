use chrono::NaiveDate;
use contracts::domain::a001_part::PartId;
use contracts::domain::a003_stock_movement::{MovementType, StockMovement, StockMovementListQuery};
use contracts::shared::{PageRequest, SortOrder};
use serde::{Deserialize, Serialize};

use crate::shared::filters::{date_range, ListFilter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockMovementFilter {
    pub part_id: Option<PartId>,
    pub kind: Option<MovementType>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StockMovementFilterAction {
    SetPart(Option<PartId>),
    SetKind(Option<MovementType>),
    SetPeriod(Option<NaiveDate>, Option<NaiveDate>),
    Clear,
}

impl ListFilter for StockMovementFilter {
    type Aggregate = StockMovement;
    type Query = StockMovementListQuery;
    type Action = StockMovementFilterAction;

    fn reduce(&mut self, action: StockMovementFilterAction) {
        match action {
            StockMovementFilterAction::SetPart(value) => self.part_id = value,
            StockMovementFilterAction::SetKind(value) => self.kind = value,
            StockMovementFilterAction::SetPeriod(from, to) => {
                self.date_from = from;
                self.date_to = to;
            }
            StockMovementFilterAction::Clear => *self = StockMovementFilter::default(),
        }
    }

    fn to_query(&self, page: PageRequest) -> StockMovementListQuery {
        let (data_inicio, data_fim) = date_range(self.date_from, self.date_to);
        StockMovementListQuery {
            peca_id: self.part_id,
            tipo: self.kind,
            data_inicio,
            data_fim,
            page,
        }
    }

    fn default_sort() -> Option<SortOrder> {
        Some(SortOrder::desc("dataMovimentacao"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::to_query_string;

    #[test]
    fn test_period_query() {
        let mut filter = StockMovementFilter::default();
        filter.reduce(StockMovementFilterAction::SetKind(Some(MovementType::AjusteNegativo)));
        filter.reduce(StockMovementFilterAction::SetPeriod(
            NaiveDate::from_ymd_opt(2024, 5, 31),
            NaiveDate::from_ymd_opt(2024, 5, 1),
        ));

        let query = to_query_string(&filter.to_query(PageRequest::new(0, 20))).unwrap();
        assert_eq!(
            query,
            "tipo=AJUSTE_NEGATIVO&dataInicio=2024-05-01&dataFim=2024-05-31&page=0&size=20"
        );
    }
}
