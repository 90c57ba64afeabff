use contracts::domain::a002_storage_location::{
    StorageLocation, StorageLocationListQuery, StorageLocationType,
};
use contracts::shared::{PageRequest, SortOrder};
use serde::{Deserialize, Serialize};

use crate::shared::filters::{flag, non_blank, ListFilter};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageLocationFilter {
    pub name: String,
    pub kind: Option<StorageLocationType>,
    pub only_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StorageLocationFilterAction {
    SetName(String),
    SetKind(Option<StorageLocationType>),
    SetOnlyActive(bool),
    Clear,
}

impl ListFilter for StorageLocationFilter {
    type Aggregate = StorageLocation;
    type Query = StorageLocationListQuery;
    type Action = StorageLocationFilterAction;

    fn reduce(&mut self, action: StorageLocationFilterAction) {
        match action {
            StorageLocationFilterAction::SetName(value) => self.name = value,
            StorageLocationFilterAction::SetKind(value) => self.kind = value,
            StorageLocationFilterAction::SetOnlyActive(value) => self.only_active = value,
            StorageLocationFilterAction::Clear => *self = StorageLocationFilter::default(),
        }
    }

    fn to_query(&self, page: PageRequest) -> StorageLocationListQuery {
        StorageLocationListQuery {
            nome: non_blank(&self.name),
            tipo: self.kind,
            ativo: flag(self.only_active),
            page,
        }
    }

    fn default_sort() -> Option<SortOrder> {
        Some(SortOrder::asc("nome"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::to_query_string;

    #[test]
    fn test_query() {
        let mut filter = StorageLocationFilter::default();
        filter.reduce(StorageLocationFilterAction::SetKind(Some(
            StorageLocationType::Prateleira,
        )));
        filter.reduce(StorageLocationFilterAction::SetOnlyActive(false));

        let query = to_query_string(&filter.to_query(PageRequest::new(0, 50))).unwrap();
        assert_eq!(query, "tipo=PRATELEIRA&page=0&size=50");
    }
}
