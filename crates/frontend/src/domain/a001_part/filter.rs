use contracts::domain::a001_part::{Part, PartListQuery};
use contracts::domain::a002_storage_location::StorageLocationId;
use contracts::enums::UnitOfMeasure;
use contracts::shared::{PageRequest, SortOrder};
use serde::{Deserialize, Serialize};

use crate::shared::filters::{flag, non_blank, ExclusiveGroup, ListFilter};

/// Filtros rápidos da listagem de peças (no máximo um ligado)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartQuickFilter {
    /// "Apenas ativos"
    OnlyActive,
    /// "Apenas estoque baixo"
    OnlyLowStock,
}

impl PartQuickFilter {
    pub fn label(&self) -> &'static str {
        match self {
            PartQuickFilter::OnlyActive => "Apenas ativos",
            PartQuickFilter::OnlyLowStock => "Apenas estoque baixo",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartFilter {
    pub code: String,
    pub description: String,
    pub brand: String,
    pub unit: Option<UnitOfMeasure>,
    pub storage_location_id: Option<StorageLocationId>,
    pub quick: ExclusiveGroup<PartQuickFilter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartFilterAction {
    SetCode(String),
    SetDescription(String),
    SetBrand(String),
    SetUnit(Option<UnitOfMeasure>),
    SetStorageLocation(Option<StorageLocationId>),
    SetQuick(PartQuickFilter, bool),
    ToggleQuick(PartQuickFilter),
    Clear,
}

impl ListFilter for PartFilter {
    type Aggregate = Part;
    type Query = PartListQuery;
    type Action = PartFilterAction;

    fn reduce(&mut self, action: PartFilterAction) {
        match action {
            PartFilterAction::SetCode(value) => self.code = value,
            PartFilterAction::SetDescription(value) => self.description = value,
            PartFilterAction::SetBrand(value) => self.brand = value,
            PartFilterAction::SetUnit(value) => self.unit = value,
            PartFilterAction::SetStorageLocation(value) => self.storage_location_id = value,
            PartFilterAction::SetQuick(quick, on) => self.quick.set(quick, on),
            PartFilterAction::ToggleQuick(quick) => self.quick.toggle(quick),
            PartFilterAction::Clear => *self = PartFilter::default(),
        }
    }

    fn to_query(&self, page: PageRequest) -> PartListQuery {
        PartListQuery {
            codigo: non_blank(&self.code),
            descricao: non_blank(&self.description),
            ativo: flag(self.quick.is_active(PartQuickFilter::OnlyActive)),
            estoque_baixo: flag(self.quick.is_active(PartQuickFilter::OnlyLowStock)),
            marca: non_blank(&self.brand),
            unidade_medida: self.unit,
            local_armazenamento_id: self.storage_location_id,
            page,
        }
    }

    fn default_sort() -> Option<SortOrder> {
        Some(SortOrder::asc("descricao"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ListConfig;
    use crate::shared::filters::{to_query_string, ListScreen};
    use crate::shared::state::FormStateStore;

    #[test]
    fn test_blank_fields_are_omitted() {
        let mut filter = PartFilter::default();
        filter.reduce(PartFilterAction::SetCode(String::new()));
        filter.reduce(PartFilterAction::SetDescription("X".to_string()));
        filter.reduce(PartFilterAction::SetQuick(PartQuickFilter::OnlyActive, true));

        let query = to_query_string(&filter.to_query(PageRequest::new(0, 20))).unwrap();
        assert!(query.contains("descricao=X&ativo=true"), "{}", query);
        assert!(!query.contains("codigo"));
        assert!(!query.contains("estoqueBaixo"));
        assert!(query.contains("page=0"));
        assert!(query.contains("size=20"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let filter = PartFilter {
            code: "  FLT-001 ".to_string(),
            brand: "   ".to_string(),
            ..PartFilter::default()
        };
        let query = filter.to_query(PageRequest::default());
        assert_eq!(query.codigo.as_deref(), Some("FLT-001"));
        assert_eq!(query.marca, None);
        assert_eq!(query.ativo, None);
    }

    #[test]
    fn test_low_stock_clears_only_active() {
        let mut filter = PartFilter::default();
        filter.reduce(PartFilterAction::ToggleQuick(PartQuickFilter::OnlyActive));
        filter.reduce(PartFilterAction::ToggleQuick(PartQuickFilter::OnlyLowStock));

        let query = filter.to_query(PageRequest::default());
        assert_eq!(query.estoque_baixo, Some(true));
        assert_eq!(query.ativo, None);

        filter.reduce(PartFilterAction::SetQuick(PartQuickFilter::OnlyActive, true));
        let query = filter.to_query(PageRequest::default());
        assert_eq!(query.ativo, Some(true));
        assert_eq!(query.estoque_baixo, None);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut screen = ListScreen::<PartFilter>::new(&ListConfig::default());
        screen.list.page = 4;
        screen.dispatch(PartFilterAction::SetBrand("Bosch".to_string()));
        assert_eq!(screen.list.page, 0);
        assert_eq!(screen.query().marca.as_deref(), Some("Bosch"));
        assert_eq!(
            screen.query().page.sort.map(|s| s.to_param()),
            Some("descricao,asc".to_string())
        );

        screen.dispatch(PartFilterAction::Clear);
        assert!(screen.filter.is_empty());
    }

    #[test]
    fn test_screen_survives_tab_switch() {
        let config = ListConfig::default();
        let mut store = FormStateStore::new();

        let mut screen = ListScreen::<PartFilter>::new(&config);
        screen.dispatch(PartFilterAction::ToggleQuick(PartQuickFilter::OnlyLowStock));
        screen.list.set_page(2);
        screen.save(&mut store);

        let restored = ListScreen::<PartFilter>::restore(&config, &store);
        assert_eq!(restored, screen);
        assert_eq!(PartFilter::form_key(), "a001_estoque");
    }

    #[test]
    fn test_list_request() {
        let screen = ListScreen::<PartFilter>::new(&ListConfig::default());
        let request = screen.request().unwrap();
        assert_eq!(request.path, "/estoque");
        assert!(request.query.unwrap().starts_with("page=0&size=20"));
    }
}
