use contracts::domain::a004_supplier::{Supplier, SupplierListQuery, SupplierType};
use contracts::shared::{PageRequest, SortOrder};
use serde::{Deserialize, Serialize};

use crate::shared::filters::{flag, non_blank, ExclusiveGroup, ListFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SupplierQuickFilter {
    OnlyActive,
    OnlyInactive,
}

impl SupplierQuickFilter {
    pub fn label(&self) -> &'static str {
        match self {
            SupplierQuickFilter::OnlyActive => "Apenas ativos",
            SupplierQuickFilter::OnlyInactive => "Apenas inativos",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierFilter {
    pub name: String,
    /// CPF/CNPJ com ou sem máscara
    pub document: String,
    pub kind: Option<SupplierType>,
    pub city: String,
    pub quick: ExclusiveGroup<SupplierQuickFilter>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SupplierFilterAction {
    SetName(String),
    SetDocument(String),
    SetKind(Option<SupplierType>),
    SetCity(String),
    SetQuick(SupplierQuickFilter, bool),
    ToggleQuick(SupplierQuickFilter),
    Clear,
}

impl ListFilter for SupplierFilter {
    type Aggregate = Supplier;
    type Query = SupplierListQuery;
    type Action = SupplierFilterAction;

    fn reduce(&mut self, action: SupplierFilterAction) {
        match action {
            SupplierFilterAction::SetName(value) => self.name = value,
            SupplierFilterAction::SetDocument(value) => self.document = value,
            SupplierFilterAction::SetKind(value) => self.kind = value,
            SupplierFilterAction::SetCity(value) => self.city = value,
            SupplierFilterAction::SetQuick(quick, on) => self.quick.set(quick, on),
            SupplierFilterAction::ToggleQuick(quick) => self.quick.toggle(quick),
            SupplierFilterAction::Clear => *self = SupplierFilter::default(),
        }
    }

    fn to_query(&self, page: PageRequest) -> SupplierListQuery {
        // o backend busca o documento só pelos dígitos
        let digits: String = self.document.chars().filter(char::is_ascii_digit).collect();
        SupplierListQuery {
            nome: non_blank(&self.name),
            cpf_cnpj: non_blank(&digits),
            tipo: self.kind,
            cidade: non_blank(&self.city),
            ativo: flag(self.quick.is_active(SupplierQuickFilter::OnlyActive)),
            inativo: flag(self.quick.is_active(SupplierQuickFilter::OnlyInactive)),
            page,
        }
    }

    fn default_sort() -> Option<SortOrder> {
        Some(SortOrder::asc("nome"))
    }
}
