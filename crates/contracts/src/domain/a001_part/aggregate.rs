use serde::{Deserialize, Serialize};

use super::margin::{margin_percent, MarginStatus};
use super::stock_status::{replenishment_quantity, StockStatus};
use crate::domain::a002_storage_location::{StorageLocationId, StorageLocationSummary};
use crate::domain::common::{AggregateRoot, EntityMetadata};
use crate::enums::UnitOfMeasure;
use crate::shared::{ActiveState, PageRequest};

// ============================================================================
// ID Type
// ============================================================================

crate::aggregate_id!(
    /// Identificador único da peça
    PartId
);

// ============================================================================
// Aggregate Root
// ============================================================================

/// Peça do estoque
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: PartId,

    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "marca", default)]
    pub brand: Option<String>,

    #[serde(rename = "unidadeMedida")]
    pub unit: UnitOfMeasure,

    #[serde(rename = "quantidadeAtual")]
    pub current_quantity: i32,

    #[serde(rename = "quantidadeMinima")]
    pub minimum_quantity: i32,

    #[serde(rename = "valorCusto")]
    pub cost_price: f64,

    #[serde(rename = "valorVenda")]
    pub sale_price: f64,

    #[serde(rename = "localArmazenamentoId", default)]
    pub storage_location_id: Option<StorageLocationId>,

    #[serde(rename = "localArmazenamento", default)]
    pub storage_location: Option<StorageLocationSummary>,

    #[serde(rename = "ativo")]
    pub active: bool,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Part {
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::classify(self.current_quantity, self.minimum_quantity)
    }

    /// Margem de lucro (%), indefinida com custo zero
    pub fn margin_percent(&self) -> Option<f64> {
        margin_percent(self.cost_price, self.sale_price)
    }

    /// Margem para exibição: indefinida aparece como 0
    pub fn margin_percent_or_zero(&self) -> f64 {
        self.margin_percent().unwrap_or(0.0)
    }

    /// Faixa da margem; `None` quando a margem é indefinida
    pub fn margin_status(&self) -> Option<MarginStatus> {
        self.margin_percent().map(MarginStatus::classify)
    }

    /// Valor do estoque a preço de custo
    pub fn stock_value(&self) -> f64 {
        f64::from(self.current_quantity.max(0)) * self.cost_price
    }

    pub fn replenishment_quantity(&self) -> i32 {
        replenishment_quantity(self.current_quantity, self.minimum_quantity)
    }

    pub fn active_state(&self) -> ActiveState {
        ActiveState::from_flag(self.active)
    }

    pub fn has_location(&self) -> bool {
        self.storage_location_id.is_some()
    }

    /// Caminho do local para exibição na listagem
    pub fn location_label(&self) -> String {
        match &self.storage_location {
            Some(location) => location.display_path(),
            None => "Sem localização".to_string(),
        }
    }

    /// Quantidade com a unidade ("12 un")
    pub fn quantity_label(&self) -> String {
        self.unit.format_quantity(self.current_quantity)
    }
}

impl AggregateRoot for Part {
    type Id = PartId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "estoque"
    }

    fn element_name() -> &'static str {
        "Peça"
    }

    fn list_name() -> &'static str {
        "Peças"
    }

    fn is_feminine() -> bool {
        true
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO para criar/atualizar uma peça
///
/// A quantidade atual não faz parte do cadastro: muda apenas por movimentações.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartRequest {
    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "marca", skip_serializing_if = "Option::is_none", default)]
    pub brand: Option<String>,

    #[serde(rename = "unidadeMedida")]
    pub unit: UnitOfMeasure,

    #[serde(rename = "quantidadeMinima")]
    pub minimum_quantity: i32,

    #[serde(rename = "valorCusto")]
    pub cost_price: f64,

    #[serde(rename = "valorVenda")]
    pub sale_price: f64,

    #[serde(
        rename = "localArmazenamentoId",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub storage_location_id: Option<StorageLocationId>,
}

impl PartRequest {
    /// Preenche o formulário de edição a partir da peça carregada
    pub fn from_part(part: &Part) -> Self {
        Self {
            code: part.code.clone(),
            description: part.description.clone(),
            brand: part.brand.clone(),
            unit: part.unit,
            minimum_quantity: part.minimum_quantity,
            cost_price: part.cost_price,
            sale_price: part.sale_price,
            storage_location_id: part.storage_location_id,
        }
    }

    /// Prévia da margem enquanto o usuário digita os preços
    pub fn margin_preview(&self) -> Option<MarginStatus> {
        MarginStatus::for_prices(self.cost_price, self.sale_price)
    }
}

/// Corpo de `PATCH /estoque/{id}/definir-localizacao`; `None` remove o local
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineLocationRequest {
    #[serde(rename = "localArmazenamentoId")]
    pub storage_location_id: Option<StorageLocationId>,
}

/// Parâmetros de `GET /estoque`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartListQuery {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub codigo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub descricao: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ativo: Option<bool>,

    #[serde(rename = "estoqueBaixo", skip_serializing_if = "Option::is_none", default)]
    pub estoque_baixo: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub marca: Option<String>,

    #[serde(rename = "unidadeMedida", skip_serializing_if = "Option::is_none", default)]
    pub unidade_medida: Option<UnitOfMeasure>,

    #[serde(
        rename = "localArmazenamentoId",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub local_armazenamento_id: Option<StorageLocationId>,

    #[serde(flatten)]
    pub page: PageRequest,
}
