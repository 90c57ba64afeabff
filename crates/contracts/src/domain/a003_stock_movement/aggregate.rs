use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::movement_type::MovementType;
use crate::domain::a001_part::PartId;
use crate::domain::common::{AggregateRoot, WorkOrderId};
use crate::shared::PageRequest;

crate::aggregate_id!(
    /// Identificador único da movimentação
    StockMovementId
);

/// Movimentação de estoque (somente leitura: criada pelos endpoints de entrada,
/// saída e ajuste)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: StockMovementId,

    #[serde(rename = "pecaId")]
    pub part_id: PartId,

    #[serde(rename = "pecaCodigo", default)]
    pub part_code: Option<String>,

    #[serde(rename = "pecaDescricao", default)]
    pub part_description: Option<String>,

    #[serde(rename = "tipo")]
    pub kind: MovementType,

    /// Quantidade absoluta; o sentido vem do tipo
    #[serde(rename = "quantidade")]
    pub quantity: i32,

    #[serde(rename = "quantidadeAnterior")]
    pub quantity_before: i32,

    #[serde(rename = "quantidadeAtual")]
    pub quantity_after: i32,

    #[serde(rename = "valorUnitario", default)]
    pub unit_price: Option<f64>,

    #[serde(rename = "valorTotal", default)]
    pub total_value: Option<f64>,

    #[serde(rename = "ordemServicoId", default)]
    pub work_order_id: Option<WorkOrderId>,

    #[serde(rename = "motivo", default)]
    pub reason: Option<String>,

    #[serde(rename = "observacao", default)]
    pub note: Option<String>,

    #[serde(rename = "usuarioNome", default)]
    pub user_name: Option<String>,

    #[serde(rename = "dataMovimentacao")]
    pub moved_at: DateTime<Utc>,
}

impl StockMovement {
    pub fn signed_quantity(&self) -> i32 {
        self.kind.sign().apply(self.quantity)
    }

    /// Quantidade com sinal para a tabela ("+5", "-3", "2")
    pub fn quantity_label(&self) -> String {
        format!("{}{}", self.kind.sign().glyph(), self.quantity.unsigned_abs())
    }

    /// Valor total informado, ou quantidade × valor unitário
    pub fn effective_total(&self) -> Option<f64> {
        self.total_value
            .or_else(|| self.unit_price.map(|price| price * f64::from(self.quantity.unsigned_abs())))
    }

    /// Diferença de saldo registrada pelo backend
    pub fn balance_delta(&self) -> i32 {
        self.quantity_after.saturating_sub(self.quantity_before)
    }
}

impl AggregateRoot for StockMovement {
    type Id = StockMovementId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "movimentacoes-estoque"
    }

    fn element_name() -> &'static str {
        "Movimentação"
    }

    fn list_name() -> &'static str {
        "Movimentações de estoque"
    }

    fn is_feminine() -> bool {
        true
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Corpo de `POST /movimentacoes-estoque/entrada`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockEntryRequest {
    #[serde(rename = "pecaId")]
    pub part_id: PartId,

    #[serde(rename = "quantidade")]
    pub quantity: i32,

    #[serde(rename = "valorUnitario", skip_serializing_if = "Option::is_none", default)]
    pub unit_price: Option<f64>,

    #[serde(rename = "motivo", skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,

    #[serde(rename = "observacao", skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl StockEntryRequest {
    pub fn stock_after(&self, current: i32) -> i32 {
        MovementType::Entrada.stock_after(current, self.quantity)
    }
}

/// Corpo de `POST /movimentacoes-estoque/saida`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockExitRequest {
    #[serde(rename = "pecaId")]
    pub part_id: PartId,

    #[serde(rename = "quantidade")]
    pub quantity: i32,

    #[serde(rename = "ordemServicoId", skip_serializing_if = "Option::is_none", default)]
    pub work_order_id: Option<WorkOrderId>,

    #[serde(rename = "motivo", skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,

    #[serde(rename = "observacao", skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl StockExitRequest {
    /// Saída vinculada a OS é registrada como baixa por OS
    pub fn movement_type(&self) -> MovementType {
        if self.work_order_id.is_some() {
            MovementType::BaixaOs
        } else {
            MovementType::Saida
        }
    }

    pub fn stock_after(&self, current: i32) -> i32 {
        self.movement_type().stock_after(current, self.quantity)
    }

    /// A saída pedida é maior que o saldo disponível
    pub fn exceeds_stock(&self, current: i32) -> bool {
        self.quantity > current.max(0)
    }
}

/// Corpo de `POST /movimentacoes-estoque/ajuste`: informa o novo saldo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAdjustmentRequest {
    #[serde(rename = "pecaId")]
    pub part_id: PartId,

    #[serde(rename = "quantidadeNova")]
    pub new_quantity: i32,

    #[serde(rename = "motivo")]
    pub reason: String,

    #[serde(rename = "observacao", skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl StockAdjustmentRequest {
    /// Tipo e quantidade que o ajuste vai gerar; `None` se o saldo não muda
    pub fn preview(&self, current: i32) -> Option<(MovementType, i32)> {
        MovementType::for_adjustment(current, self.new_quantity)
            .map(|kind| (kind, self.new_quantity.saturating_sub(current).saturating_abs()))
    }
}

/// Parâmetros de `GET /movimentacoes-estoque`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockMovementListQuery {
    #[serde(rename = "pecaId", skip_serializing_if = "Option::is_none", default)]
    pub peca_id: Option<PartId>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tipo: Option<MovementType>,

    #[serde(rename = "dataInicio", skip_serializing_if = "Option::is_none", default)]
    pub data_inicio: Option<NaiveDate>,

    #[serde(rename = "dataFim", skip_serializing_if = "Option::is_none", default)]
    pub data_fim: Option<NaiveDate>,

    #[serde(flatten)]
    pub page: PageRequest,
}
