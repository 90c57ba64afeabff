use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, WorkOrderId};
use crate::shared::{BadgeVariant, Lifecycle, LifecycleAction, PageRequest, StatusDisplay};

// ============================================================================
// ID Type
// ============================================================================

crate::aggregate_id!(
    /// Identificador único do pagamento
    PaymentId
);

// ============================================================================
// Enums
// ============================================================================

/// Forma de pagamento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Dinheiro,
    Pix,
    CartaoCredito,
    CartaoDebito,
    Boleto,
    Transferencia,
    Cheque,
}

impl PaymentMethod {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentMethod::Dinheiro => "Dinheiro",
            PaymentMethod::Pix => "PIX",
            PaymentMethod::CartaoCredito => "Cartão de crédito",
            PaymentMethod::CartaoDebito => "Cartão de débito",
            PaymentMethod::Boleto => "Boleto",
            PaymentMethod::Transferencia => "Transferência",
            PaymentMethod::Cheque => "Cheque",
        }
    }

    /// Formas que aceitam parcelamento
    pub fn allows_installments(&self) -> bool {
        matches!(
            self,
            PaymentMethod::CartaoCredito | PaymentMethod::Boleto | PaymentMethod::Cheque
        )
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![
            PaymentMethod::Dinheiro,
            PaymentMethod::Pix,
            PaymentMethod::CartaoCredito,
            PaymentMethod::CartaoDebito,
            PaymentMethod::Boleto,
            PaymentMethod::Transferencia,
            PaymentMethod::Cheque,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pendente,
    Pago,
    Cancelado,
    Estornado,
    Vencido,
}

impl PaymentStatus {
    pub fn all() -> Vec<PaymentStatus> {
        vec![
            PaymentStatus::Pendente,
            PaymentStatus::Pago,
            PaymentStatus::Cancelado,
            PaymentStatus::Estornado,
            PaymentStatus::Vencido,
        ]
    }

    /// Ainda pode ser recebido
    pub fn is_open(&self) -> bool {
        matches!(self, PaymentStatus::Pendente | PaymentStatus::Vencido)
    }
}

impl StatusDisplay for PaymentStatus {
    fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pendente => "Pendente",
            PaymentStatus::Pago => "Pago",
            PaymentStatus::Cancelado => "Cancelado",
            PaymentStatus::Estornado => "Estornado",
            PaymentStatus::Vencido => "Vencido",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            PaymentStatus::Pendente => BadgeVariant::Warning,
            PaymentStatus::Pago => BadgeVariant::Success,
            PaymentStatus::Cancelado => BadgeVariant::Neutral,
            PaymentStatus::Estornado => BadgeVariant::Primary,
            PaymentStatus::Vencido => BadgeVariant::Error,
        }
    }
}

impl Lifecycle for PaymentStatus {
    fn apply(self, action: LifecycleAction) -> Option<Self> {
        use LifecycleAction::*;
        use PaymentStatus::*;

        match (self, action) {
            (Pendente | Vencido, Confirm) => Some(Pago),
            (Pendente | Vencido, Cancel) => Some(Cancelado),
            (Pago, Reverse) => Some(Estornado),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Pagamento (geralmente vinculado a uma ordem de serviço)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,

    #[serde(rename = "ordemServicoId", default)]
    pub work_order_id: Option<WorkOrderId>,

    #[serde(rename = "tipo")]
    pub method: PaymentMethod,

    pub status: PaymentStatus,

    #[serde(rename = "valor")]
    pub amount: f64,

    #[serde(rename = "parcelas", default = "default_installments")]
    pub installments: u32,

    #[serde(rename = "parcelaAtual", default = "default_installments")]
    pub current_installment: u32,

    #[serde(rename = "dataVencimento", default)]
    pub due_date: Option<NaiveDate>,

    #[serde(rename = "dataPagamento", default)]
    pub paid_on: Option<NaiveDate>,

    #[serde(rename = "observacao", default)]
    pub note: Option<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

fn default_installments() -> u32 {
    1
}

impl Payment {
    /// Status para exibição: pendente com vencimento passado aparece como vencido
    pub fn effective_status(&self, today: NaiveDate) -> PaymentStatus {
        match (self.status, self.due_date) {
            (PaymentStatus::Pendente, Some(due)) if due < today => PaymentStatus::Vencido,
            (status, _) => status,
        }
    }

    /// Dias em atraso (0 se não está vencido)
    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        match self.due_date {
            Some(due) if self.effective_status(today) == PaymentStatus::Vencido => {
                (today - due).num_days().max(0)
            }
            _ => 0,
        }
    }

    /// "2/3" para parcelados, `None` à vista
    pub fn installment_label(&self) -> Option<String> {
        if self.installments > 1 {
            Some(format!("{}/{}", self.current_installment, self.installments))
        } else {
            None
        }
    }

    pub fn available_actions(&self, today: NaiveDate) -> Vec<LifecycleAction> {
        self.effective_status(today).available_actions()
    }
}

impl AggregateRoot for Payment {
    type Id = PaymentId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "pagamentos"
    }

    fn element_name() -> &'static str {
        "Pagamento"
    }

    fn list_name() -> &'static str {
        "Pagamentos"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    #[serde(rename = "ordemServicoId", skip_serializing_if = "Option::is_none", default)]
    pub work_order_id: Option<WorkOrderId>,

    #[serde(rename = "tipo")]
    pub method: PaymentMethod,

    #[serde(rename = "valor")]
    pub amount: f64,

    #[serde(rename = "parcelas", default = "default_installments")]
    pub installments: u32,

    #[serde(rename = "dataVencimento", skip_serializing_if = "Option::is_none", default)]
    pub due_date: Option<NaiveDate>,

    #[serde(rename = "observacao", skip_serializing_if = "Option::is_none", default)]
    pub note: Option<String>,
}

impl PaymentRequest {
    /// Valor de cada parcela, arredondado a centavos; a última absorve a diferença
    pub fn installment_amounts(&self) -> Vec<f64> {
        let count = if self.method.allows_installments() {
            self.installments.max(1)
        } else {
            1
        };
        let total_cents = (self.amount * 100.0).round() as i64;
        let base = total_cents / i64::from(count);
        let mut amounts: Vec<f64> = (0..count).map(|_| base as f64 / 100.0).collect();
        let remainder = total_cents - base * i64::from(count);
        if let Some(last) = amounts.last_mut() {
            *last = (base + remainder) as f64 / 100.0;
        }
        amounts
    }
}

/// Parâmetros de `GET /pagamentos`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentListQuery {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<PaymentStatus>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tipo: Option<PaymentMethod>,

    #[serde(rename = "ordemServicoId", skip_serializing_if = "Option::is_none", default)]
    pub ordem_servico_id: Option<WorkOrderId>,

    #[serde(rename = "dataInicio", skip_serializing_if = "Option::is_none", default)]
    pub data_inicio: Option<NaiveDate>,

    #[serde(rename = "dataFim", skip_serializing_if = "Option::is_none", default)]
    pub data_fim: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vencidos: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pendentes: Option<bool>,

    #[serde(flatten)]
    pub page: PageRequest,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::TransitionError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payment(status: PaymentStatus, due: Option<NaiveDate>) -> Payment {
        Payment {
            id: PaymentId::new_v4(),
            work_order_id: None,
            method: PaymentMethod::Boleto,
            status,
            amount: 300.0,
            installments: 3,
            current_installment: 2,
            due_date: due,
            paid_on: None,
            note: None,
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_transition_table() {
        use LifecycleAction::*;
        use PaymentStatus::*;

        assert_eq!(Pendente.available_actions(), vec![Confirm, Cancel]);
        assert_eq!(Vencido.available_actions(), vec![Confirm, Cancel]);
        assert_eq!(Pago.available_actions(), vec![Reverse]);
        assert!(Cancelado.is_terminal());
        assert!(Estornado.is_terminal());

        assert_eq!(Pendente.transition(Confirm), Ok(Pago));
        assert_eq!(Pago.transition(Reverse), Ok(Estornado));
        assert_eq!(
            Pago.transition(Cancel),
            Err(TransitionError::NotAllowed {
                action: Cancel,
                status: "Pago"
            })
        );
    }

    #[test]
    fn test_effective_status() {
        let today = date(2024, 5, 10);
        let overdue = payment(PaymentStatus::Pendente, Some(date(2024, 5, 1)));
        assert_eq!(overdue.effective_status(today), PaymentStatus::Vencido);
        assert_eq!(overdue.days_overdue(today), 9);

        let due_today = payment(PaymentStatus::Pendente, Some(today));
        assert_eq!(due_today.effective_status(today), PaymentStatus::Pendente);
        assert_eq!(due_today.days_overdue(today), 0);

        let paid = payment(PaymentStatus::Pago, Some(date(2024, 5, 1)));
        assert_eq!(paid.effective_status(today), PaymentStatus::Pago);
        assert_eq!(paid.available_actions(today), vec![LifecycleAction::Reverse]);
    }

    #[test]
    fn test_installment_label() {
        let p = payment(PaymentStatus::Pendente, None);
        assert_eq!(p.installment_label().as_deref(), Some("2/3"));
    }

    #[test]
    fn test_installment_amounts() {
        let request = PaymentRequest {
            work_order_id: None,
            method: PaymentMethod::CartaoCredito,
            amount: 100.0,
            installments: 3,
            due_date: None,
            note: None,
        };
        assert_eq!(request.installment_amounts(), vec![33.33, 33.33, 33.34]);

        let pix = PaymentRequest {
            method: PaymentMethod::Pix,
            ..request
        };
        assert_eq!(pix.installment_amounts(), vec![100.0]);
    }
}
