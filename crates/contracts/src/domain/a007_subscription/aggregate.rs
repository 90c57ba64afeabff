use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, CustomerId, EntityMetadata};
use crate::shared::{BadgeVariant, Lifecycle, LifecycleAction, PageRequest, StatusDisplay};

// ============================================================================
// ID Type
// ============================================================================

crate::aggregate_id!(
    /// Identificador único da assinatura
    SubscriptionId
);

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Periodicity {
    Mensal,
    Trimestral,
    Semestral,
    Anual,
}

impl Periodicity {
    pub fn months(&self) -> u32 {
        match self {
            Periodicity::Mensal => 1,
            Periodicity::Trimestral => 3,
            Periodicity::Semestral => 6,
            Periodicity::Anual => 12,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Periodicity::Mensal => "Mensal",
            Periodicity::Trimestral => "Trimestral",
            Periodicity::Semestral => "Semestral",
            Periodicity::Anual => "Anual",
        }
    }

    /// Próxima cobrança a partir de `from`; dia 31 vira o último dia do mês
    pub fn next_billing_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        self.cycle_date(from, 1)
    }

    /// Data do `cycle`-ésimo ciclo contado sempre a partir do início,
    /// para que o ajuste ao fim do mês não se acumule
    pub fn cycle_date(&self, start: NaiveDate, cycle: u32) -> Option<NaiveDate> {
        start.checked_add_months(Months::new(cycle.checked_mul(self.months())?))
    }

    /// Valor equivalente por mês
    pub fn monthly_equivalent(&self, amount: f64) -> f64 {
        amount / f64::from(self.months())
    }

    pub fn all() -> Vec<Periodicity> {
        vec![
            Periodicity::Mensal,
            Periodicity::Trimestral,
            Periodicity::Semestral,
            Periodicity::Anual,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Ativa,
    Pausada,
    Cancelada,
    Inadimplente,
}

impl SubscriptionStatus {
    pub fn all() -> Vec<SubscriptionStatus> {
        vec![
            SubscriptionStatus::Ativa,
            SubscriptionStatus::Pausada,
            SubscriptionStatus::Cancelada,
            SubscriptionStatus::Inadimplente,
        ]
    }

    /// Gera faturas nos próximos ciclos
    pub fn is_billing(&self) -> bool {
        matches!(self, SubscriptionStatus::Ativa | SubscriptionStatus::Inadimplente)
    }
}

impl StatusDisplay for SubscriptionStatus {
    fn label(&self) -> &'static str {
        match self {
            SubscriptionStatus::Ativa => "Ativa",
            SubscriptionStatus::Pausada => "Pausada",
            SubscriptionStatus::Cancelada => "Cancelada",
            SubscriptionStatus::Inadimplente => "Inadimplente",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            SubscriptionStatus::Ativa => BadgeVariant::Success,
            SubscriptionStatus::Pausada => BadgeVariant::Warning,
            SubscriptionStatus::Cancelada => BadgeVariant::Neutral,
            SubscriptionStatus::Inadimplente => BadgeVariant::Error,
        }
    }
}

impl Lifecycle for SubscriptionStatus {
    fn apply(self, action: LifecycleAction) -> Option<Self> {
        use LifecycleAction::*;
        use SubscriptionStatus::*;

        match (self, action) {
            (Ativa, Pause) => Some(Pausada),
            (Pausada | Inadimplente, Reactivate) => Some(Ativa),
            (Ativa | Pausada | Inadimplente, Cancel) => Some(Cancelada),
            _ => None,
        }
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Assinatura de cobrança recorrente
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    pub id: SubscriptionId,

    #[serde(rename = "clienteId")]
    pub customer_id: CustomerId,

    #[serde(rename = "clienteNome", default)]
    pub customer_name: Option<String>,

    #[serde(rename = "planoNome")]
    pub plan_name: String,

    #[serde(rename = "periodicidade")]
    pub periodicity: Periodicity,

    pub status: SubscriptionStatus,

    #[serde(rename = "valor")]
    pub amount: f64,

    #[serde(rename = "dataInicio")]
    pub start_date: NaiveDate,

    #[serde(rename = "dataProximaCobranca", default)]
    pub next_billing_date: Option<NaiveDate>,

    #[serde(rename = "diaVencimento", default)]
    pub due_day: Option<u32>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Subscription {
    pub fn monthly_amount(&self) -> f64 {
        self.periodicity.monthly_equivalent(self.amount)
    }

    /// Data da próxima cobrança: a do backend, ou calculada a partir do início
    /// avançando ciclos até passar de `today`
    pub fn upcoming_billing_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        if !self.status.is_billing() {
            return None;
        }
        if let Some(next) = self.next_billing_date {
            return Some(next);
        }
        let mut cycle = 0u32;
        loop {
            let mut date = self.periodicity.cycle_date(self.start_date, cycle)?;
            if let Some(day) = self.due_day {
                date = with_day_clamped(date, day)?;
            }
            if date > today && date >= self.start_date {
                return Some(date);
            }
            cycle = cycle.checked_add(1)?;
        }
    }
}

impl AggregateRoot for Subscription {
    type Id = SubscriptionId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "financeiro/assinaturas"
    }

    fn element_name() -> &'static str {
        "Assinatura"
    }

    fn list_name() -> &'static str {
        "Assinaturas"
    }

    fn is_feminine() -> bool {
        true
    }
}

/// Mesmo mês de `date` com o dia `day`, limitado ao último dia do mês
fn with_day_clamped(date: NaiveDate, day: u32) -> Option<NaiveDate> {
    let first = date.with_day(1)?;
    let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
    date.with_day(day.clamp(1, last.day()))
}

/// Receita recorrente mensal das assinaturas que estão faturando
pub fn monthly_recurring_revenue(subscriptions: &[Subscription]) -> f64 {
    subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Ativa)
        .map(Subscription::monthly_amount)
        .sum()
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionRequest {
    #[serde(rename = "clienteId")]
    pub customer_id: CustomerId,

    #[serde(rename = "planoNome")]
    pub plan_name: String,

    #[serde(rename = "periodicidade")]
    pub periodicity: Periodicity,

    #[serde(rename = "valor")]
    pub amount: f64,

    #[serde(rename = "dataInicio")]
    pub start_date: NaiveDate,

    #[serde(rename = "diaVencimento", skip_serializing_if = "Option::is_none", default)]
    pub due_day: Option<u32>,
}

/// Parâmetros de `GET /financeiro/assinaturas`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionListQuery {
    #[serde(rename = "clienteNome", skip_serializing_if = "Option::is_none", default)]
    pub cliente_nome: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<SubscriptionStatus>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub periodicidade: Option<Periodicity>,

    #[serde(flatten)]
    pub page: PageRequest,
}
