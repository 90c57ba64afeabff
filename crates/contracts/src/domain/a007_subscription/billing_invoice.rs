use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::SubscriptionId;
use crate::shared::{BadgeVariant, StatusDisplay};

crate::aggregate_id!(
    /// Identificador único da fatura
    BillingInvoiceId
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingInvoiceStatus {
    Pendente,
    Paga,
    Vencida,
    Cancelada,
}

impl StatusDisplay for BillingInvoiceStatus {
    fn label(&self) -> &'static str {
        match self {
            BillingInvoiceStatus::Pendente => "Pendente",
            BillingInvoiceStatus::Paga => "Paga",
            BillingInvoiceStatus::Vencida => "Vencida",
            BillingInvoiceStatus::Cancelada => "Cancelada",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            BillingInvoiceStatus::Pendente => BadgeVariant::Warning,
            BillingInvoiceStatus::Paga => BadgeVariant::Success,
            BillingInvoiceStatus::Vencida => BadgeVariant::Error,
            BillingInvoiceStatus::Cancelada => BadgeVariant::Neutral,
        }
    }
}

/// Fatura gerada por uma assinatura (`GET /financeiro/assinaturas/{id}/faturas`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingInvoice {
    pub id: BillingInvoiceId,

    #[serde(rename = "assinaturaId")]
    pub subscription_id: SubscriptionId,

    #[serde(rename = "numero", default)]
    pub number: Option<String>,

    #[serde(rename = "valor")]
    pub amount: f64,

    pub status: BillingInvoiceStatus,

    /// Competência no formato `AAAA-MM`
    #[serde(rename = "mesReferencia")]
    pub reference_month: String,

    #[serde(rename = "dataVencimento")]
    pub due_date: NaiveDate,

    #[serde(rename = "dataPagamento", default)]
    pub paid_on: Option<NaiveDate>,
}

impl BillingInvoice {
    pub fn effective_status(&self, today: NaiveDate) -> BillingInvoiceStatus {
        match self.status {
            BillingInvoiceStatus::Pendente if self.due_date < today => BillingInvoiceStatus::Vencida,
            status => status,
        }
    }

    /// Competência como "05/2024"
    pub fn reference_label(&self) -> String {
        match self.reference_month.split_once('-') {
            Some((year, month)) => format!("{}/{}", month, year),
            None => self.reference_month.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_billing_invoice() {
        let json = r#"{
            "id": "1f2e3d4c-5b6a-4978-8877-665544332211",
            "assinaturaId": "aa2e3d4c-5b6a-4978-8877-665544332211",
            "valor": 150.0,
            "status": "PENDENTE",
            "mesReferencia": "2024-05",
            "dataVencimento": "2024-05-10"
        }"#;
        let invoice: BillingInvoice = serde_json::from_str(json).unwrap();
        assert_eq!(invoice.reference_label(), "05/2024");

        let before = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let after = NaiveDate::from_ymd_opt(2024, 5, 11).unwrap();
        assert_eq!(invoice.effective_status(before), BillingInvoiceStatus::Pendente);
        assert_eq!(invoice.effective_status(after), BillingInvoiceStatus::Vencida);
        assert_eq!(invoice.effective_status(after).label(), "Vencida");
    }
}
