use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata, WorkOrderId};
use crate::shared::{BadgeVariant, Lifecycle, LifecycleAction, PageRequest, StatusDisplay};

crate::aggregate_id!(
    /// Identificador único da nota fiscal
    InvoiceId
);

/// Modelo do documento fiscal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceKind {
    /// NF-e (produtos)
    Nfe,
    /// NFS-e (serviços)
    Nfse,
    /// NFC-e (consumidor final)
    Nfce,
}

impl InvoiceKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceKind::Nfe => "NF-e",
            InvoiceKind::Nfse => "NFS-e",
            InvoiceKind::Nfce => "NFC-e",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    EmDigitacao,
    Autorizada,
    Cancelada,
    Rejeitada,
    Denegada,
}

impl InvoiceStatus {
    pub fn all() -> Vec<InvoiceStatus> {
        vec![
            InvoiceStatus::EmDigitacao,
            InvoiceStatus::Autorizada,
            InvoiceStatus::Cancelada,
            InvoiceStatus::Rejeitada,
            InvoiceStatus::Denegada,
        ]
    }

    /// Nota ainda editável (pode ser alterada ou excluída)
    pub fn is_editable(&self) -> bool {
        matches!(self, InvoiceStatus::EmDigitacao | InvoiceStatus::Rejeitada)
    }
}

impl StatusDisplay for InvoiceStatus {
    fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::EmDigitacao => "Em digitação",
            InvoiceStatus::Autorizada => "Autorizada",
            InvoiceStatus::Cancelada => "Cancelada",
            InvoiceStatus::Rejeitada => "Rejeitada",
            InvoiceStatus::Denegada => "Denegada",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            InvoiceStatus::EmDigitacao => BadgeVariant::Neutral,
            InvoiceStatus::Autorizada => BadgeVariant::Success,
            InvoiceStatus::Cancelada => BadgeVariant::Neutral,
            InvoiceStatus::Rejeitada => BadgeVariant::Warning,
            InvoiceStatus::Denegada => BadgeVariant::Error,
        }
    }
}

impl Lifecycle for InvoiceStatus {
    fn apply(self, action: LifecycleAction) -> Option<Self> {
        match (self, action) {
            (InvoiceStatus::Autorizada, LifecycleAction::Cancel) => Some(InvoiceStatus::Cancelada),
            _ => None,
        }
    }
}

/// Nota fiscal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,

    /// Atribuído na autorização
    #[serde(rename = "numero", default)]
    pub number: Option<u64>,

    #[serde(rename = "serie", default)]
    pub series: Option<String>,

    #[serde(rename = "tipo")]
    pub kind: InvoiceKind,

    pub status: InvoiceStatus,

    /// Chave de acesso de 44 dígitos
    #[serde(rename = "chaveAcesso", default)]
    pub access_key: Option<String>,

    #[serde(rename = "valorTotal")]
    pub total_amount: f64,

    #[serde(rename = "dataEmissao", default)]
    pub issued_at: Option<DateTime<Utc>>,

    #[serde(rename = "ordemServicoId", default)]
    pub work_order_id: Option<WorkOrderId>,

    #[serde(rename = "destinatarioNome", default)]
    pub recipient_name: Option<String>,

    #[serde(rename = "motivoCancelamento", default)]
    pub cancellation_reason: Option<String>,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Invoice {
    /// "NF-e 1234 / série 1", ou só o modelo enquanto não há número
    pub fn title(&self) -> String {
        match (self.number, self.series.as_deref()) {
            (Some(number), Some(series)) => {
                format!("{} {} / série {}", self.kind.display_name(), number, series)
            }
            (Some(number), None) => format!("{} {}", self.kind.display_name(), number),
            (None, _) => self.kind.display_name().to_string(),
        }
    }

    /// Chave de acesso em blocos de 4 dígitos, como impressa no DANFE
    pub fn formatted_access_key(&self) -> Option<String> {
        let key = self.access_key.as_deref()?;
        let digits: Vec<char> = key.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        Some(
            digits
                .chunks(4)
                .map(|chunk| chunk.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(" "),
        )
    }
}

impl AggregateRoot for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "notas-fiscais"
    }

    fn element_name() -> &'static str {
        "Nota fiscal"
    }

    fn list_name() -> &'static str {
        "Notas fiscais"
    }

    fn is_feminine() -> bool {
        true
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRequest {
    #[serde(rename = "tipo")]
    pub kind: InvoiceKind,

    #[serde(rename = "ordemServicoId", skip_serializing_if = "Option::is_none", default)]
    pub work_order_id: Option<WorkOrderId>,

    #[serde(rename = "serie", skip_serializing_if = "Option::is_none", default)]
    pub series: Option<String>,

    #[serde(rename = "valorTotal")]
    pub total_amount: f64,

    #[serde(rename = "destinatarioNome", skip_serializing_if = "Option::is_none", default)]
    pub recipient_name: Option<String>,
}

/// Corpo de `PATCH /notas-fiscais/{id}/cancelar`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceCancelRequest {
    #[serde(rename = "motivo")]
    pub reason: String,
}

/// Parâmetros de `GET /notas-fiscais`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceListQuery {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub numero: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tipo: Option<InvoiceKind>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<InvoiceStatus>,

    #[serde(rename = "dataInicio", skip_serializing_if = "Option::is_none", default)]
    pub data_inicio: Option<NaiveDate>,

    #[serde(rename = "dataFim", skip_serializing_if = "Option::is_none", default)]
    pub data_fim: Option<NaiveDate>,

    #[serde(flatten)]
    pub page: PageRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice() -> Invoice {
        Invoice {
            id: InvoiceId::new_v4(),
            number: Some(1234),
            series: Some("1".into()),
            kind: InvoiceKind::Nfe,
            status: InvoiceStatus::Autorizada,
            access_key: Some("35240512345678000195550010000012341000012345".into()),
            total_amount: 450.0,
            issued_at: None,
            work_order_id: None,
            recipient_name: None,
            cancellation_reason: None,
            metadata: EntityMetadata::default(),
        }
    }

    #[test]
    fn test_only_authorized_can_be_cancelled() {
        for status in InvoiceStatus::all() {
            let expected = status == InvoiceStatus::Autorizada;
            assert_eq!(status.can(LifecycleAction::Cancel), expected, "{:?}", status);
        }
        assert_eq!(
            InvoiceStatus::Autorizada.transition(LifecycleAction::Cancel),
            Ok(InvoiceStatus::Cancelada)
        );
        assert!(InvoiceStatus::Autorizada.transition(LifecycleAction::Reverse).is_err());
    }

    #[test]
    fn test_title() {
        let mut nf = invoice();
        assert_eq!(nf.title(), "NF-e 1234 / série 1");
        nf.number = None;
        assert_eq!(nf.title(), "NF-e");
    }

    #[test]
    fn test_formatted_access_key() {
        let key = invoice().formatted_access_key().unwrap();
        assert_eq!(key.split(' ').count(), 11);
        assert!(key.starts_with("3524 0512 3456"));
    }
}
