use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata};
use crate::shared::{ActiveState, PageRequest};

// ============================================================================
// ID Type
// ============================================================================

crate::aggregate_id!(
    /// Identificador único do local de armazenamento
    StorageLocationId
);

// ============================================================================
// Enums
// ============================================================================

/// Tipo do local na hierarquia física (depósito → prateleira → gaveta ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StorageLocationType {
    Deposito,
    Almoxarifado,
    Prateleira,
    Gaveta,
    Caixa,
    Vitrine,
    Outro,
}

impl StorageLocationType {
    pub fn display_name(&self) -> &'static str {
        match self {
            StorageLocationType::Deposito => "Depósito",
            StorageLocationType::Almoxarifado => "Almoxarifado",
            StorageLocationType::Prateleira => "Prateleira",
            StorageLocationType::Gaveta => "Gaveta",
            StorageLocationType::Caixa => "Caixa",
            StorageLocationType::Vitrine => "Vitrine",
            StorageLocationType::Outro => "Outro",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StorageLocationType::Deposito | StorageLocationType::Almoxarifado => "warehouse",
            StorageLocationType::Prateleira | StorageLocationType::Vitrine => "layers",
            StorageLocationType::Gaveta | StorageLocationType::Caixa => "archive",
            StorageLocationType::Outro => "map-pin",
        }
    }

    pub fn all() -> Vec<StorageLocationType> {
        vec![
            StorageLocationType::Deposito,
            StorageLocationType::Almoxarifado,
            StorageLocationType::Prateleira,
            StorageLocationType::Gaveta,
            StorageLocationType::Caixa,
            StorageLocationType::Vitrine,
            StorageLocationType::Outro,
        ]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Local de armazenamento (hierárquico)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageLocation {
    pub id: StorageLocationId,

    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "tipo")]
    pub kind: StorageLocationType,

    #[serde(rename = "descricao", default)]
    pub description: Option<String>,

    #[serde(rename = "localizacaoPaiId", default)]
    pub parent_id: Option<StorageLocationId>,

    /// Caminho montado pelo backend ("Depósito A > Prateleira 3")
    #[serde(rename = "caminhoCompleto", default)]
    pub full_path: Option<String>,

    /// Profundidade na árvore (raiz = 0)
    #[serde(rename = "nivel", default)]
    pub level: u32,

    #[serde(rename = "ativo")]
    pub active: bool,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl StorageLocation {
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn active_state(&self) -> ActiveState {
        ActiveState::from_flag(self.active)
    }

    pub fn summary(&self) -> StorageLocationSummary {
        StorageLocationSummary {
            id: self.id,
            code: self.code.clone(),
            name: self.name.clone(),
            kind: self.kind,
            full_path: self.full_path.clone(),
        }
    }
}

impl AggregateRoot for StorageLocation {
    type Id = StorageLocationId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "locais-armazenamento"
    }

    fn element_name() -> &'static str {
        "Local de armazenamento"
    }

    fn list_name() -> &'static str {
        "Locais de armazenamento"
    }
}

/// Resumo embutido em outras entidades (por exemplo, na peça)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageLocationSummary {
    pub id: StorageLocationId,

    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "tipo")]
    pub kind: StorageLocationType,

    #[serde(rename = "caminhoCompleto", default)]
    pub full_path: Option<String>,
}

impl StorageLocationSummary {
    /// Caminho completo, ou o nome quando o backend não o envia
    pub fn display_path(&self) -> String {
        match &self.full_path {
            Some(path) if !path.trim().is_empty() => path.clone(),
            _ => self.name.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO para criar/atualizar um local
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageLocationRequest {
    #[serde(rename = "codigo")]
    pub code: String,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "tipo")]
    pub kind: StorageLocationType,

    #[serde(rename = "descricao", skip_serializing_if = "Option::is_none", default)]
    pub description: Option<String>,

    #[serde(rename = "localizacaoPaiId", default)]
    pub parent_id: Option<StorageLocationId>,
}

/// Parâmetros de `GET /locais-armazenamento`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageLocationListQuery {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nome: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tipo: Option<StorageLocationType>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ativo: Option<bool>,

    #[serde(flatten)]
    pub page: PageRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_location() {
        let json = r#"{
            "id": "0b0c7a8e-6f6e-4a4e-9c1f-2f7f4b1d9e01",
            "codigo": "PRT-03",
            "nome": "Prateleira 3",
            "tipo": "PRATELEIRA",
            "localizacaoPaiId": "6a7e2c10-1d2f-4b0e-8a55-9b1c2d3e4f50",
            "caminhoCompleto": "Depósito A > Prateleira 3",
            "nivel": 1,
            "ativo": true
        }"#;
        let location: StorageLocation = serde_json::from_str(json).unwrap();
        assert!(!location.is_root());
        assert_eq!(location.kind.display_name(), "Prateleira");
        assert_eq!(location.summary().display_path(), "Depósito A > Prateleira 3");
    }

    #[test]
    fn test_display_path_falls_back_to_name() {
        let summary = StorageLocationSummary {
            id: StorageLocationId::new_v4(),
            code: "G1".into(),
            name: "Gaveta 1".into(),
            kind: StorageLocationType::Gaveta,
            full_path: Some("  ".into()),
        };
        assert_eq!(summary.display_path(), "Gaveta 1");
    }
}
