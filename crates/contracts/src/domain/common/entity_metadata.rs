use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadados de auditoria que o backend devolve em todas as entidades
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Data de criação do registro
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Data da última atualização
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl EntityMetadata {
    /// Instante da última alteração conhecida (atualização ou criação)
    pub fn last_changed(&self) -> Option<DateTime<Utc>> {
        self.updated_at.or(self.created_at)
    }
}
