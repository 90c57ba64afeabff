use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateRoot, EntityMetadata};
use crate::shared::{ActiveState, PageRequest};

// ============================================================================
// ID Type
// ============================================================================

crate::aggregate_id!(
    /// Identificador único do fornecedor
    SupplierId
);

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierType {
    Fabricante,
    Distribuidor,
    Atacadista,
    Varejista,
    Importador,
    Outro,
}

impl SupplierType {
    pub fn display_name(&self) -> &'static str {
        match self {
            SupplierType::Fabricante => "Fabricante",
            SupplierType::Distribuidor => "Distribuidor",
            SupplierType::Atacadista => "Atacadista",
            SupplierType::Varejista => "Varejista",
            SupplierType::Importador => "Importador",
            SupplierType::Outro => "Outro",
        }
    }

    pub fn all() -> Vec<SupplierType> {
        vec![
            SupplierType::Fabricante,
            SupplierType::Distribuidor,
            SupplierType::Atacadista,
            SupplierType::Varejista,
            SupplierType::Importador,
            SupplierType::Outro,
        ]
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "logradouro", default)]
    pub street: Option<String>,
    #[serde(rename = "numero", default)]
    pub number: Option<String>,
    #[serde(rename = "complemento", default)]
    pub complement: Option<String>,
    #[serde(rename = "bairro", default)]
    pub district: Option<String>,
    #[serde(rename = "cidade", default)]
    pub city: Option<String>,
    /// UF
    #[serde(rename = "estado", default)]
    pub state: Option<String>,
    #[serde(rename = "cep", default)]
    pub postal_code: Option<String>,
}

impl Address {
    /// "Cidade/UF", ou o que existir
    pub fn city_label(&self) -> Option<String> {
        let city = self.city.as_deref().map(str::trim).filter(|c| !c.is_empty());
        let state = self.state.as_deref().map(str::trim).filter(|s| !s.is_empty());
        match (city, state) {
            (Some(c), Some(s)) => Some(format!("{}/{}", c, s)),
            (Some(c), None) => Some(c.to_string()),
            (None, Some(s)) => Some(s.to_string()),
            (None, None) => None,
        }
    }
}

/// Fornecedor de peças
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,

    /// Razão social
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "nomeFantasia", default)]
    pub trade_name: Option<String>,

    #[serde(rename = "tipo")]
    pub kind: SupplierType,

    /// CPF ou CNPJ (apenas dígitos ou já formatado)
    #[serde(rename = "cpfCnpj", default)]
    pub document: Option<String>,

    #[serde(rename = "inscricaoEstadual", default)]
    pub state_registration: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(rename = "telefone", default)]
    pub phone: Option<String>,

    #[serde(rename = "celular", default)]
    pub mobile: Option<String>,

    #[serde(rename = "contatoNome", default)]
    pub contact_name: Option<String>,

    #[serde(rename = "endereco", default)]
    pub address: Option<Address>,

    #[serde(rename = "prazoEntregaDias", default)]
    pub delivery_days: Option<u32>,

    #[serde(rename = "observacoes", default)]
    pub notes: Option<String>,

    #[serde(rename = "ativo")]
    pub active: bool,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Supplier {
    /// Nome fantasia quando existe, senão a razão social
    pub fn display_name(&self) -> &str {
        match self.trade_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.name,
        }
    }

    pub fn formatted_document(&self) -> Option<String> {
        self.document.as_deref().map(format_document)
    }

    /// Primeiro telefone disponível (celular tem prioridade)
    pub fn main_phone(&self) -> Option<&str> {
        self.mobile
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .or_else(|| self.phone.as_deref().filter(|p| !p.trim().is_empty()))
    }

    pub fn active_state(&self) -> ActiveState {
        ActiveState::from_flag(self.active)
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "fornecedores"
    }

    fn element_name() -> &'static str {
        "Fornecedor"
    }

    fn list_name() -> &'static str {
        "Fornecedores"
    }
}

/// Formata CPF (11 dígitos) ou CNPJ (14 dígitos); outros valores voltam como vieram
pub fn format_document(document: &str) -> String {
    let digits: String = document.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        11 => format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        ),
        14 => format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        ),
        _ => document.to_string(),
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO para criar/atualizar um fornecedor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRequest {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "nomeFantasia", skip_serializing_if = "Option::is_none", default)]
    pub trade_name: Option<String>,

    #[serde(rename = "tipo")]
    pub kind: SupplierType,

    #[serde(rename = "cpfCnpj", skip_serializing_if = "Option::is_none", default)]
    pub document: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub email: Option<String>,

    #[serde(rename = "telefone", skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,

    #[serde(rename = "celular", skip_serializing_if = "Option::is_none", default)]
    pub mobile: Option<String>,

    #[serde(rename = "contatoNome", skip_serializing_if = "Option::is_none", default)]
    pub contact_name: Option<String>,

    #[serde(rename = "endereco", skip_serializing_if = "Option::is_none", default)]
    pub address: Option<Address>,

    #[serde(rename = "prazoEntregaDias", skip_serializing_if = "Option::is_none", default)]
    pub delivery_days: Option<u32>,

    #[serde(rename = "observacoes", skip_serializing_if = "Option::is_none", default)]
    pub notes: Option<String>,
}

/// Parâmetros de `GET /fornecedores`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplierListQuery {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub nome: Option<String>,

    #[serde(rename = "cpfCnpj", skip_serializing_if = "Option::is_none", default)]
    pub cpf_cnpj: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tipo: Option<SupplierType>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub cidade: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ativo: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub inativo: Option<bool>,

    #[serde(flatten)]
    pub page: PageRequest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_document() {
        assert_eq!(format_document("12345678901"), "123.456.789-01");
        assert_eq!(format_document("12345678000195"), "12.345.678/0001-95");
        assert_eq!(format_document("12.345.678/0001-95"), "12.345.678/0001-95");
        assert_eq!(format_document("123"), "123");
    }

    #[test]
    fn test_display_helpers() {
        let json = r#"{
            "id": "9d1e4a5b-3c2f-4e6d-8a7b-1c2d3e4f5a6b",
            "nome": "Auto Peças Silva LTDA",
            "nomeFantasia": "Silva Peças",
            "tipo": "DISTRIBUIDOR",
            "cpfCnpj": "12345678000195",
            "telefone": "1133334444",
            "celular": "",
            "endereco": {"cidade": "Campinas", "estado": "SP"},
            "ativo": false
        }"#;
        let supplier: Supplier = serde_json::from_str(json).unwrap();
        assert_eq!(supplier.display_name(), "Silva Peças");
        assert_eq!(supplier.formatted_document().as_deref(), Some("12.345.678/0001-95"));
        assert_eq!(supplier.main_phone(), Some("1133334444"));
        assert_eq!(
            supplier.address.as_ref().and_then(Address::city_label).as_deref(),
            Some("Campinas/SP")
        );
        assert_eq!(supplier.active_state(), ActiveState::Inativo);
    }
}
