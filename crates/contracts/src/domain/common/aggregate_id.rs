use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait para os tipos de identificador de agregados
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Converte o ID em string (segmento de URL, chave de cache)
    fn as_string(&self) -> String;

    /// Cria o ID a partir de uma string
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s).map_err(|e| format!("UUID inválido: {}", e))
    }
}

/// Declara um newtype de ID sobre `Uuid` com a implementação de [`AggregateId`].
///
/// Serializado de forma transparente: no JSON do backend o ID é a string do UUID.
#[macro_export]
macro_rules! aggregate_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new(value: uuid::Uuid) -> Self {
                Self(value)
            }

            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            pub fn value(&self) -> uuid::Uuid {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_string(&self) -> String {
                self.0.to_string()
            }

            fn from_string(s: &str) -> Result<Self, String> {
                uuid::Uuid::parse_str(s)
                    .map($name::new)
                    .map_err(|e| format!("UUID inválido: {}", e))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    aggregate_id!(
        /// ID usado apenas nos testes
        SampleId
    );

    #[test]
    fn test_id_string_roundtrip() {
        let id = SampleId::new_v4();
        let parsed = SampleId::from_string(&id.as_string()).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_invalid_id() {
        let err = SampleId::from_string("not-a-uuid").unwrap_err();
        assert!(err.starts_with("UUID inválido"));
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let uuid = uuid::Uuid::nil();
        let json = serde_json::to_string(&SampleId::new(uuid)).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));
    }
}
