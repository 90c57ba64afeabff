use contracts::shared::TransitionError;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Erros da camada de dados do cliente
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Http {
        status: u16,
        message: String,
        field_errors: Vec<FieldError>,
    },

    #[error("Resposta inválida do servidor: {0}")]
    Decode(String),

    #[error("Falha ao montar os parâmetros da consulta: {0}")]
    Encode(String),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Erro de validação de um campo, como devolvido pelo backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

/// Corpo de erro do backend: `{message, error, status, errors: [{field, message}]}`
///
/// Cada parte é lida separadamente: um `errors` nulo ou malformado não
/// descarta a `message`.
#[derive(Debug, Default)]
struct ErrorBody {
    message: Option<String>,
    errors: Vec<FieldError>,
}

impl ErrorBody {
    fn parse(body: &str) -> Self {
        let value: Value = match serde_json::from_str(body) {
            Ok(value) => value,
            Err(_) => return Self::default(),
        };
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        let errors = match value.get("errors") {
            Some(Value::Array(items)) => items.iter().filter_map(field_error).collect(),
            // {"campo": "mensagem"}
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(field, message)| {
                    message.as_str().map(|message| FieldError {
                        field: Some(field.clone()),
                        message: message.to_string(),
                    })
                })
                .collect(),
            _ => Vec::new(),
        };
        Self { message, errors }
    }
}

fn field_error(item: &Value) -> Option<FieldError> {
    match item {
        Value::String(message) => Some(FieldError {
            field: None,
            message: message.clone(),
        }),
        _ => Some(FieldError {
            field: item.get("field").and_then(Value::as_str).map(str::to_string),
            message: item.get("message").and_then(Value::as_str)?.to_string(),
        }),
    }
}

/// Mensagem genérica para quando o backend não informa nenhuma
pub fn fallback_message(status: u16) -> &'static str {
    match status {
        400 => "Dados inválidos. Verifique os campos e tente novamente.",
        401 => "Sessão expirada. Faça login novamente.",
        403 => "Você não tem permissão para esta operação.",
        404 => "Registro não encontrado.",
        409 => "Conflito: o registro foi alterado ou já existe.",
        422 => "Não foi possível processar os dados informados.",
        500..=599 => "Erro interno do servidor. Tente novamente mais tarde.",
        _ => "Ocorreu um erro inesperado.",
    }
}

impl ApiError {
    /// Monta o erro a partir de uma resposta HTTP sem sucesso
    ///
    /// A mensagem exibida é `message`; sem ela, a do primeiro erro de campo;
    /// sem nenhuma das duas, a mensagem genérica do status.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = ErrorBody::parse(body);

        let message = parsed
            .message
            .filter(|m| !m.trim().is_empty())
            .or_else(|| {
                parsed
                    .errors
                    .iter()
                    .map(|e| e.message.trim())
                    .find(|m| !m.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| fallback_message(status).to_string());

        log::warn!("HTTP {}: {}", status, message);

        ApiError::Http {
            status,
            message,
            field_errors: parsed.errors,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Texto para o toast de erro
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    /// Mensagem de validação de um campo específico do formulário
    pub fn field_message(&self, field: &str) -> Option<&str> {
        match self {
            ApiError::Http { field_errors, .. } => field_errors
                .iter()
                .find(|e| e.field.as_deref() == Some(field))
                .map(|e| e.message.as_str()),
            _ => None,
        }
    }
}

/// Interpreta o corpo de uma resposta: sucesso vira `T`, o resto vira [`ApiError`]
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::{ActiveState, Lifecycle, LifecycleAction, Page};

    #[test]
    fn test_message_from_body() {
        let err = ApiError::from_response(
            409,
            r#"{"status":409,"error":"Conflict","message":"Código FLT-001 já cadastrado"}"#,
        );
        assert_eq!(err.user_message(), "Código FLT-001 já cadastrado");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_message_from_first_field_error() {
        let err = ApiError::from_response(
            400,
            r#"{"status":400,"errors":[{"field":"valorVenda","message":"deve ser positivo"},{"field":"codigo","message":"obrigatório"}]}"#,
        );
        assert_eq!(err.user_message(), "deve ser positivo");
        assert_eq!(err.field_message("codigo"), Some("obrigatório"));
        assert_eq!(err.field_message("marca"), None);
    }

    #[test]
    fn test_message_survives_odd_errors_field() {
        let err = ApiError::from_response(409, r#"{"message":"Código já cadastrado","errors":null}"#);
        assert_eq!(err.user_message(), "Código já cadastrado");

        let err = ApiError::from_response(
            400,
            r#"{"message":"Dados inválidos","errors":[{"field":"nome"},{"field":"cnpj","message":"CNPJ inválido"}]}"#,
        );
        assert_eq!(err.user_message(), "Dados inválidos");
        assert_eq!(err.field_message("cnpj"), Some("CNPJ inválido"));
        assert_eq!(err.field_message("nome"), None);

        let err = ApiError::from_response(422, r#"{"errors":{"quantidade":"deve ser maior que zero"}}"#);
        assert_eq!(err.user_message(), "deve ser maior que zero");
        assert_eq!(err.field_message("quantidade"), Some("deve ser maior que zero"));

        let err = ApiError::from_response(400, r#"{"message":null,"errors":["Estoque insuficiente"]}"#);
        assert_eq!(err.user_message(), "Estoque insuficiente");
    }

    #[test]
    fn test_fallback_messages() {
        assert_eq!(ApiError::from_response(404, "").user_message(), "Registro não encontrado.");
        assert_eq!(
            ApiError::from_response(503, "<html>").user_message(),
            fallback_message(500)
        );
        assert_eq!(
            ApiError::from_response(400, r#"{"message":"  "}"#).user_message(),
            fallback_message(400)
        );
        assert_eq!(fallback_message(418), "Ocorreu um erro inesperado.");
    }

    #[test]
    fn test_decode_response() {
        let page: Page<u32> = decode_response(
            200,
            r#"{"content":[1,2],"totalElements":2,"totalPages":1,"number":0,"size":20,"first":true,"last":true}"#,
        )
        .unwrap();
        assert_eq!(page.content, vec![1, 2]);

        let err = decode_response::<Page<u32>>(200, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = decode_response::<Page<u32>>(401, "").unwrap_err();
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_transition_error_converts() {
        let err: ApiError = ActiveState::Inativo
            .transition(LifecycleAction::Cancel)
            .unwrap_err()
            .into();
        assert_eq!(
            err.user_message(),
            "Ação 'Cancelar' não permitida para o status 'Inativo'"
        );
    }
}
