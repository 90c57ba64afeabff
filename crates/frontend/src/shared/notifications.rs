use contracts::domain::common::AggregateRoot;
use contracts::shared::LifecycleAction;

use super::errors::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
            ToastKind::Warning => "toast--warning",
            ToastKind::Info => "toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Warning,
            message: message.into(),
        }
    }

    /// Toast de uma mutação concluída: sucesso com a mensagem da ação ou erro extraído
    pub fn from_result<A: AggregateRoot, T>(mutation: Mutation, result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => Toast::success(success_message::<A>(mutation)),
            Err(err) => Toast::error(err.user_message()),
        }
    }
}

/// Tipo de mutação, para a mensagem de sucesso
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Create,
    Update,
    Delete,
    /// Exclusão lógica
    Deactivate,
    Action(LifecycleAction),
    /// Mensagem pronta ("Entrada registrada com sucesso")
    Custom(&'static str),
}

impl Mutation {
    fn participle_stem(&self) -> &'static str {
        match self {
            Mutation::Create => "cadastrad",
            Mutation::Update => "atualizad",
            Mutation::Delete => "excluíd",
            Mutation::Deactivate => "inativad",
            Mutation::Action(LifecycleAction::Confirm) => "confirmad",
            Mutation::Action(LifecycleAction::Cancel) => "cancelad",
            Mutation::Action(LifecycleAction::Reverse) => "estornad",
            Mutation::Action(LifecycleAction::Pause) => "pausad",
            Mutation::Action(LifecycleAction::Reactivate) => "reativad",
            Mutation::Custom(_) => "",
        }
    }
}

/// "Peça cadastrada com sucesso", "Pagamento estornado com sucesso"
pub fn success_message<A: AggregateRoot>(mutation: Mutation) -> String {
    if let Mutation::Custom(message) = mutation {
        return message.to_string();
    }
    let ending = if A::is_feminine() { "a" } else { "o" };
    format!(
        "{} {}{} com sucesso",
        A::element_name(),
        mutation.participle_stem(),
        ending
    )
}
