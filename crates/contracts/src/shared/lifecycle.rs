use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::badge::{BadgeVariant, StatusDisplay};

/// Ações de mudança de status expostas pelo backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LifecycleAction {
    Confirm,
    Cancel,
    Reverse,
    Pause,
    Reactivate,
}

impl LifecycleAction {
    pub const ALL: [LifecycleAction; 5] = [
        LifecycleAction::Confirm,
        LifecycleAction::Cancel,
        LifecycleAction::Reverse,
        LifecycleAction::Pause,
        LifecycleAction::Reactivate,
    ];

    /// Rótulo do botão
    pub fn label(&self) -> &'static str {
        match self {
            LifecycleAction::Confirm => "Confirmar",
            LifecycleAction::Cancel => "Cancelar",
            LifecycleAction::Reverse => "Estornar",
            LifecycleAction::Pause => "Pausar",
            LifecycleAction::Reactivate => "Reativar",
        }
    }

    /// Segmento de rota da ação (`PATCH /{colecao}/{id}/{segmento}`)
    pub fn path_segment(&self) -> &'static str {
        match self {
            LifecycleAction::Confirm => "confirmar",
            LifecycleAction::Cancel => "cancelar",
            LifecycleAction::Reverse => "estornar",
            LifecycleAction::Pause => "pausar",
            LifecycleAction::Reactivate => "reativar",
        }
    }

    /// Ação que pede confirmação do usuário antes de enviar
    pub fn is_destructive(&self) -> bool {
        matches!(self, LifecycleAction::Cancel | LifecycleAction::Reverse)
    }
}

impl std::fmt::Display for LifecycleAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Ação '{action}' não permitida para o status '{status}'")]
    NotAllowed {
        action: LifecycleAction,
        status: &'static str,
    },
}

/// Tabela de transições de um status
///
/// `apply` é a única fonte da tabela; o restante deriva dela.
pub trait Lifecycle: StatusDisplay + Copy {
    /// Novo status após a ação, ou `None` se a ação não se aplica
    fn apply(self, action: LifecycleAction) -> Option<Self>;

    fn can(self, action: LifecycleAction) -> bool {
        self.apply(action).is_some()
    }

    /// Ações disponíveis a partir deste status (define os botões da tela)
    fn available_actions(self) -> Vec<LifecycleAction> {
        LifecycleAction::ALL
            .iter()
            .copied()
            .filter(|action| self.can(*action))
            .collect()
    }

    fn transition(self, action: LifecycleAction) -> Result<Self, TransitionError> {
        self.apply(action).ok_or(TransitionError::NotAllowed {
            action,
            status: self.label(),
        })
    }

    /// Status sem nenhuma ação possível
    fn is_terminal(self) -> bool {
        self.available_actions().is_empty()
    }
}

/// Situação de cadastros com exclusão lógica (peças, fornecedores, locais)
///
/// `DELETE` no backend apenas inativa o registro; `reativar` desfaz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActiveState {
    Ativo,
    Inativo,
}

impl ActiveState {
    pub fn from_flag(ativo: bool) -> Self {
        if ativo {
            ActiveState::Ativo
        } else {
            ActiveState::Inativo
        }
    }

    pub fn is_active(&self) -> bool {
        *self == ActiveState::Ativo
    }
}

impl StatusDisplay for ActiveState {
    fn label(&self) -> &'static str {
        match self {
            ActiveState::Ativo => "Ativo",
            ActiveState::Inativo => "Inativo",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            ActiveState::Ativo => BadgeVariant::Success,
            ActiveState::Inativo => BadgeVariant::Neutral,
        }
    }
}

impl Lifecycle for ActiveState {
    fn apply(self, action: LifecycleAction) -> Option<Self> {
        match (self, action) {
            (ActiveState::Ativo, LifecycleAction::Cancel) => Some(ActiveState::Inativo),
            (ActiveState::Inativo, LifecycleAction::Reactivate) => Some(ActiveState::Ativo),
            _ => None,
        }
    }
}
