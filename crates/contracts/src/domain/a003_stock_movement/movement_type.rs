use serde::{Deserialize, Serialize};

use crate::shared::{BadgeVariant, StatusDisplay};

/// Sinal de uma movimentação sobre o saldo da peça
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementSign {
    Plus,
    Minus,
    /// Não altera o saldo total (transferência entre locais)
    None,
}

impl MovementSign {
    pub fn glyph(&self) -> &'static str {
        match self {
            MovementSign::Plus => "+",
            MovementSign::Minus => "-",
            MovementSign::None => "",
        }
    }

    /// Aplica o sinal a uma quantidade absoluta
    pub fn apply(&self, quantity: i32) -> i32 {
        match self {
            MovementSign::Plus => quantity.saturating_abs(),
            MovementSign::Minus => -quantity.saturating_abs(),
            MovementSign::None => 0,
        }
    }
}

/// Tipo de movimentação de estoque
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MovementType {
    Entrada,
    Saida,
    AjustePositivo,
    AjusteNegativo,
    Devolucao,
    /// Baixa por consumo em ordem de serviço
    BaixaOs,
    Transferencia,
}

impl MovementType {
    pub fn sign(&self) -> MovementSign {
        match self {
            MovementType::Entrada => MovementSign::Plus,
            MovementType::Saida => MovementSign::Minus,
            MovementType::AjustePositivo => MovementSign::Plus,
            MovementType::AjusteNegativo => MovementSign::Minus,
            MovementType::Devolucao => MovementSign::Plus,
            MovementType::BaixaOs => MovementSign::Minus,
            MovementType::Transferencia => MovementSign::None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            MovementType::Entrada | MovementType::Devolucao => "arrow-down-circle",
            MovementType::Saida | MovementType::BaixaOs => "arrow-up-circle",
            MovementType::AjustePositivo | MovementType::AjusteNegativo => "sliders",
            MovementType::Transferencia => "repeat",
        }
    }

    pub fn is_adjustment(&self) -> bool {
        matches!(self, MovementType::AjustePositivo | MovementType::AjusteNegativo)
    }

    /// Tipo de ajuste que leva o saldo de `current` para `new`; `None` se não muda
    pub fn for_adjustment(current: i32, new: i32) -> Option<MovementType> {
        match new.cmp(&current) {
            std::cmp::Ordering::Greater => Some(MovementType::AjustePositivo),
            std::cmp::Ordering::Less => Some(MovementType::AjusteNegativo),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Saldo após a movimentação; saídas não deixam o saldo negativo
    pub fn stock_after(&self, before: i32, quantity: i32) -> i32 {
        before.saturating_add(self.sign().apply(quantity)).max(0)
    }

    pub fn all() -> [MovementType; 7] {
        [
            MovementType::Entrada,
            MovementType::Saida,
            MovementType::AjustePositivo,
            MovementType::AjusteNegativo,
            MovementType::Devolucao,
            MovementType::BaixaOs,
            MovementType::Transferencia,
        ]
    }
}

impl StatusDisplay for MovementType {
    fn label(&self) -> &'static str {
        match self {
            MovementType::Entrada => "Entrada",
            MovementType::Saida => "Saída",
            MovementType::AjustePositivo => "Ajuste positivo",
            MovementType::AjusteNegativo => "Ajuste negativo",
            MovementType::Devolucao => "Devolução",
            MovementType::BaixaOs => "Baixa por OS",
            MovementType::Transferencia => "Transferência",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            MovementType::Entrada => BadgeVariant::Success,
            MovementType::Saida => BadgeVariant::Error,
            MovementType::AjustePositivo => BadgeVariant::Primary,
            MovementType::AjusteNegativo => BadgeVariant::Warning,
            MovementType::Devolucao => BadgeVariant::Success,
            MovementType::BaixaOs => BadgeVariant::Error,
            MovementType::Transferencia => BadgeVariant::Neutral,
        }
    }
}
