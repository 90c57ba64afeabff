use serde::{Deserialize, Serialize};

use crate::shared::{BadgeVariant, StatusDisplay};

/// Situação do estoque de uma peça
///
/// Derivada de `(quantidadeAtual, quantidadeMinima)` a cada leitura, nunca
/// persistida. A ordem das variantes é a ordem de gravidade: a mais grave
/// primeiro, de modo que ordenar de forma crescente coloca os alertas no topo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    /// Sem nenhuma unidade
    Zerado,
    /// Abaixo ou no limite do estoque mínimo
    Baixo,
    Normal,
}

impl StockStatus {
    /// Classifica o estoque
    ///
    /// - `atual == 0` → Zerado
    /// - `0 < atual <= minimo` → Baixo
    /// - `atual > minimo` → Normal
    ///
    /// Valores negativos são tratados como zero: estoque negativo é Zerado e
    /// mínimo negativo equivale a não ter mínimo.
    pub fn classify(current: i32, minimum: i32) -> Self {
        let current = current.max(0);
        let minimum = minimum.max(0);

        if current == 0 {
            StockStatus::Zerado
        } else if current <= minimum {
            StockStatus::Baixo
        } else {
            StockStatus::Normal
        }
    }

    /// 0 = mais grave
    pub fn severity_rank(&self) -> u8 {
        match self {
            StockStatus::Zerado => 0,
            StockStatus::Baixo => 1,
            StockStatus::Normal => 2,
        }
    }

    /// Entra nos alertas de estoque (`/estoque/alertas/*`)
    pub fn is_alert(&self) -> bool {
        !matches!(self, StockStatus::Normal)
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StockStatus::Zerado => "x-circle",
            StockStatus::Baixo => "alert-triangle",
            StockStatus::Normal => "check-circle",
        }
    }

    pub fn all() -> [StockStatus; 3] {
        [StockStatus::Zerado, StockStatus::Baixo, StockStatus::Normal]
    }
}

impl StatusDisplay for StockStatus {
    fn label(&self) -> &'static str {
        match self {
            StockStatus::Zerado => "Zerado",
            StockStatus::Baixo => "Baixo",
            StockStatus::Normal => "Normal",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            StockStatus::Zerado => BadgeVariant::Error,
            StockStatus::Baixo => BadgeVariant::Warning,
            StockStatus::Normal => BadgeVariant::Success,
        }
    }
}

/// Quantidade que falta para sair da faixa de alerta (`minimo + 1 - atual`)
pub fn replenishment_quantity(current: i32, minimum: i32) -> i32 {
    let current = current.max(0);
    let minimum = minimum.max(0);
    minimum.saturating_add(1).saturating_sub(current).max(0)
}
