use serde::{Deserialize, Serialize};

use crate::shared::{BadgeVariant, StatusDisplay};

/// Margem a partir da qual a peça é considerada saudável (%)
pub const HEALTHY_MARGIN_THRESHOLD: f64 = 30.0;
/// Margem mínima antes de virar alerta crítico (%)
pub const CAUTION_MARGIN_THRESHOLD: f64 = 10.0;

/// Margem de lucro sobre o custo: `(venda - custo) / custo * 100`
///
/// Indefinida quando o custo não é positivo.
pub fn margin_percent(cost: f64, sale: f64) -> Option<f64> {
    if cost.is_nan() || sale.is_nan() || cost <= 0.0 {
        return None;
    }
    Some((sale - cost) / cost * 100.0)
}

/// Faixa da margem de lucro, mais grave primeiro
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarginStatus {
    /// Abaixo de 10%
    Critico,
    /// De 10% (inclusive) a 30% (exclusive)
    Atencao,
    /// 30% ou mais
    Normal,
}

impl MarginStatus {
    /// Classifica a margem; NaN cai em Crítico
    pub fn classify(margin_percent: f64) -> Self {
        if margin_percent >= HEALTHY_MARGIN_THRESHOLD {
            MarginStatus::Normal
        } else if margin_percent >= CAUTION_MARGIN_THRESHOLD {
            MarginStatus::Atencao
        } else {
            MarginStatus::Critico
        }
    }

    /// Classifica direto a partir de custo e venda; `None` se a margem é indefinida
    pub fn for_prices(cost: f64, sale: f64) -> Option<Self> {
        margin_percent(cost, sale).map(Self::classify)
    }
}

impl StatusDisplay for MarginStatus {
    fn label(&self) -> &'static str {
        match self {
            MarginStatus::Critico => "Crítico",
            MarginStatus::Atencao => "Atenção",
            MarginStatus::Normal => "Normal",
        }
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            MarginStatus::Critico => BadgeVariant::Error,
            MarginStatus::Atencao => BadgeVariant::Warning,
            MarginStatus::Normal => BadgeVariant::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(MarginStatus::classify(30.0), MarginStatus::Normal);
        assert_eq!(MarginStatus::classify(29.999), MarginStatus::Atencao);
        assert_eq!(MarginStatus::classify(10.0), MarginStatus::Atencao);
        assert_eq!(MarginStatus::classify(9.999), MarginStatus::Critico);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MarginStatus::classify(30.0).label(), "Normal");
        assert_eq!(MarginStatus::classify(29.999).label(), "Atenção");
        assert_eq!(MarginStatus::classify(9.999).label(), "Crítico");
    }

    #[test]
    fn test_extremes() {
        assert_eq!(MarginStatus::classify(-50.0), MarginStatus::Critico);
        assert_eq!(MarginStatus::classify(1_000.0), MarginStatus::Normal);
        assert_eq!(MarginStatus::classify(f64::NAN), MarginStatus::Critico);
    }

    #[test]
    fn test_margin_percent() {
        assert_eq!(margin_percent(100.0, 150.0), Some(50.0));
        assert_eq!(margin_percent(80.0, 60.0), Some(-25.0));
        assert_eq!(margin_percent(0.0, 10.0), None);
        assert_eq!(margin_percent(-1.0, 10.0), None);
        assert_eq!(margin_percent(f64::NAN, 10.0), None);
    }

    #[test]
    fn test_for_prices() {
        assert_eq!(MarginStatus::for_prices(100.0, 130.0), Some(MarginStatus::Normal));
        assert_eq!(MarginStatus::for_prices(100.0, 115.0), Some(MarginStatus::Atencao));
        assert_eq!(MarginStatus::for_prices(100.0, 105.0), Some(MarginStatus::Critico));
        assert_eq!(MarginStatus::for_prices(0.0, 105.0), None);
    }
}
