use serde::{Deserialize, Serialize};

/// Variante visual de um badge de status (define a cor)
///
/// As classes CSS seguem o padrão `badge--<variante>` do design system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Primary,
    /// Verde
    Success,
    /// Amarelo
    Warning,
    /// Vermelho
    Error,
    /// Cinza
    Neutral,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
            BadgeVariant::Neutral => "neutral",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

/// Status exibido como badge: rótulo + cor
pub trait StatusDisplay {
    fn label(&self) -> &'static str;
    fn variant(&self) -> BadgeVariant;
}
