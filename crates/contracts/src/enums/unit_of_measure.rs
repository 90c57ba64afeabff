use serde::{Deserialize, Serialize};

/// Unidades de medida de peças
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitOfMeasure {
    Unidade,
    Par,
    Jogo,
    Kit,
    Litro,
    Mililitro,
    Quilograma,
    Grama,
    Metro,
    Caixa,
}

impl UnitOfMeasure {
    /// Código usado pelo backend
    pub fn code(&self) -> &'static str {
        match self {
            UnitOfMeasure::Unidade => "UNIDADE",
            UnitOfMeasure::Par => "PAR",
            UnitOfMeasure::Jogo => "JOGO",
            UnitOfMeasure::Kit => "KIT",
            UnitOfMeasure::Litro => "LITRO",
            UnitOfMeasure::Mililitro => "MILILITRO",
            UnitOfMeasure::Quilograma => "QUILOGRAMA",
            UnitOfMeasure::Grama => "GRAMA",
            UnitOfMeasure::Metro => "METRO",
            UnitOfMeasure::Caixa => "CAIXA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UnitOfMeasure::Unidade => "Unidade",
            UnitOfMeasure::Par => "Par",
            UnitOfMeasure::Jogo => "Jogo",
            UnitOfMeasure::Kit => "Kit",
            UnitOfMeasure::Litro => "Litro",
            UnitOfMeasure::Mililitro => "Mililitro",
            UnitOfMeasure::Quilograma => "Quilograma",
            UnitOfMeasure::Grama => "Grama",
            UnitOfMeasure::Metro => "Metro",
            UnitOfMeasure::Caixa => "Caixa",
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            UnitOfMeasure::Unidade => "un",
            UnitOfMeasure::Par => "par",
            UnitOfMeasure::Jogo => "jg",
            UnitOfMeasure::Kit => "kit",
            UnitOfMeasure::Litro => "L",
            UnitOfMeasure::Mililitro => "mL",
            UnitOfMeasure::Quilograma => "kg",
            UnitOfMeasure::Grama => "g",
            UnitOfMeasure::Metro => "m",
            UnitOfMeasure::Caixa => "cx",
        }
    }

    /// Todas as unidades (opções do select de filtro)
    pub fn all() -> Vec<UnitOfMeasure> {
        vec![
            UnitOfMeasure::Unidade,
            UnitOfMeasure::Par,
            UnitOfMeasure::Jogo,
            UnitOfMeasure::Kit,
            UnitOfMeasure::Litro,
            UnitOfMeasure::Mililitro,
            UnitOfMeasure::Quilograma,
            UnitOfMeasure::Grama,
            UnitOfMeasure::Metro,
            UnitOfMeasure::Caixa,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|u| u.code() == code)
    }

    /// Quantidade formatada com a abreviação ("12 un", "3 L")
    pub fn format_quantity(&self, quantity: i32) -> String {
        format!("{} {}", quantity, self.abbreviation())
    }
}

impl std::fmt::Display for UnitOfMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
