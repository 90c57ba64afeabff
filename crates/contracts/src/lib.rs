//! Contratos compartilhados com o backend: agregados, DTOs de formulário,
//! parâmetros de listagem, envelope de página e os status derivados
//! (estoque, margem, movimentações) usados pela interface.

pub mod domain;
pub mod enums;
pub mod shared;
