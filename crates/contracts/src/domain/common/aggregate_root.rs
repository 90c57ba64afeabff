/// Trait para a raiz de agregado
///
/// Metadados estáticos de cada agregado do sistema. O backend é a fonte de
/// verdade dos dados; aqui ficam apenas o que o cliente precisa para montar
/// rotas, chaves de cache e títulos de telas.
pub trait AggregateRoot {
    /// Tipo do identificador do agregado
    type Id;

    /// ID do registro
    fn id(&self) -> Self::Id;

    // ============================================================================
    // Metadados da classe do agregado (dados estáticos)
    // ============================================================================

    /// Índice do agregado no sistema (por exemplo, "a001")
    fn aggregate_index() -> &'static str;

    /// Coleção REST no backend (por exemplo, "estoque")
    fn collection_name() -> &'static str;

    /// Nome do elemento na UI (singular, por exemplo, "Peça")
    fn element_name() -> &'static str;

    /// Nome da lista na UI (plural, por exemplo, "Peças")
    fn list_name() -> &'static str;

    /// Gênero gramatical do elemento, para concordância nas mensagens
    fn is_feminine() -> bool {
        false
    }

    // ============================================================================
    // Métodos com implementação padrão
    // ============================================================================

    /// Caminho base da API (por exemplo, "/estoque")
    fn api_path() -> String {
        format!("/{}", Self::collection_name())
    }

    /// Nome completo do agregado (por exemplo, "a001_estoque")
    fn full_name() -> String {
        format!(
            "{}_{}",
            Self::aggregate_index(),
            Self::collection_name().replace(['/', '-'], "_")
        )
    }
}
