//! Camada de lógica do cliente da oficina
//!
//! Estado de filtros das listagens, catálogo de rotas do backend, cache de
//! consultas, extração de mensagens de erro e notificações. Não renderiza
//! nada e não faz requisições HTTP.

pub mod domain;
pub mod shared;

pub use shared::config::{load_config, ClientConfig};

/// Inicializa o log no navegador; em outros alvos o host instala o próprio logger
pub fn init_logging() {
    #[cfg(target_arch = "wasm32")]
    {
        _ = console_log::init_with_level(log::Level::Debug);
        console_error_panic_hook::set_once();
    }
}
