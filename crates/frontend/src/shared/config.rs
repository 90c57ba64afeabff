use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub lists: ListConfig,
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Endereço do backend, sem barra final ("http://localhost:8080")
    pub base_url: String,
    /// Prefixo comum das rotas REST ("/api")
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ListConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CacheConfig {
    /// Tempo em que uma consulta é considerada fresca e não é refeita
    #[serde(default = "default_stale_time_secs")]
    pub stale_time_secs: u64,
    /// Tempo sem uso após o qual uma consulta sai do cache
    #[serde(default = "default_gc_time_secs")]
    pub gc_time_secs: u64,
}

fn default_prefix() -> String {
    "/api".to_string()
}

fn default_page_size() -> u32 {
    20
}

fn default_max_page_size() -> u32 {
    100
}

fn default_stale_time_secs() -> u64 {
    30
}

fn default_gc_time_secs() -> u64 {
    300
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            prefix: default_prefix(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_time_secs: default_stale_time_secs(),
            gc_time_secs: default_gc_time_secs(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            lists: ListConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl ClientConfig {
    pub fn stale_time(&self) -> chrono::Duration {
        seconds(self.cache.stale_time_secs)
    }

    pub fn gc_time(&self) -> chrono::Duration {
        seconds(self.cache.gc_time_secs)
    }
}

/// Valores absurdos viram o maior intervalo representável
fn seconds(secs: u64) -> chrono::Duration {
    i64::try_from(secs)
        .ok()
        .and_then(chrono::Duration::try_seconds)
        .unwrap_or(chrono::Duration::MAX)
}

/// Configuração padrão embutida no binário
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8080"
prefix = "/api"

[lists]
default_page_size = 20
max_page_size = 100

[cache]
stale_time_secs = 30
gc_time_secs = 300
"#;

pub fn parse_config(contents: &str) -> anyhow::Result<ClientConfig> {
    let mut config: ClientConfig = toml::from_str(contents)?;
    if config.lists.max_page_size == 0 {
        anyhow::bail!("lists.max_page_size deve ser maior que zero");
    }
    if config.lists.default_page_size == 0 || config.lists.default_page_size > config.lists.max_page_size {
        log::warn!(
            "lists.default_page_size = {} fora do intervalo, usando {}",
            config.lists.default_page_size,
            config.lists.max_page_size.min(default_page_size())
        );
        config.lists.default_page_size = config.lists.max_page_size.min(default_page_size());
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    Ok(config)
}

/// Carrega a configuração de `config.toml`
///
/// Ordem de busca:
/// 1. O caminho informado, se existir
/// 2. A configuração padrão embutida
pub fn load_config(path: Option<&Path>) -> anyhow::Result<ClientConfig> {
    if let Some(config_path) = path {
        if config_path.exists() {
            log::info!("Carregando configuração de: {}", config_path.display());
            let contents = std::fs::read_to_string(config_path)?;
            return parse_config(&contents);
        }
        log::warn!("config.toml não encontrado em: {}", config_path.display());
    }

    log::info!("Usando a configuração padrão embutida");
    parse_config(DEFAULT_CONFIG)
}
