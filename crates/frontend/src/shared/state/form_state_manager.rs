use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Guarda o estado dos filtros de cada tela entre trocas de aba
/// O estado fica em memória e sobrevive enquanto o aplicativo estiver aberto
#[derive(Clone, Debug)]
pub struct FormStateStore {
    states: HashMap<String, Value>,
}

impl FormStateStore {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Estado bruto de uma tela
    pub fn get_state(&self, form_key: &str) -> Option<&Value> {
        self.states.get(form_key)
    }

    pub fn set_state(&mut self, form_key: String, state: Value) {
        self.states.insert(form_key, state);
    }

    pub fn remove_state(&mut self, form_key: &str) {
        self.states.remove(form_key);
    }

    pub fn clear_all(&mut self) {
        self.states.clear();
    }

    /// Salva um estado tipado; um estado que não serializa é ignorado com aviso
    pub fn save<T: Serialize>(&mut self, form_key: &str, state: &T) {
        match serde_json::to_value(state) {
            Ok(value) => self.set_state(form_key.to_string(), value),
            Err(e) => log::warn!("Estado de '{}' não foi salvo: {}", form_key, e),
        }
    }

    /// Estado tipado; `None` se ausente ou de outra versão
    pub fn load<T: DeserializeOwned>(&self, form_key: &str) -> Option<T> {
        let value = self.get_state(form_key)?;
        match serde_json::from_value(value.clone()) {
            Ok(state) => Some(state),
            Err(e) => {
                log::warn!("Estado salvo de '{}' descartado: {}", form_key, e);
                None
            }
        }
    }
}

impl Default for FormStateStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Filter {
        nome: String,
        ativo: bool,
    }

    #[test]
    fn test_save_and_load() {
        let mut store = FormStateStore::new();
        let filter = Filter {
            nome: "Bosch".to_string(),
            ativo: true,
        };
        store.save("a004_fornecedores", &filter);
        assert_eq!(store.load::<Filter>("a004_fornecedores"), Some(filter));
        assert_eq!(store.load::<Filter>("a001_estoque"), None);

        store.remove_state("a004_fornecedores");
        assert!(store.get_state("a004_fornecedores").is_none());
    }

    #[test]
    fn test_incompatible_state_is_discarded() {
        let mut store = FormStateStore::default();
        store.set_state("x".to_string(), serde_json::json!({"nome": 1}));
        assert_eq!(store.load::<Filter>("x"), None);
        store.clear_all();
        assert!(store.get_state("x").is_none());
    }
}
