use contracts::shared::{Page, PageRequest, SortDirection, SortOrder};
use serde::{Deserialize, Serialize};

/// Estado de paginação e ordenação de uma tela de listagem
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListState {
    pub page: u32,
    pub page_size: u32,
    pub max_page_size: u32,
    pub sort_field: Option<String>,
    pub sort_ascending: bool,
    pub total_count: u64,
    pub total_pages: u32,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(20, 100)
    }
}

impl ListState {
    pub fn new(page_size: u32, max_page_size: u32) -> Self {
        let max_page_size = max_page_size.max(1);
        Self {
            page: 0,
            page_size: page_size.clamp(1, max_page_size),
            max_page_size,
            sort_field: None,
            sort_ascending: true,
            total_count: 0,
            total_pages: 0,
        }
    }

    pub fn from_config(config: &crate::shared::config::ListConfig) -> Self {
        Self::new(config.default_page_size, config.max_page_size)
    }

    /// Ordenação inicial da tela
    pub fn with_sort(mut self, field: &str, ascending: bool) -> Self {
        self.sort_field = Some(field.to_string());
        self.sort_ascending = ascending;
        self
    }

    /// Clique no cabeçalho: mesma coluna inverte, outra coluna começa ascendente
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_ascending = true;
        }
        self.page = 0;
    }

    /// Indicador de ordenação para o cabeçalho da coluna
    pub fn sort_indicator(&self, field: &str) -> &'static str {
        if self.sort_field.as_deref() == Some(field) {
            if self.sort_ascending { " ▲" } else { " ▼" }
        } else {
            " ⇅"
        }
    }

    pub fn set_page(&mut self, page: u32) {
        self.page = if self.total_pages > 0 {
            page.min(self.total_pages - 1)
        } else {
            page
        };
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.page_size = size.clamp(1, self.max_page_size);
        self.page = 0;
    }

    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_field.as_ref().map(|field| SortOrder {
            field: field.clone(),
            direction: if self.sort_ascending {
                SortDirection::Asc
            } else {
                SortDirection::Desc
            },
        })
    }

    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page: self.page,
            size: self.page_size,
            sort: self.sort_order(),
        }
    }

    /// Atualiza os totais com a página recebida do backend
    pub fn sync_with<T>(&mut self, page: &Page<T>) {
        self.total_count = page.total_elements;
        self.total_pages = page.total_pages;
        if page.total_pages > 0 && self.page >= page.total_pages {
            self.page = page.total_pages - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sort() {
        let mut state = ListState::default();
        state.page = 3;
        state.toggle_sort("descricao");
        assert_eq!(state.sort_field.as_deref(), Some("descricao"));
        assert!(state.sort_ascending);
        assert_eq!(state.page, 0);

        state.toggle_sort("descricao");
        assert!(!state.sort_ascending);
        assert_eq!(state.sort_indicator("descricao"), " ▼");
        assert_eq!(state.sort_indicator("codigo"), " ⇅");

        state.toggle_sort("codigo");
        assert!(state.sort_ascending);
        assert_eq!(state.page_request().sort.unwrap().to_param(), "codigo,asc");
    }

    #[test]
    fn test_page_size_clamped() {
        let mut state = ListState::new(20, 100);
        state.page = 2;
        state.set_page_size(500);
        assert_eq!(state.page_size, 100);
        assert_eq!(state.page, 0);
        state.set_page_size(0);
        assert_eq!(state.page_size, 1);
        assert_eq!(ListState::new(300, 100).page_size, 100);
    }

    #[test]
    fn test_sync_with_page() {
        let mut state = ListState::default();
        state.page = 7;
        let page: Page<u8> = Page {
            content: vec![],
            total_elements: 45,
            total_pages: 3,
            number: 7,
            size: 20,
            first: false,
            last: true,
        };
        state.sync_with(&page);
        assert_eq!(state.page, 2);
        assert_eq!(state.total_count, 45);
        state.set_page(10);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_page_request_defaults() {
        let request = ListState::default().page_request();
        assert_eq!(request, PageRequest::new(0, 20));
    }
}
