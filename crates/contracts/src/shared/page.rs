use serde::{Deserialize, Serialize};

/// Envelope de página devolvido por todos os endpoints de listagem
///
/// O formato pertence ao backend (`content`, `totalElements`, `totalPages`,
/// `number`, `size`, `first`, `last`); `number` começa em zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u32,
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub first: bool,
    #[serde(default)]
    pub last: bool,
}

impl<T> Page<T> {
    /// Página vazia (antes do primeiro carregamento)
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            total_elements: 0,
            total_pages: 0,
            number: 0,
            size,
            first: true,
            last: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn has_next(&self) -> bool {
        !self.last
    }

    pub fn has_previous(&self) -> bool {
        !self.first
    }

    /// Intervalo 1-based dos itens desta página ("21–40 de 135")
    pub fn item_range(&self) -> Option<(u64, u64)> {
        if self.content.is_empty() {
            return None;
        }
        let start = u64::from(self.number)
            .saturating_mul(u64::from(self.size))
            .saturating_add(1);
        let end = start.saturating_add(self.content.len() as u64 - 1);
        Some((start, end))
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            first: self.first,
            last: self.last,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_envelope() {
        let json = r#"{
            "content": [1, 2, 3],
            "totalElements": 23,
            "totalPages": 3,
            "number": 2,
            "size": 10,
            "first": false,
            "last": true,
            "pageable": {"pageNumber": 2}
        }"#;
        let page: Page<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_elements, 23);
        assert_eq!(page.item_range(), Some((21, 23)));
        assert!(page.has_previous());
        assert!(!page.has_next());
    }

    #[test]
    fn test_empty_page() {
        let page: Page<String> = Page::empty(20);
        assert!(page.is_empty());
        assert_eq!(page.item_range(), None);
        assert!(!page.has_next());
    }

    #[test]
    fn test_map_keeps_envelope() {
        let page = Page {
            content: vec![1, 2],
            total_elements: 2,
            total_pages: 1,
            number: 0,
            size: 20,
            first: true,
            last: true,
        };
        let mapped = page.map(|n| n * 10);
        assert_eq!(mapped.content, vec![10, 20]);
        assert_eq!(mapped.total_elements, 2);
    }
}
