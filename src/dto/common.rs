//! DTOs comunes de la API

use serde::{Deserialize, Serialize};

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

/// Parámetros de paginación de los listados
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PaginationQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn per_page(&self, default: i64) -> i64 {
        self.per_page.unwrap_or(default).clamp(1, 100)
    }

    pub fn offset(&self, default_per_page: i64) -> i64 {
        (self.page() - 1) * self.per_page(default_per_page)
    }
}

/// Página de resultados
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_defaults() {
        let q = PaginationQuery {
            page: None,
            per_page: None,
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.per_page(20), 20);
        assert_eq!(q.offset(20), 0);
    }

    #[test]
    fn test_pagination_offset() {
        let q = PaginationQuery {
            page: Some(3),
            per_page: Some(15),
        };
        assert_eq!(q.offset(20), 30);
    }

    #[test]
    fn test_per_page_is_clamped() {
        let q = PaginationQuery {
            page: Some(1),
            per_page: Some(1000),
        };
        assert_eq!(q.per_page(20), 100);
    }
}
