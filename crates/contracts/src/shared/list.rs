//! Query and response types of every list endpoint.
//!
//! A screen builds a [`ListQuery`] snapshot from its filter, sort and page
//! state; the frontend serializes [`ListQuery::params`] into the query string
//! and expects a [`ListPage`] back.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn code(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Asc)
    }
}

/// Поле и направление сортировки
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Desc,
        }
    }

    /// Header click: the same column flips direction, a new column starts ascending.
    pub fn toggled(&self, key: &str) -> Self {
        if self.key == key {
            Self {
                key: self.key.clone(),
                direction: self.direction.reversed(),
            }
        } else {
            Self::asc(key)
        }
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.key, self.direction.code())
    }
}

/// Страница: индекс с нуля и размер (> 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageSpec {
    pub page_index: usize,
    pub page_size: usize,
}

impl PageSpec {
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: page_size.max(1),
        }
    }
}

/// Ключи, ограничивающие выборку владельцем (бренд, кухня, магазин...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListScope {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_brand: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_kitchen_center: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_store: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cashier: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_type: Option<String>,
}

/// Immutable request descriptor of one list fetch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    pub filter: String,
    pub sort: SortSpec,
    pub page: PageSpec,
    pub scope: ListScope,
}

impl ListQuery {
    pub fn new(filter: impl Into<String>, sort: SortSpec, page: PageSpec) -> Self {
        Self {
            filter: filter.into(),
            sort,
            page,
            scope: ListScope::default(),
        }
    }

    pub fn with_scope(mut self, scope: ListScope) -> Self {
        self.scope = scope;
        self
    }

    /// Search term after trimming; `None` for "no filter".
    pub fn search_value(&self) -> Option<&str> {
        let term = self.filter.trim();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }

    /// Параметры строки запроса (страницы на сервере нумеруются с 1)
    pub fn params(&self) -> ListQueryParams {
        ListQueryParams {
            items_per_page: self.page.page_size,
            current_page: self.page.page_index + 1,
            search_value: self.search_value().map(str::to_string),
            sort_by: self.sort.to_string(),
            scope: self.scope.clone(),
        }
    }
}

/// Wire shape of the list query string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQueryParams {
    pub items_per_page: usize,
    pub current_page: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,
    pub sort_by: String,
    #[serde(flatten)]
    pub scope: ListScope,
}

/// Страница записей и общее количество на сервере
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub items: Vec<T>,
    #[serde(alias = "numberItems")]
    pub total_count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_page: Option<usize>,
}

impl<T> ListPage<T> {
    pub fn new(items: Vec<T>, total_count: usize) -> Self {
        Self {
            items,
            total_count,
            total_page: None,
        }
    }
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self::new(Vec::new(), 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_toggle() {
        let spec = SortSpec::asc("name");
        assert_eq!(spec.toggled("name"), SortSpec::desc("name"));
        assert_eq!(spec.toggled("name").toggled("name"), SortSpec::asc("name"));
        assert_eq!(SortSpec::desc("name").toggled("status"), SortSpec::asc("status"));
    }

    #[test]
    fn test_sort_display() {
        assert_eq!(SortSpec::desc("createdDate").to_string(), "createdDate_desc");
    }

    #[test]
    fn test_params_are_one_based_and_skip_empty_search() {
        let query = ListQuery::new("  ", SortSpec::asc("name"), PageSpec::new(2, 10));
        let params = query.params();
        assert_eq!(params.current_page, 3);
        assert_eq!(params.items_per_page, 10);
        assert_eq!(params.search_value, None);
        assert_eq!(params.sort_by, "name_asc");
    }

    #[test]
    fn test_params_trim_search_and_keep_scope() {
        let scope = ListScope {
            id_brand: Some(4),
            ..Default::default()
        };
        let query =
            ListQuery::new(" pizza ", SortSpec::asc("name"), PageSpec::new(0, 5)).with_scope(scope);
        let params = query.params();
        assert_eq!(params.search_value.as_deref(), Some("pizza"));
        assert_eq!(params.scope.id_brand, Some(4));

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["idBrand"], 4);
        assert!(json.get("idStore").is_none());
    }

    #[test]
    fn test_page_size_is_positive() {
        assert_eq!(PageSpec::new(0, 0).page_size, 1);
    }

    #[test]
    fn test_list_page_accepts_number_items_alias() {
        let page: ListPage<i64> =
            serde_json::from_str(r#"{"items":[1,2,3],"numberItems":3,"totalPage":1}"#).unwrap();
        assert_eq!(page.total_count, 3);
        assert_eq!(page.total_page, Some(1));

        let page: ListPage<i64> = serde_json::from_str(r#"{"items":[],"totalCount":0}"#).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_page, None);
    }

    #[test]
    fn test_descriptor_equality_drives_rebuild() {
        let a = ListQuery::new("a", SortSpec::asc("name"), PageSpec::new(0, 5));
        let b = ListQuery::new("ab", SortSpec::asc("name"), PageSpec::new(0, 5));
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }
}
