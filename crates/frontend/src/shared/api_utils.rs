//! API utilities for frontend-backend communication
//!
//! Builds API URLs (including the list query string) and wraps `gloo-net`
//! requests so every call returns `Result<T, ApiError>`.

use crate::shared::config::{use_config, AppConfig};
use crate::system::auth::storage;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery, ListScope, PageSpec, SortSpec};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses the configured override if present, otherwise the current window
/// location with the configured API port.
///
/// # Returns
/// - API base URL like "http://localhost:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    base_for(&use_config())
}

fn base_for(config: &AppConfig) -> String {
    if let Some(base) = &config.api_base_override {
        return base.clone();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, config.api_port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/api/brands/12");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Строка запроса списка: `itemsPerPage=5&currentPage=1&searchValue=...&sortBy=name_asc`
pub fn list_query_string(query: &ListQuery) -> String {
    serde_qs::to_string(&query.params()).unwrap_or_default()
}

/// `/api/<resource>?<list query>`
pub fn list_path(resource: &str, query: &ListQuery) -> String {
    format!("/api/{}?{}", resource.trim_matches('/'), list_query_string(query))
}

/// Размер выборки для выпадающих списков и локально фильтруемых диалогов
pub const OPTIONS_PAGE_SIZE: usize = 1000;

/// Запрос "все записи одной страницей" для справочников форм
pub fn options_query(sort_key: &str, scope: ListScope) -> ListQuery {
    ListQuery::new("", SortSpec::asc(sort_key), PageSpec::new(0, OPTIONS_PAGE_SIZE)).with_scope(scope)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_empty(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status, &body))
    }
}

/// Загрузка страницы списка
pub async fn fetch_list<T: DeserializeOwned>(
    resource: &str,
    query: &ListQuery,
) -> Result<ListPage<T>, ApiError> {
    get_json(&list_path(resource, query)).await
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("GET {}", url);
    let response = with_auth(Request::get(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    let response = with_auth(Request::post(&url))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(response).await
}

/// POST без тела ответа
pub async fn post_command<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("POST {}", url);
    let response = with_auth(Request::post(&url))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_empty(response).await
}

pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("PUT {}", url);
    let response = with_auth(Request::put(&url))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_empty(response).await
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    let url = api_url(path);
    log::debug!("DELETE {}", url);
    let response = with_auth(Request::delete(&url))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_empty(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_query_string() {
        let query = ListQuery::new("pizza", SortSpec::desc("name"), PageSpec::new(1, 10));
        assert_eq!(
            list_query_string(&query),
            "itemsPerPage=10&currentPage=2&searchValue=pizza&sortBy=name_desc"
        );
    }

    #[test]
    fn test_list_path_with_scope_and_empty_search() {
        let scope = ListScope {
            id_kitchen_center: Some(2),
            ..Default::default()
        };
        let query =
            ListQuery::new("", SortSpec::asc("name"), PageSpec::new(0, 5)).with_scope(scope);
        assert_eq!(
            list_path("/stores/", &query),
            "/api/stores?itemsPerPage=5&currentPage=1&sortBy=name_asc&idKitchenCenter=2"
        );
    }

    #[test]
    fn test_options_query_takes_everything_in_one_page() {
        let scope = ListScope {
            id_brand: Some(4),
            category_type: Some("EXTRA".into()),
            ..Default::default()
        };
        assert_eq!(
            list_path("categories", &options_query("name", scope)),
            "/api/categories?itemsPerPage=1000&currentPage=1&sortBy=name_asc&idBrand=4&categoryType=EXTRA"
        );
    }

    #[test]
    fn test_base_override_wins() {
        let config = AppConfig {
            api_base_override: Some("https://api.mbkc.vn".into()),
            ..AppConfig::default()
        };
        assert_eq!(base_for(&config), "https://api.mbkc.vn");
    }
}
