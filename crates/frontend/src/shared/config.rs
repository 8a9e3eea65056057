//! Настройки клиента.
//!
//! `AppConfig::default()` задает значения по умолчанию; `AppConfig::load()`
//! дополнительно читает переопределение адреса API из localStorage
//! (ключ [`API_BASE_STORAGE_KEY`]), чтобы стенд можно было перенаправить без пересборки.

use leptos::prelude::*;

pub const API_BASE_STORAGE_KEY: &str = "api_base";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Порт REST API на том же хосте, что и фронтенд
    pub api_port: u16,
    /// Явный адрес API (например, "https://api.mbkc.vn"), если задан
    pub api_base_override: Option<String>,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    pub search_debounce_ms: u32,
    pub notification_ttl_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_port: 3000,
            api_base_override: None,
            default_page_size: 5,
            page_size_options: vec![5, 10, 25],
            search_debounce_ms: 500,
            notification_ttl_ms: 4000,
        }
    }
}

impl AppConfig {
    pub fn load() -> Self {
        let mut config = Self::default();
        config.api_base_override = read_storage_override();
        if let Some(base) = &config.api_base_override {
            log::info!("API base overridden from storage: {}", base);
        }
        config
    }

    /// Берет размер страницы из списка опций, иначе: значение по умолчанию
    pub fn normalize_page_size(&self, size: usize) -> usize {
        if self.page_size_options.contains(&size) {
            size
        } else {
            self.default_page_size
        }
    }
}

fn read_storage_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let value = storage.get_item(API_BASE_STORAGE_KEY).ok()??;
    let value = value.trim().trim_end_matches('/').to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Конфигурация из контекста; вне дерева компонентов: значения по умолчанию
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.default_page_size, 5);
        assert_eq!(config.page_size_options, vec![5, 10, 25]);
        assert_eq!(config.search_debounce_ms, 500);
    }

    #[test]
    fn test_normalize_page_size() {
        let config = AppConfig::default();
        assert_eq!(config.normalize_page_size(25), 25);
        assert_eq!(config.normalize_page_size(7), 5);
    }
}
