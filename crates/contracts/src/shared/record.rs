//! Общий интерфейс записи списка.
//!
//! Каждая DTO, которую показывает табличный экран, реализует [`Record`]:
//! идентификатор строки и доступ к полю по имени колонки сортировки.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Идентификатор записи, назначенный сервером
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Int(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

/// Значение поля, участвующее в сортировке и поиске
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl FieldValue {
    /// Numeric view used when an `Int` meets a `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            FieldValue::Text(_) | FieldValue::Bool(_) => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(v) => write!(f, "{}", v),
            FieldValue::Float(v) => write!(f, "{}", v),
            FieldValue::Text(v) => f.write_str(v),
            FieldValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Запись табличного экрана
pub trait Record {
    /// Идентификатор строки (ключ для `<For>`)
    fn record_id(&self) -> RecordId;

    /// Значение поля по имени; `None`, если поле неизвестно
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Текст, по которому работает локальный поиск. По умолчанию: поле `name`.
    fn search_text(&self) -> String {
        self.field("name").map(|v| v.to_string()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_id_display() {
        assert_eq!(RecordId::from(42).to_string(), "42");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_field_value_numeric_view() {
        assert_eq!(FieldValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(FieldValue::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(FieldValue::from("x").as_f64(), None);
    }

    #[test]
    fn test_record_id_untagged_deserialize() {
        let id: RecordId = serde_json::from_str("7").unwrap();
        assert_eq!(id, RecordId::Int(7));
        let id: RecordId = serde_json::from_str("\"a-7\"").unwrap();
        assert_eq!(id, RecordId::Text("a-7".into()));
    }
}
