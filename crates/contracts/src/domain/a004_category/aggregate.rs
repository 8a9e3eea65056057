use crate::enums::status::{CategoryType, Status};
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Категория меню бренда (обычная или категория допов)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: i64,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub display_order: i64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    pub status: Status,
}

impl Record for Category {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.category_id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "categoryId" => Some(self.category_id.into()),
            "code" => Some(self.code.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "displayOrder" => Some(self.display_order.into()),
            "status" => Some(self.status.code().into()),
            _ => None,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}

/// Привязка категорий допов к обычной категории
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExtraCategoriesRequest {
    pub extra_category_ids: Vec<i64>,
}
