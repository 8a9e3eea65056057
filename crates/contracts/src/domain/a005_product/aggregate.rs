use crate::enums::status::{ProductType, Status};
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Продукт меню бренда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: i64,
    pub code: String,
    pub name: String,
    pub selling_price: f64,
    #[serde(default)]
    pub discount_price: f64,
    #[serde(default)]
    pub historical_price: f64,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub display_order: i64,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub parent_product_id: Option<i64>,
    pub status: Status,
}

impl Record for Product {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.product_id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "productId" => Some(self.product_id.into()),
            "code" => Some(self.code.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "sellingPrice" => Some(self.selling_price.into()),
            "discountPrice" => Some(self.discount_price.into()),
            "displayOrder" => Some(self.display_order.into()),
            "type" => Some(self.product_type.code().into()),
            "categoryName" => self.category_name.as_deref().map(FieldValue::from),
            "status" => Some(self.status.code().into()),
            _ => None,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.code, self.name)
    }
}
