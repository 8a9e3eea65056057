use crate::enums::status::Status;
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Краткая ссылка на владельца (кухню или бренд) внутри ответа магазина
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRef {
    #[serde(alias = "kitchenCenterId", alias = "brandId")]
    pub id: i64,
    pub name: String,
}

/// Магазин бренда в кухонном центре
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub store_id: i64,
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub store_manager_email: Option<String>,
    pub kitchen_center: OwnerRef,
    pub brand: OwnerRef,
}

impl Record for Store {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.store_id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "storeId" => Some(self.store_id.into()),
            "name" => Some(self.name.as_str().into()),
            "status" => Some(self.status.code().into()),
            "storeManagerEmail" => self.store_manager_email.as_deref().map(FieldValue::from),
            "kitchenCenter" => Some(self.kitchen_center.name.as_str().into()),
            "brand" => Some(self.brand.name.as_str().into()),
            _ => None,
        }
    }
}
