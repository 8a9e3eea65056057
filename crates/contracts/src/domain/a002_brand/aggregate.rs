use crate::enums::status::Status;
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Brand
// ============================================================================

/// Бренд (сеть ресторанов, арендующая место в кухонных центрах)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub brand_id: i64,
    pub name: String,
    pub address: String,
    pub status: Status,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub brand_manager_email: Option<String>,
}

impl Record for Brand {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.brand_id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "brandId" => Some(self.brand_id.into()),
            "name" => Some(self.name.as_str().into()),
            "address" => Some(self.address.as_str().into()),
            "status" => Some(self.status.code().into()),
            "brandManagerEmail" => self.brand_manager_email.as_deref().map(FieldValue::from),
            _ => None,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandRequest {
    pub name: String,
    pub address: String,
    pub logo: String,
    pub manager_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBrandRequest {
    pub name: String,
    pub address: String,
    pub logo: String,
    pub status: Status,
    pub brand_manager_email: String,
}

impl UpdateBrandRequest {
    pub fn from_form(form: &CreateBrandRequest, status: Status) -> Self {
        Self {
            name: form.name.trim().to_string(),
            address: form.address.trim().to_string(),
            logo: form.logo.trim().to_string(),
            status,
            brand_manager_email: form.manager_email.trim().to_string(),
        }
    }
}

impl From<&Brand> for CreateBrandRequest {
    fn from(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            address: brand.address.clone(),
            logo: brand.logo.clone().unwrap_or_default(),
            manager_email: brand.brand_manager_email.clone().unwrap_or_default(),
        }
    }
}
