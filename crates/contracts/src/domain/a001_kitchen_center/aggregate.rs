use crate::enums::status::Status;
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Kitchen center
// ============================================================================

/// Кухонный центр (площадка, где размещаются магазины брендов)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitchenCenter {
    pub kitchen_center_id: i64,
    pub name: String,
    pub address: String,
    pub status: Status,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub kitchen_center_manager_email: Option<String>,
}

impl Record for KitchenCenter {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.kitchen_center_id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "kitchenCenterId" => Some(self.kitchen_center_id.into()),
            "name" => Some(self.name.as_str().into()),
            "address" => Some(self.address.as_str().into()),
            "status" => Some(self.status.code().into()),
            "kitchenCenterManagerEmail" => self
                .kitchen_center_manager_email
                .as_deref()
                .map(FieldValue::from),
            _ => None,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateKitchenCenterRequest {
    pub name: String,
    pub address: String,
    pub logo: String,
    pub manager_email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKitchenCenterRequest {
    pub name: String,
    pub address: String,
    pub logo: String,
    pub status: Status,
    pub kitchen_center_manager_email: String,
}

impl UpdateKitchenCenterRequest {
    pub fn from_form(form: &CreateKitchenCenterRequest, status: Status) -> Self {
        Self {
            name: form.name.trim().to_string(),
            address: form.address.trim().to_string(),
            logo: form.logo.trim().to_string(),
            status,
            kitchen_center_manager_email: form.manager_email.trim().to_string(),
        }
    }
}

impl From<&KitchenCenter> for CreateKitchenCenterRequest {
    fn from(kc: &KitchenCenter) -> Self {
        Self {
            name: kc.name.clone(),
            address: kc.address.clone(),
            logo: kc.logo.clone().unwrap_or_default(),
            manager_email: kc.kitchen_center_manager_email.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_request_from_form() {
        let kc: KitchenCenter = serde_json::from_str(
            r#"{"kitchenCenterId":3,"name":"MBKC Thu Duc","address":"12 Vo Van Ngan",
                "status":"INACTIVE","kitchenCenterManagerEmail":"kc@mbkc.vn"}"#,
        )
        .unwrap();
        let form = CreateKitchenCenterRequest::from(&kc);
        assert_eq!(form.logo, "");
        let request = UpdateKitchenCenterRequest::from_form(&form, kc.status);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["kitchenCenterManagerEmail"], "kc@mbkc.vn");
        assert_eq!(json["status"], "INACTIVE");
    }
}
