use crate::enums::partner_type::PartnerType;
use crate::enums::status::Status;
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Привязка магазина к платформе доставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorePartner {
    pub store_id: i64,
    pub partner_id: i64,
    pub store_name: String,
    pub partner_name: String,
    pub user_name: String,
    #[serde(default)]
    pub commission: f64,
    pub status: Status,
}

impl StorePartner {
    pub fn partner_type(&self) -> Option<PartnerType> {
        PartnerType::from_code(&self.partner_name)
    }
}

impl Record for StorePartner {
    fn record_id(&self) -> RecordId {
        // Связь идентифицируется парой (магазин, партнер)
        RecordId::Text(format!("{}-{}", self.store_id, self.partner_id))
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "storeName" | "name" => Some(self.store_name.as_str().into()),
            "partnerName" => Some(self.partner_name.as_str().into()),
            "userName" => Some(self.user_name.as_str().into()),
            "commission" => Some(self.commission.into()),
            "status" => Some(self.status.code().into()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStorePartnerStatusRequest {
    pub status: Status,
}

/// Платформа доставки, к которой можно привязать магазин
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub partner_id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub status: Status,
}

/// Учетная запись магазина на платформе и комиссия (%)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerAccount {
    pub partner_id: i64,
    pub user_name: String,
    pub password: String,
    pub commission: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStorePartnerRequest {
    pub store_id: i64,
    pub partner_accounts: Vec<PartnerAccount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStorePartnerRequest {
    pub user_name: String,
    /// `None`: пароль не меняется
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub commission: f64,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_record_id() {
        let link = StorePartner {
            store_id: 3,
            partner_id: 1,
            store_name: "Pizza 4Ps".into(),
            partner_name: "GrabFood".into(),
            user_name: "p4ps_grab".into(),
            commission: 20.0,
            status: Status::Active,
        };
        assert_eq!(link.record_id(), RecordId::Text("3-1".into()));
        assert_eq!(link.partner_type(), Some(PartnerType::GrabFood));
        assert_eq!(link.field("name"), Some(FieldValue::from("Pizza 4Ps")));
    }

    #[test]
    fn test_create_request_wire_shape() {
        let request = CreateStorePartnerRequest {
            store_id: 3,
            partner_accounts: vec![PartnerAccount {
                partner_id: 2,
                user_name: "p4ps_shopee".into(),
                password: "secret".into(),
                commission: 12.5,
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["storeId"], 3);
        assert_eq!(json["partnerAccounts"][0]["userName"], "p4ps_shopee");
        assert_eq!(json["partnerAccounts"][0]["commission"], 12.5);
    }
}
