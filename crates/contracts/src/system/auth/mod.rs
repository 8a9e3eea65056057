use crate::shared::list::ListScope;
use serde::{Deserialize, Serialize};

/// Роль пользователя панели управления
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "MBKC Admin")]
    MbkcAdmin,
    #[serde(rename = "Brand Manager")]
    BrandManager,
    #[serde(rename = "Kitchen Center Manager")]
    KitchenCenterManager,
    #[serde(rename = "Cashier")]
    Cashier,
}

impl Role {
    /// Значение, которое отдает API в `roleName`
    pub fn code(&self) -> &'static str {
        match self {
            Role::MbkcAdmin => "MBKC Admin",
            Role::BrandManager => "Brand Manager",
            Role::KitchenCenterManager => "Kitchen Center Manager",
            Role::Cashier => "Cashier",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::MbkcAdmin => "System admin",
            Role::BrandManager => "Brand manager",
            Role::KitchenCenterManager => "Kitchen center manager",
            Role::Cashier => "Cashier",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![
            Role::MbkcAdmin,
            Role::BrandManager,
            Role::KitchenCenterManager,
            Role::Cashier,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Role::all().into_iter().find(|r| r.code() == code)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Запрос кода подтверждения для восстановления пароля
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailVerificationRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub account_id: i64,
    pub email: String,
    pub role_name: Role,
    #[serde(default)]
    pub is_confirmed: bool,
    /// Бренд менеджера бренда
    #[serde(default)]
    pub brand_id: Option<i64>,
    /// Кухня менеджера кухни или кассира
    #[serde(default)]
    pub kitchen_center_id: Option<i64>,
    #[serde(default)]
    pub cashier_id: Option<i64>,
}

impl UserInfo {
    /// Ключи владельца, которыми ограничиваются списки этой роли
    pub fn scope(&self) -> ListScope {
        match self.role_name {
            Role::MbkcAdmin => ListScope::default(),
            Role::BrandManager => ListScope {
                id_brand: self.brand_id,
                ..Default::default()
            },
            Role::KitchenCenterManager => ListScope {
                id_kitchen_center: self.kitchen_center_id,
                ..Default::default()
            },
            Role::Cashier => ListScope {
                id_cashier: self.cashier_id,
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_codes_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("Guest"), None);
    }

    #[test]
    fn test_user_info_from_api() {
        let user: UserInfo = serde_json::from_str(
            r#"{"accountId":3,"email":"cashier@mbkc.vn","roleName":"Cashier","isConfirmed":true}"#,
        )
        .unwrap();
        assert_eq!(user.role_name, Role::Cashier);
        assert!(user.is_confirmed);
        assert_eq!(user.brand_id, None);
    }

    #[test]
    fn test_scope_by_role() {
        let user: UserInfo = serde_json::from_str(
            r#"{"accountId":8,"email":"bm@mbkc.vn","roleName":"Brand Manager","brandId":4,"kitchenCenterId":9}"#,
        )
        .unwrap();
        let scope = user.scope();
        assert_eq!(scope.id_brand, Some(4));
        assert_eq!(scope.id_kitchen_center, None);
    }
}
