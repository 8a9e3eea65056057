use crate::enums::status::Status;
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Кассир кухонного центра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cashier {
    pub account_id: i64,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub citizen_number: Option<String>,
    /// ISO 8601 (дата)
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub status: Status,
}

impl Record for Cashier {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.account_id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "accountId" => Some(self.account_id.into()),
            "fullName" | "name" => Some(self.full_name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "gender" => self.gender.as_deref().map(FieldValue::from),
            "dateOfBirth" => self.date_of_birth.as_deref().map(FieldValue::from),
            "status" => Some(self.status.code().into()),
            _ => None,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.full_name, self.email)
    }
}

// ============================================================================
// Requests
// ============================================================================

/// Поля формы кассира; пароль не меняется через форму
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCashierRequest {
    pub full_name: String,
    pub email: String,
    pub gender: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub citizen_number: String,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCashierRequest {
    pub full_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub citizen_number: String,
    pub avatar: String,
    pub status: Status,
}

impl CreateCashierRequest {
    pub fn trimmed(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            gender: self.gender.clone(),
            date_of_birth: self.date_of_birth.trim().to_string(),
            citizen_number: self.citizen_number.trim().to_string(),
            avatar: self.avatar.trim().to_string(),
        }
    }
}

impl UpdateCashierRequest {
    /// Email is the login and stays as created.
    pub fn from_form(form: &CreateCashierRequest, status: Status) -> Self {
        let form = form.trimmed();
        Self {
            full_name: form.full_name,
            gender: form.gender,
            date_of_birth: form.date_of_birth,
            citizen_number: form.citizen_number,
            avatar: form.avatar,
            status,
        }
    }
}

impl From<&Cashier> for CreateCashierRequest {
    fn from(cashier: &Cashier) -> Self {
        Self {
            full_name: cashier.full_name.clone(),
            email: cashier.email.clone(),
            gender: cashier.gender.clone().unwrap_or_default(),
            // API присылает дату со временем, поле формы принимает только дату
            date_of_birth: cashier
                .date_of_birth
                .as_deref()
                .map(|d| d.chars().take(10).collect())
                .unwrap_or_default(),
            citizen_number: cashier.citizen_number.clone().unwrap_or_default(),
            avatar: cashier.avatar.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCashierStatusRequest {
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_from_cashier_keeps_date_part() {
        let cashier: Cashier = serde_json::from_str(
            r#"{"accountId":8,"fullName":"Tran Thi B","email":"b@mbkc.vn","gender":"FEMALE",
                "dateOfBirth":"2001-03-09T00:00:00","status":"ACTIVE"}"#,
        )
        .unwrap();
        let form = CreateCashierRequest::from(&cashier);
        assert_eq!(form.date_of_birth, "2001-03-09");
        assert_eq!(form.citizen_number, "");

        let update = UpdateCashierRequest::from_form(
            &CreateCashierRequest {
                full_name: "  Tran Thi B ".into(),
                ..form
            },
            cashier.status.toggled(),
        );
        assert_eq!(update.full_name, "Tran Thi B");
        assert_eq!(update.status, Status::Inactive);
        let json = serde_json::to_value(&update).unwrap();
        assert!(json.get("email").is_none());
        assert_eq!(json["dateOfBirth"], "2001-03-09");
    }
}
