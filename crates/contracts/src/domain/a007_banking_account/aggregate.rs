use crate::enums::status::Status;
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

// ============================================================================
// Banking account
// ============================================================================

/// Банковский счет кухонного центра для вывода денег
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankingAccount {
    pub banking_account_id: i64,
    pub number_account: String,
    pub name: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub status: Status,
}

impl Record for BankingAccount {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.banking_account_id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "bankingAccountId" => Some(self.banking_account_id.into()),
            "numberAccount" => Some(self.number_account.as_str().into()),
            "name" => Some(self.name.as_str().into()),
            "status" => Some(self.status.code().into()),
            _ => None,
        }
    }
}

// ============================================================================
// Requests
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateBankingAccountRequest {
    pub bank_name: String,
    pub number_account: String,
    pub bank_logo: String,
}
