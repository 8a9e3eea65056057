use crate::enums::status::{ExchangeType, Status};
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

/// Движение денег по кошельку (кухня, магазин, кассир)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyExchange {
    pub exchange_id: i64,
    pub amount: f64,
    pub exchange_type: ExchangeType,
    #[serde(default)]
    pub content: String,
    pub status: Status,
    #[serde(default)]
    pub sender_name: Option<String>,
    #[serde(default)]
    pub receiver_name: Option<String>,
    /// ISO 8601
    pub transaction_time: String,
}

impl Record for MoneyExchange {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.exchange_id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "exchangeId" => Some(self.exchange_id.into()),
            "amount" => Some(self.amount.into()),
            "exchangeType" => Some(self.exchange_type.code().into()),
            "content" => Some(self.content.as_str().into()),
            "status" => Some(self.status.code().into()),
            "transactionTime" => Some(self.transaction_time.as_str().into()),
            _ => None,
        }
    }

    fn search_text(&self) -> String {
        self.content.clone()
    }
}
