use crate::enums::gender::PaymentMethod;
use crate::enums::status::{PartnerOrderStatus, SystemStatus};
use crate::shared::record::{FieldValue, Record, RecordId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPartyRef {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub product_name: String,
    pub quantity: i64,
    pub selling_price: f64,
    #[serde(default)]
    pub note: Option<String>,
}

impl OrderDetail {
    pub fn line_total(&self) -> f64 {
        self.selling_price * self.quantity as f64
    }
}

/// Смена статуса заказа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderHistory {
    pub order_history_id: i64,
    /// ISO 8601
    pub created_date: String,
    pub system_status: SystemStatus,
    pub partner_order_status: PartnerOrderStatus,
}

/// Заказ, полученный от партнера доставки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub order_partner_id: String,
    /// ISO 8601
    pub created_date: String,
    pub partner: OrderPartyRef,
    pub store: OrderPartyRef,
    pub final_total_price: f64,
    pub system_status: SystemStatus,
    pub partner_order_status: PartnerOrderStatus,
    #[serde(default)]
    pub order_details: Vec<OrderDetail>,

    // Поля карточки заказа; в ответе списка их может не быть
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub shipper_name: Option<String>,
    #[serde(default)]
    pub shipper_phone: Option<String>,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub sub_total_price: f64,
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default)]
    pub total_discount: f64,
    #[serde(default)]
    pub order_histories: Vec<OrderHistory>,
}

impl Order {
    /// История от новых записей к старым
    pub fn history_newest_first(&self) -> Vec<OrderHistory> {
        let mut rows = self.order_histories.clone();
        rows.sort_by(|a, b| b.created_date.cmp(&a.created_date));
        rows
    }
}

impl Record for Order {
    fn record_id(&self) -> RecordId {
        RecordId::Int(self.id)
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.into()),
            "orderPartnerId" => Some(self.order_partner_id.as_str().into()),
            // ISO-строки сортируются лексикографически так же, как даты
            "createdDate" => Some(self.created_date.as_str().into()),
            "partner" => Some(self.partner.name.as_str().into()),
            "store" => Some(self.store.name.as_str().into()),
            "finalTotalPrice" => Some(self.final_total_price.into()),
            "systemStatus" => Some(self.system_status.code().into()),
            "partnerOrderStatus" => Some(self.partner_order_status.code().into()),
            _ => None,
        }
    }

    fn search_text(&self) -> String {
        format!("{} {}", self.id, self.order_partner_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_row_without_detail_fields() {
        let order: Order = serde_json::from_str(
            r#"{"id":15,"orderPartnerId":"GF-1","createdDate":"2023-08-01T10:00:00",
                "partner":{"name":"GrabFood"},"store":{"name":"Pho 24"},"finalTotalPrice":95000,
                "systemStatus":"IN_STORE","partnerOrderStatus":"PREPARING"}"#,
        )
        .unwrap();
        assert!(order.order_histories.is_empty());
        assert_eq!(order.payment_method, None);
        assert_eq!(order.delivery_fee, 0.0);
    }

    #[test]
    fn test_detail_fields_and_history_order() {
        let order: Order = serde_json::from_str(
            r#"{"id":15,"orderPartnerId":"GF-1","createdDate":"2023-08-01T10:00:00",
                "partner":{"name":"GrabFood"},"store":{"name":"Pho 24"},"finalTotalPrice":95000,
                "systemStatus":"READY_DELIVERY","partnerOrderStatus":"READY",
                "paymentMethod":"CASHLESS","deliveryFee":15000,
                "orderDetails":[{"productName":"Pho bo","quantity":2,"sellingPrice":40000}],
                "orderHistories":[
                    {"orderHistoryId":1,"createdDate":"2023-08-01T10:00:00","systemStatus":"IN_STORE","partnerOrderStatus":"PREPARING"},
                    {"orderHistoryId":2,"createdDate":"2023-08-01T10:20:00","systemStatus":"READY_DELIVERY","partnerOrderStatus":"READY"}]}"#,
        )
        .unwrap();
        assert_eq!(order.payment_method, Some(PaymentMethod::Cashless));
        assert_eq!(order.order_details[0].line_total(), 80000.0);
        let ids: Vec<i64> = order.history_newest_first().iter().map(|h| h.order_history_id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
