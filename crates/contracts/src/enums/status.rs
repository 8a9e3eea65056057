//! Статусы сущностей, как их присылает API.

use serde::{Deserialize, Serialize};

/// Статус справочной сущности (бренд, магазин, кухня, продукт...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Active,
    Inactive,
    Deactive,
    BeConfirming,
    Rejected,
}

impl Status {
    pub fn code(&self) -> &'static str {
        match self {
            Status::Active => "ACTIVE",
            Status::Inactive => "INACTIVE",
            Status::Deactive => "DEACTIVE",
            Status::BeConfirming => "BE_CONFIRMING",
            Status::Rejected => "REJECTED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Status::Active => "Active",
            Status::Inactive => "Inactive",
            Status::Deactive => "Deactivated",
            Status::BeConfirming => "Be confirming",
            Status::Rejected => "Rejected",
        }
    }

    /// Статус после переключателя "активен/неактивен"
    pub fn toggled(&self) -> Status {
        match self {
            Status::Active => Status::Inactive,
            Status::Inactive => Status::Active,
            other => *other,
        }
    }
}

/// Статус заказа внутри системы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SystemStatus {
    InStore,
    ReadyDelivery,
    Completed,
    Cancelled,
}

impl SystemStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SystemStatus::InStore => "IN_STORE",
            SystemStatus::ReadyDelivery => "READY_DELIVERY",
            SystemStatus::Completed => "COMPLETED",
            SystemStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SystemStatus::InStore => "In store",
            SystemStatus::ReadyDelivery => "Ready to deliver",
            SystemStatus::Completed => "Completed",
            SystemStatus::Cancelled => "Cancelled",
        }
    }
}

/// Статус заказа у партнера доставки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartnerOrderStatus {
    Upcoming,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl PartnerOrderStatus {
    pub fn code(&self) -> &'static str {
        match self {
            PartnerOrderStatus::Upcoming => "UPCOMING",
            PartnerOrderStatus::Preparing => "PREPARING",
            PartnerOrderStatus::Ready => "READY",
            PartnerOrderStatus::Completed => "COMPLETED",
            PartnerOrderStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PartnerOrderStatus::Upcoming => "Upcoming",
            PartnerOrderStatus::Preparing => "Preparing",
            PartnerOrderStatus::Ready => "Ready",
            PartnerOrderStatus::Completed => "Completed",
            PartnerOrderStatus::Cancelled => "Cancelled",
        }
    }
}

/// Тип движения денег по кошельку
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExchangeType {
    Receive,
    Send,
    Withdraw,
}

impl ExchangeType {
    pub fn code(&self) -> &'static str {
        match self {
            ExchangeType::Receive => "RECEIVE",
            ExchangeType::Send => "SEND",
            ExchangeType::Withdraw => "WITHDRAW",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ExchangeType::Receive => "Receive",
            ExchangeType::Send => "Send",
            ExchangeType::Withdraw => "Withdraw",
        }
    }
}

/// Обычная категория или категория допов
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CategoryType {
    Normal,
    Extra,
}

impl CategoryType {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryType::Normal => "NORMAL",
            CategoryType::Extra => "EXTRA",
        }
    }
}

/// Тип продукта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Single,
    Parent,
    Child,
    Extra,
}

impl ProductType {
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Single => "SINGLE",
            ProductType::Parent => "PARENT",
            ProductType::Child => "CHILD",
            ProductType::Extra => "EXTRA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let status: Status = serde_json::from_str("\"BE_CONFIRMING\"").unwrap();
        assert_eq!(status, Status::BeConfirming);
        assert_eq!(serde_json::to_string(&SystemStatus::ReadyDelivery).unwrap(), "\"READY_DELIVERY\"");
    }

    #[test]
    fn test_status_toggle() {
        assert_eq!(Status::Active.toggled(), Status::Inactive);
        assert_eq!(Status::Inactive.toggled(), Status::Active);
        assert_eq!(Status::Deactive.toggled(), Status::Deactive);
    }

    #[test]
    fn test_codes_match_serde() {
        for s in [Status::Active, Status::Rejected] {
            assert_eq!(serde_json::to_string(&s).unwrap(), format!("\"{}\"", s.code()));
        }
        for s in [PartnerOrderStatus::Upcoming, PartnerOrderStatus::Cancelled] {
            assert_eq!(serde_json::to_string(&s).unwrap(), format!("\"{}\"", s.code()));
        }
        assert_eq!(serde_json::to_string(&ExchangeType::Withdraw).unwrap(), "\"WITHDRAW\"");
    }
}
