//! Подписи и цвета статусов для бейджей в таблицах.
//!
//! Цвет задается исчерпывающим `match`: новый вариант enum не скомпилируется
//! без него.

use super::ui::{Badge, BadgeVariant};
use contracts::enums::status::{ExchangeType, PartnerOrderStatus, Status, SystemStatus};
use leptos::prelude::*;

pub trait StatusLabel {
    fn label(&self) -> &'static str;
    fn variant(&self) -> BadgeVariant;
}

impl StatusLabel for Status {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            Status::Active => BadgeVariant::Success,
            Status::Inactive => BadgeVariant::Warning,
            Status::Deactive | Status::Rejected => BadgeVariant::Error,
            Status::BeConfirming => BadgeVariant::Primary,
        }
    }
}

impl StatusLabel for SystemStatus {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            SystemStatus::InStore => BadgeVariant::Neutral,
            SystemStatus::ReadyDelivery => BadgeVariant::Warning,
            SystemStatus::Completed => BadgeVariant::Success,
            SystemStatus::Cancelled => BadgeVariant::Error,
        }
    }
}

impl StatusLabel for PartnerOrderStatus {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            PartnerOrderStatus::Upcoming => BadgeVariant::Neutral,
            PartnerOrderStatus::Preparing => BadgeVariant::Primary,
            PartnerOrderStatus::Ready => BadgeVariant::Warning,
            PartnerOrderStatus::Completed => BadgeVariant::Success,
            PartnerOrderStatus::Cancelled => BadgeVariant::Error,
        }
    }
}

impl StatusLabel for ExchangeType {
    fn label(&self) -> &'static str {
        self.display_name()
    }

    fn variant(&self) -> BadgeVariant {
        match self {
            ExchangeType::Receive => BadgeVariant::Success,
            ExchangeType::Send => BadgeVariant::Primary,
            ExchangeType::Withdraw => BadgeVariant::Warning,
        }
    }
}

/// Бейдж со статусом
pub fn status_badge<S: StatusLabel>(status: &S) -> AnyView {
    let variant = status.variant();
    let label = status.label();
    view! { <Badge variant=variant>{label}</Badge> }.into_any()
}

/// Подпись кнопки переключателя "активен/неактивен" для текущего статуса
pub fn toggle_label(status: Status) -> &'static str {
    match status {
        Status::Active => "Deactivate",
        _ => "Activate",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::BeConfirming.label(), "Be confirming");
        assert_eq!(Status::Deactive.variant(), BadgeVariant::Error);
        assert_eq!(SystemStatus::ReadyDelivery.label(), "Ready to deliver");
        assert_eq!(PartnerOrderStatus::Preparing.variant(), BadgeVariant::Primary);
        assert_eq!(ExchangeType::Withdraw.label(), "Withdraw");
    }

    #[test]
    fn test_toggle_label_follows_status() {
        assert_eq!(toggle_label(Status::Active), "Deactivate");
        assert_eq!(toggle_label(Status::Inactive), "Activate");
        assert_eq!(Status::Active.toggled(), Status::Inactive);
    }
}
