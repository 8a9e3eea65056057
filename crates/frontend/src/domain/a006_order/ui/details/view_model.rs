//! Карточка заказа: загрузка, действия кассира над статусом.
//!
//! Какие действия доступны, решает чистая [`available_actions`]; карточка
//! только показывает кнопки и после успешной команды перечитывает заказ.

use crate::domain::a006_order::api;
use crate::layout::notification_service::NotificationService;
use crate::shared::detail_load::DetailLoad;
use contracts::domain::a006_order::aggregate::Order;
use contracts::enums::status::{PartnerOrderStatus, SystemStatus};
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Заказ собран и ждет курьера
    ReadyDelivery,
    /// Курьер забрал заказ
    Complete,
}

impl OrderAction {
    pub fn label(&self) -> &'static str {
        match self {
            OrderAction::ReadyDelivery => "Ready to deliver",
            OrderAction::Complete => "Complete",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            OrderAction::ReadyDelivery => "changing-to-ready-delivery",
            OrderAction::Complete => "confirming-completed",
        }
    }
}

/// Кнопка действия и ее доступность
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub action: OrderAction,
    pub enabled: bool,
}

/// Действия над заказом для роли.
///
/// Менять статус может только кассир. Завершенный или отмененный заказ
/// действий не имеет. "Complete" показывается и до готовности, но нажать его
/// можно только когда заказ готов к доставке и у партнера тоже `Ready`.
pub fn available_actions(role: Option<Role>, order: &Order) -> Vec<ActionButton> {
    if role != Some(Role::Cashier) {
        return Vec::new();
    }
    let complete = ActionButton {
        action: OrderAction::Complete,
        enabled: order.system_status == SystemStatus::ReadyDelivery
            && order.partner_order_status == PartnerOrderStatus::Ready,
    };
    match order.system_status {
        SystemStatus::InStore => vec![
            ActionButton {
                action: OrderAction::ReadyDelivery,
                enabled: true,
            },
            complete,
        ],
        SystemStatus::ReadyDelivery => vec![complete],
        SystemStatus::Completed | SystemStatus::Cancelled => Vec::new(),
    }
}

#[derive(Clone, Copy)]
pub struct OrderDetailsViewModel {
    pub id: i64,
    pub order: RwSignal<DetailLoad<Order>>,
    pub acting: RwSignal<bool>,
}

impl OrderDetailsViewModel {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            order: RwSignal::new(DetailLoad::Loading),
            acting: RwSignal::new(false),
        }
    }

    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            let state = DetailLoad::from_result(api::fetch_order(this.id).await);
            this.order.try_set(state);
        });
    }

    pub fn run(&self, action: OrderAction, notifications: NotificationService) {
        if self.acting.get_untracked() {
            return;
        }
        let this = *self;
        this.acting.set(true);
        spawn_local(async move {
            match api::change_order_status(this.id, action.endpoint()).await {
                Ok(()) => {
                    log::info!("order {} {:?}", this.id, action);
                    notifications.success(format!("Order #{}: {}", this.id, action.label()));
                    this.load();
                }
                Err(e) => notifications.error(e.user_message()),
            }
            this.acting.try_set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(system: &str, partner: &str) -> Order {
        serde_json::from_value(serde_json::json!({
            "id": 15,
            "orderPartnerId": "GF-15",
            "createdDate": "2023-08-01T10:00:00",
            "partner": {"name": "GrabFood"},
            "store": {"name": "Pho 24"},
            "finalTotalPrice": 95000,
            "systemStatus": system,
            "partnerOrderStatus": partner,
        }))
        .unwrap()
    }

    fn buttons(role: Role, system: &str, partner: &str) -> Vec<(OrderAction, bool)> {
        available_actions(Some(role), &order(system, partner))
            .into_iter()
            .map(|b| (b.action, b.enabled))
            .collect()
    }

    #[test]
    fn test_only_cashier_changes_status() {
        for role in [Role::KitchenCenterManager, Role::MbkcAdmin, Role::BrandManager] {
            assert!(buttons(role, "IN_STORE", "PREPARING").is_empty());
        }
        assert!(available_actions(None, &order("IN_STORE", "PREPARING")).is_empty());
    }

    #[test]
    fn test_in_store_order_can_be_made_ready() {
        assert_eq!(
            buttons(Role::Cashier, "IN_STORE", "PREPARING"),
            vec![(OrderAction::ReadyDelivery, true), (OrderAction::Complete, false)]
        );
    }

    #[test]
    fn test_complete_needs_partner_ready() {
        assert_eq!(
            buttons(Role::Cashier, "READY_DELIVERY", "PREPARING"),
            vec![(OrderAction::Complete, false)]
        );
        assert_eq!(
            buttons(Role::Cashier, "READY_DELIVERY", "READY"),
            vec![(OrderAction::Complete, true)]
        );
    }

    #[test]
    fn test_finished_orders_have_no_actions() {
        assert!(buttons(Role::Cashier, "COMPLETED", "COMPLETED").is_empty());
        assert!(buttons(Role::Cashier, "CANCELLED", "CANCELLED").is_empty());
    }
}
