use crate::domain::a006_order::api::fetch_orders;
use crate::routes::paths::AppRoute;
use crate::shared::components::{status_badge, ColumnDef, ListView, PageHeader, SearchInput};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_coordinator::use_list_coordinator;
use crate::shared::list_screen::use_list_screen;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::{current_role, use_user_scope};
use contracts::domain::a006_order::aggregate::Order;
use contracts::shared::list::SortSpec;
use contracts::system::auth::Role;
use leptos::prelude::*;

/// Карточка заказа в разделе роли
fn detail_route(role: Option<Role>, id: i64) -> Option<AppRoute> {
    match role? {
        Role::KitchenCenterManager => Some(AppRoute::KitchenCenterOrderDetails(id)),
        Role::Cashier => Some(AppRoute::CashierOrderDetails(id)),
        Role::MbkcAdmin | Role::BrandManager => None,
    }
}

fn columns(role: Option<Role>) -> Vec<ColumnDef<Order>> {
    vec![
        ColumnDef::text("Order ID", "orderPartnerId"),
        ColumnDef::text("Partner", "partner"),
        ColumnDef::text("Store", "store"),
        ColumnDef::sortable("Created", "createdDate", |o: &Order| {
            format_datetime(&o.created_date).into_any()
        }),
        ColumnDef::sortable("Total", "finalTotalPrice", |o: &Order| {
            format!("{:.0}", o.final_total_price).into_any()
        })
        .align_right(),
        ColumnDef::plain("Items", |o: &Order| o.order_details.len().to_string().into_any())
            .align_right(),
        ColumnDef::sortable("Partner status", "partnerOrderStatus", |o: &Order| {
            status_badge(&o.partner_order_status)
        }),
        ColumnDef::sortable("System status", "systemStatus", |o: &Order| {
            status_badge(&o.system_status)
        }),
        ColumnDef::plain("", move |o: &Order| match detail_route(role, o.id) {
            Some(route) => view! {
                <a class="table__action" href=route.path() title="View">{icon("eye")}</a>
            }
            .into_any(),
            None => ().into_any(),
        })
        .align_right(),
    ]
}

/// Заказы кухонного центра или кассира; новые сверху
#[component]
pub fn OrderList() -> impl IntoView {
    let scope = use_user_scope();
    let role = current_role().get_untracked();
    let screen = use_list_screen(SortSpec::desc("createdDate"));
    let query = screen.query(move || scope.clone());
    let coordinator = use_list_coordinator(query, fetch_orders);

    view! {
        <PageFrame page_id="a006_order--list" category=PageCategory::List>
            <PageHeader title="Orders">
                <button class="button button--secondary" on:click=move |_| coordinator.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>
            <div class="page__toolbar">
                <SearchInput value=screen.search placeholder="Search order ID..." />
            </div>
            <ListView
                coordinator=coordinator
                columns=columns(role)
                sort=screen.sort
                pagination=screen.pagination
                filter=screen.filter
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_route_follows_role() {
        assert_eq!(
            detail_route(Some(Role::Cashier), 15),
            Some(AppRoute::CashierOrderDetails(15))
        );
        assert_eq!(
            detail_route(Some(Role::KitchenCenterManager), 15).map(|r| r.path()),
            Some("/kitchen-center/orders/15".to_string())
        );
        assert_eq!(detail_route(Some(Role::BrandManager), 15), None);
        assert_eq!(detail_route(None, 15), None);
    }
}
