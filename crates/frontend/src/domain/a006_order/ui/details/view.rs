use super::view_model::{available_actions, OrderDetailsViewModel};
use crate::layout::notification_service::use_notifications;
use crate::routes::params::use_id_param;
use crate::routes::paths::AppRoute;
use crate::shared::components::{status_badge, PageHeader};
use crate::shared::date_utils::format_datetime;
use crate::shared::detail_load::DetailLoad;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::current_role;
use crate::system::pages::access_denied::NotFoundPage;
use contracts::domain::a006_order::aggregate::Order;
use leptos::prelude::*;
use thaw::*;

fn money(value: f64) -> String {
    format!("{:.0}", value)
}

fn info_row(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-row__label">{label}</span>
            <span class="info-row__value">{value.unwrap_or_else(|| "-".into())}</span>
        </div>
    }
}

/// Карточка заказа; `back`: список заказов раздела роли
#[component]
pub fn OrderDetails(back: AppRoute) -> impl IntoView {
    match use_id_param("id").valid() {
        Some(id) => view! { <OrderCard id=id back=back /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn OrderCard(id: i64, back: AppRoute) -> impl IntoView {
    let notifications = use_notifications();
    let role = current_role();
    let vm = OrderDetailsViewModel::new(id);
    vm.load();

    let actions = move |order: &Order| {
        available_actions(role.get(), order)
            .into_iter()
            .map(|button| {
                let action = button.action;
                view! {
                    <button
                        class="button button--primary"
                        disabled=move || !button.enabled || vm.acting.get()
                        on:click=move |_| vm.run(action, notifications)
                    >
                        {action.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let card = move || {
        vm.order.with(|state| match state {
            DetailLoad::Loading => view! { <Spinner /> }.into_any(),
            DetailLoad::NotFound => view! { <NotFoundPage /> }.into_any(),
            DetailLoad::Failed(message) => {
                view! { <div class="list-placeholder">{message.clone()}</div> }.into_any()
            }
            DetailLoad::Loaded(order) => order_card(order, actions(order).into_any()),
        })
    };

    view! {
        <PageFrame page_id="a006_order--detail" category=PageCategory::Detail>
            <PageHeader title=format!("Order #{}", id) back_href=back.path() />
            {card}
        </PageFrame>
    }
}

fn order_card(order: &Order, actions: AnyView) -> AnyView {
    let items = order
        .order_details
        .iter()
        .map(|item| {
            let product_name = item.product_name.clone();
            let quantity = item.quantity;
            let selling_price = money(item.selling_price);
            let line_total = money(item.line_total());
            let note = item.note.clone().unwrap_or_default();
            view! {
                <TableRow>
                    <TableCell>{product_name}</TableCell>
                    <TableCell attr:style="text-align: right;">{quantity}</TableCell>
                    <TableCell attr:style="text-align: right;">{selling_price}</TableCell>
                    <TableCell attr:style="text-align: right;">{line_total}</TableCell>
                    <TableCell>{note}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    let history = order
        .history_newest_first()
        .into_iter()
        .map(|h| {
            view! {
                <TableRow>
                    <TableCell>{format_datetime(&h.created_date)}</TableCell>
                    <TableCell>{status_badge(&h.system_status)}</TableCell>
                    <TableCell>{status_badge(&h.partner_order_status)}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="order-card">
            <div class="order-card__status">
                <span>{order.order_partner_id.clone()}</span>
                {status_badge(&order.system_status)}
                {status_badge(&order.partner_order_status)}
                <div class="order-card__actions">{actions}</div>
            </div>
            <div class="order-card__info">
                {info_row("Partner", Some(order.partner.name.clone()))}
                {info_row("Store", Some(order.store.name.clone()))}
                {info_row("Created", Some(format_datetime(&order.created_date)))}
                {info_row("Customer", order.customer_name.clone())}
                {info_row("Customer phone", order.customer_phone.clone())}
                {info_row("Address", order.address.clone())}
                {info_row("Shipper", order.shipper_name.clone())}
                {info_row("Shipper phone", order.shipper_phone.clone())}
                {info_row(
                    "Payment method",
                    order.payment_method.map(|m| m.display_name().to_string()),
                )}
                {info_row("Note", order.note.clone())}
            </div>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Quantity"</TableHeaderCell>
                        <TableHeaderCell>"Price"</TableHeaderCell>
                        <TableHeaderCell>"Amount"</TableHeaderCell>
                        <TableHeaderCell>"Note"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{items}</TableBody>
            </Table>
            <div class="order-card__totals">
                {info_row("Subtotal", Some(money(order.sub_total_price)))}
                {info_row("Delivery fee", Some(money(order.delivery_fee)))}
                {info_row("Discount", Some(money(order.total_discount)))}
                {info_row("Total", Some(money(order.final_total_price)))}
            </div>
            <h3>"History"</h3>
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Time"</TableHeaderCell>
                        <TableHeaderCell>"System status"</TableHeaderCell>
                        <TableHeaderCell>"Partner status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{history}</TableBody>
            </Table>
        </div>
    }
    .into_any()
}
