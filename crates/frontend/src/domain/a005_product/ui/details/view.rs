use crate::domain::a005_product::api::{delete_product, fetch_product};
use crate::layout::notification_service::use_notifications;
use crate::routes::params::use_id_param;
use crate::routes::paths::AppRoute;
use crate::shared::components::{status_badge, ConfirmDialog, PageHeader};
use crate::shared::detail_load::DetailLoad;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::pages::access_denied::NotFoundPage;
use contracts::domain::a005_product::aggregate::Product;
use contracts::enums::status::Status;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use thaw::*;

/// Удаленный (деактивированный) продукт удалить повторно нельзя
fn can_delete(product: &Product) -> bool {
    product.status != Status::Deactive
}

fn info_row(label: &'static str, value: Option<String>) -> impl IntoView {
    view! {
        <div class="info-row">
            <span class="info-row__label">{label}</span>
            <span class="info-row__value">{value.unwrap_or_else(|| "-".into())}</span>
        </div>
    }
}

/// `/brand/products/:id`
#[component]
pub fn ProductDetails() -> impl IntoView {
    match use_id_param("id").valid() {
        Some(id) => view! { <ProductCard id=id /> }.into_any(),
        None => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn ProductCard(id: i64) -> impl IntoView {
    let notifications = use_notifications();
    let product = RwSignal::new(DetailLoad::<Product>::Loading);
    let confirm_open = RwSignal::new(false);
    let deleted = RwSignal::new(false);

    spawn_local(async move {
        product.try_set(DetailLoad::from_result(fetch_product(id).await));
    });

    let on_confirm_delete = Callback::new(move |_| {
        let name = product.with_untracked(|p| p.loaded().map(|p| p.name.clone()));
        spawn_local(async move {
            match delete_product(id).await {
                Ok(()) => {
                    log::info!("product {} deleted", id);
                    notifications.success(format!("Product \"{}\" deleted", name.unwrap_or_default()));
                    deleted.try_set(true);
                }
                Err(e) => notifications.error(e.user_message()),
            }
        });
    });

    let delete_button = move || {
        product
            .with(|p| p.loaded().map(can_delete).unwrap_or(false))
            .then(|| {
                view! {
                    <button
                        class="button button--danger"
                        on:click=move |_| confirm_open.set(true)
                    >
                        {icon("trash")}
                        "Delete"
                    </button>
                }
            })
    };

    let card = move || {
        product.with(|state| match state {
            DetailLoad::Loading => view! { <Spinner /> }.into_any(),
            DetailLoad::NotFound => view! { <NotFoundPage /> }.into_any(),
            DetailLoad::Failed(message) => {
                view! { <div class="list-placeholder">{message.clone()}</div> }.into_any()
            }
            DetailLoad::Loaded(p) => product_card(p),
        })
    };

    view! {
        <PageFrame page_id="a005_product--detail" category=PageCategory::Detail>
            {move || deleted.get().then(|| view! { <Redirect path=AppRoute::BrandProducts.path() /> })}
            <PageHeader title="Product detail" back_href=AppRoute::BrandProducts.path()>
                {delete_button}
            </PageHeader>
            {card}
            <ConfirmDialog
                open=confirm_open
                title="Delete product"
                message=Signal::derive(move || {
                    product.with(|p| match p.loaded() {
                        Some(p) => format!("Are you sure you want to delete \"{}\"?", p.name),
                        None => String::new(),
                    })
                })
                on_confirm=on_confirm_delete
            />
        </PageFrame>
    }
}

fn product_card(product: &Product) -> AnyView {
    let image = product.image.clone().map(|src| {
        view! { <img class="product-card__image" src=src alt=product.name.clone() /> }
    });
    view! {
        <div class="product-card">
            {image}
            <div class="product-card__info">
                <h2>{product.name.clone()}</h2>
                {status_badge(&product.status)}
                {info_row("Code", Some(product.code.clone()))}
                {info_row("Type", Some(product.product_type.code().to_string()))}
                {info_row("Category", product.category_name.clone())}
                {info_row("Size", product.size.clone())}
                {info_row("Display order", Some(product.display_order.to_string()))}
                {info_row("Selling price", Some(format!("{:.0}", product.selling_price)))}
                {info_row("Discount price", Some(format!("{:.0}", product.discount_price)))}
                {info_row("Historical price", Some(format!("{:.0}", product.historical_price)))}
                {info_row("Description", product.description.clone())}
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(status: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "productId": 7,
            "code": "PHO01",
            "name": "Pho bo",
            "sellingPrice": 45000,
            "type": "SINGLE",
            "displayOrder": 1,
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_deactivated_product_cannot_be_deleted() {
        assert!(can_delete(&product("ACTIVE")));
        assert!(can_delete(&product("INACTIVE")));
        assert!(!can_delete(&product("DEACTIVE")));
    }

    #[test]
    fn test_detail_fields_are_optional() {
        let p = product("ACTIVE");
        assert_eq!(p.description, None);
        assert_eq!(p.size, None);
        assert_eq!(p.parent_product_id, None);
    }
}
