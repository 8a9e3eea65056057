use crate::domain::a005_product::api::fetch_products;
use crate::routes::paths::AppRoute;
use crate::shared::components::{status_badge, ColumnDef, ListView, PageHeader, SearchInput};
use crate::shared::icons::icon;
use crate::shared::list_coordinator::use_list_coordinator;
use crate::shared::list_screen::use_list_screen;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::use_user_scope;
use contracts::domain::a005_product::aggregate::Product;
use contracts::shared::list::SortSpec;
use leptos::prelude::*;

#[component]
pub fn ProductList() -> impl IntoView {
    let scope = use_user_scope();
    let screen = use_list_screen(SortSpec::asc("name"));
    let query = screen.query(move || scope.clone());
    let coordinator = use_list_coordinator(query, fetch_products);

    let columns = vec![
        ColumnDef::text("Code", "code"),
        ColumnDef::text("Name", "name"),
        ColumnDef::text("Category", "categoryName"),
        ColumnDef::sortable("Type", "type", |p: &Product| p.product_type.code().into_any()),
        ColumnDef::sortable("Selling price", "sellingPrice", |p: &Product| {
            format!("{:.0}", p.selling_price).into_any()
        })
        .align_right(),
        ColumnDef::sortable("Status", "status", |p: &Product| status_badge(&p.status)),
        ColumnDef::plain("", |p: &Product| {
            view! {
                <a
                    class="table__action"
                    href=AppRoute::BrandProductDetails(p.product_id).path()
                    title="View"
                >
                    {icon("eye")}
                </a>
            }
            .into_any()
        })
        .align_right(),
    ];

    view! {
        <PageFrame page_id="a005_product--list" category=PageCategory::List>
            <PageHeader title="Products">
                <button class="button button--secondary" on:click=move |_| coordinator.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>
            <div class="page__toolbar">
                <SearchInput value=screen.search placeholder="Search product name..." />
            </div>
            <ListView
                coordinator=coordinator
                columns=columns
                sort=screen.sort
                pagination=screen.pagination
                filter=screen.filter
            />
        </PageFrame>
    }
}
