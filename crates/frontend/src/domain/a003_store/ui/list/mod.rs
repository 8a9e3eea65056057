use crate::domain::a003_store::api::fetch_stores;
use crate::shared::components::{status_badge, ColumnDef, ListView, PageHeader, SearchInput};
use crate::shared::icons::icon;
use crate::shared::list_coordinator::use_list_coordinator;
use crate::shared::list_screen::use_list_screen;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::use_user_scope;
use contracts::domain::a003_store::aggregate::Store;
use contracts::shared::list::SortSpec;
use leptos::prelude::*;

/// Колонки зависят от роли: владелец списка в своей колонке не нуждается
fn columns(show_brand: bool, show_kitchen_center: bool) -> Vec<ColumnDef<Store>> {
    let mut columns = vec![ColumnDef::text("Name", "name")];
    if show_kitchen_center {
        columns.push(ColumnDef::text("Kitchen center", "kitchenCenter"));
    }
    if show_brand {
        columns.push(ColumnDef::text("Brand", "brand"));
    }
    columns.push(ColumnDef::plain("Manager", |s: &Store| {
        s.store_manager_email
            .clone()
            .unwrap_or_else(|| "-".into())
            .into_any()
    }));
    columns.push(ColumnDef::sortable("Status", "status", |s: &Store| status_badge(&s.status)));
    columns
}

/// Список магазинов. Администратор видит все, менеджеры: только свои
/// (ключ владельца берется из профиля пользователя).
#[component]
pub fn StoreList() -> impl IntoView {
    let scope = use_user_scope();
    let show_brand = scope.id_brand.is_none();
    let show_kitchen_center = scope.id_kitchen_center.is_none();

    let screen = use_list_screen(SortSpec::asc("name"));
    let query = screen.query(move || scope.clone());
    let coordinator = use_list_coordinator(query, fetch_stores);

    view! {
        <PageFrame page_id="a003_store--list" category=PageCategory::List>
            <PageHeader title="Stores">
                <button class="button button--secondary" on:click=move |_| coordinator.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>
            <div class="page__toolbar">
                <SearchInput value=screen.search placeholder="Search store name..." />
            </div>
            <ListView
                coordinator=coordinator
                columns=columns(show_brand, show_kitchen_center)
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
    fn test_owner_column_hidden_for_scoped_list() {
        let labels = |cols: Vec<ColumnDef<Store>>| cols.iter().map(|c| c.label).collect::<Vec<_>>();
        assert_eq!(
            labels(columns(true, true)),
            vec!["Name", "Kitchen center", "Brand", "Manager", "Status"]
        );
        assert_eq!(labels(columns(false, true)), vec!["Name", "Kitchen center", "Manager", "Status"]);
    }
}
