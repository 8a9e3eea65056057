use crate::domain::a004_category::api::fetch_categories;
use crate::domain::a004_category::ui::extra_dialog::AddExtraDialog;
use crate::shared::components::{status_badge, ColumnDef, ListView, PageHeader, SearchInput};
use crate::shared::icons::icon;
use crate::shared::list_coordinator::use_list_coordinator;
use crate::shared::list_screen::use_list_screen;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::use_user_scope;
use contracts::domain::a004_category::aggregate::Category;
use contracts::enums::status::CategoryType;
use contracts::shared::list::{ListScope, SortSpec};
use leptos::prelude::*;

fn category_scope(base: ListScope, category_type: CategoryType) -> ListScope {
    ListScope {
        category_type: Some(category_type.code().to_string()),
        ..base
    }
}

/// Категории бренда: обычные или допы (`type=NORMAL|EXTRA` в запросе)
#[component]
pub fn CategoryList(category_type: CategoryType) -> impl IntoView {
    let scope = category_scope(use_user_scope(), category_type);
    let (page_id, title) = match category_type {
        CategoryType::Normal => ("a004_category--list", "Categories"),
        CategoryType::Extra => ("a004_category_extra--list", "Extra categories"),
    };

    let screen = use_list_screen(SortSpec::asc("displayOrder"));
    let query = screen.query(move || scope.clone());
    let coordinator = use_list_coordinator(query, fetch_categories);

    let extend_target = RwSignal::new(None::<Category>);
    let extra_open = RwSignal::new(false);

    let mut columns = vec![
        ColumnDef::text("Code", "code"),
        ColumnDef::text("Name", "name"),
        ColumnDef::sortable("Display order", "displayOrder", |c: &Category| {
            c.display_order.to_string().into_any()
        })
        .align_right(),
        ColumnDef::sortable("Status", "status", |c: &Category| status_badge(&c.status)),
    ];
    // Допы привязываются только к обычным категориям
    if category_type == CategoryType::Normal {
        columns.push(
            ColumnDef::plain("", move |c: &Category| {
                let c = c.clone();
                view! {
                    <button
                        class="table__action"
                        title="Add extra categories"
                        on:click=move |_| {
                            extend_target.set(Some(c.clone()));
                            extra_open.set(true);
                        }
                    >
                        {icon("layers-plus")}
                    </button>
                }
                .into_any()
            })
            .align_right(),
        );
    }

    view! {
        <PageFrame page_id=page_id category=PageCategory::List>
            <PageHeader title=title>
                <button class="button button--secondary" on:click=move |_| coordinator.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>
            <div class="page__toolbar">
                <SearchInput value=screen.search placeholder="Search category name..." />
            </div>
            <ListView
                coordinator=coordinator
                columns=columns
                sort=screen.sort
                pagination=screen.pagination
                filter=screen.filter
            />
            <AddExtraDialog open=extra_open category=extend_target />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_scope_keeps_brand() {
        let base = ListScope {
            id_brand: Some(4),
            ..Default::default()
        };
        let scope = category_scope(base, CategoryType::Extra);
        assert_eq!(scope.id_brand, Some(4));
        assert_eq!(scope.category_type.as_deref(), Some("EXTRA"));
    }
}
