use crate::domain::a002_brand::api::{delete_brand, fetch_brands};
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::routes::paths::AppRoute;
use crate::shared::components::{
    status_badge, ColumnDef, ConfirmDialog, ListView, PageHeader, SearchInput,
};
use crate::shared::icons::icon;
use crate::shared::list_coordinator::use_list_coordinator;
use crate::shared::list_screen::use_list_screen;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use contracts::domain::a002_brand::aggregate::Brand;
use contracts::shared::list::{ListScope, SortSpec};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Список брендов: создание, редактирование, удаление с подтверждением
#[component]
pub fn BrandList() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let screen = use_list_screen(SortSpec::asc("name"));
    let query = screen.query(ListScope::default);
    let coordinator = use_list_coordinator(query, fetch_brands);

    let to_delete = RwSignal::new(None::<Brand>);
    let confirm_open = RwSignal::new(false);

    let on_confirm_delete = Callback::new(move |_| {
        let Some(brand) = to_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_brand(brand.brand_id).await {
                Ok(()) => {
                    log::info!("brand {} deleted", brand.brand_id);
                    notifications.success(format!("Brand \"{}\" deleted", brand.name));
                    coordinator.reload();
                }
                Err(e) => notifications.error(e.user_message()),
            }
            to_delete.set(None);
        });
    });

    let columns = vec![
        ColumnDef::text("Name", "name"),
        ColumnDef::text("Address", "address"),
        ColumnDef::plain("Manager", |b: &Brand| {
            b.brand_manager_email
                .clone()
                .unwrap_or_else(|| "-".into())
                .into_any()
        }),
        ColumnDef::sortable("Status", "status", |b: &Brand| status_badge(&b.status)),
        ColumnDef::plain("", move |b: &Brand| {
            let edit_href = AppRoute::AdminBrandEdit(b.brand_id).path();
            let brand = b.clone();
            view! {
                <div class="table__actions">
                    <a class="table__action" href=edit_href title="Edit">{icon("edit")}</a>
                    <button
                        class="table__action table__action--danger"
                        title="Delete"
                        on:click=move |_| {
                            to_delete.set(Some(brand.clone()));
                            confirm_open.set(true);
                        }
                    >
                        {icon("trash")}
                    </button>
                </div>
            }
            .into_any()
        })
        .align_right(),
    ];

    let open_create = move |_| {
        ctx.begin_editing(AppRoute::AdminBrands.path());
        navigate(&AppRoute::AdminBrandCreate.path(), NavigateOptions::default());
    };

    view! {
        <PageFrame page_id="a002_brand--list" category=PageCategory::List>
            <PageHeader title="Brands">
                <button class="button button--primary" on:click=open_create>
                    {icon("plus")}
                    "Create brand"
                </button>
                <button class="button button--secondary" on:click=move |_| coordinator.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>
            <div class="page__toolbar">
                <SearchInput value=screen.search placeholder="Search brand name..." />
            </div>
            <ListView
                coordinator=coordinator
                columns=columns
                sort=screen.sort
                pagination=screen.pagination
                filter=screen.filter
            />
            <ConfirmDialog
                open=confirm_open
                title="Delete brand"
                message=Signal::derive(move || {
                    to_delete.with(|b| match b {
                        Some(b) => format!("Are you sure you want to delete \"{}\"?", b.name),
                        None => String::new(),
                    })
                })
                on_confirm=on_confirm_delete
            />
        </PageFrame>
    }
}
