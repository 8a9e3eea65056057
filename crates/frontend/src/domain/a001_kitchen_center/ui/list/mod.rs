use crate::domain::a001_kitchen_center::api::{delete_kitchen_center, fetch_kitchen_centers};
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
use contracts::domain::a001_kitchen_center::aggregate::KitchenCenter;
use contracts::shared::list::{ListScope, SortSpec};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Список кухонных центров (администратор системы)
#[component]
pub fn KitchenCenterList() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let screen = use_list_screen(SortSpec::asc("name"));
    let query = screen.query(ListScope::default);
    let coordinator = use_list_coordinator(query, fetch_kitchen_centers);

    let to_delete = RwSignal::new(None::<KitchenCenter>);
    let confirm_open = RwSignal::new(false);

    let on_confirm_delete = Callback::new(move |_| {
        let Some(kc) = to_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_kitchen_center(kc.kitchen_center_id).await {
                Ok(()) => {
                    log::info!("kitchen center {} deleted", kc.kitchen_center_id);
                    notifications.success(format!("Kitchen center \"{}\" deleted", kc.name));
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
        ColumnDef::plain("Manager", |kc: &KitchenCenter| {
            kc.kitchen_center_manager_email
                .clone()
                .unwrap_or_else(|| "-".into())
                .into_any()
        }),
        ColumnDef::sortable("Status", "status", |kc: &KitchenCenter| status_badge(&kc.status)),
        ColumnDef::plain("", move |kc: &KitchenCenter| {
            let edit_href = AppRoute::AdminKitchenCenterEdit(kc.kitchen_center_id).path();
            let kc = kc.clone();
            view! {
                <div class="table__actions">
                    <a class="table__action" href=edit_href title="Edit">{icon("edit")}</a>
                    <button
                        class="table__action table__action--danger"
                        title="Delete"
                        on:click=move |_| {
                            to_delete.set(Some(kc.clone()));
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
        ctx.begin_editing(AppRoute::AdminKitchenCenters.path());
        navigate(&AppRoute::AdminKitchenCenterCreate.path(), NavigateOptions::default());
    };

    view! {
        <PageFrame page_id="a001_kitchen_center--list" category=PageCategory::List>
            <PageHeader title="Kitchen centers">
                <button class="button button--primary" on:click=open_create>
                    {icon("plus")}
                    "Create kitchen center"
                </button>
                <button class="button button--secondary" on:click=move |_| coordinator.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>
            <div class="page__toolbar">
                <SearchInput value=screen.search placeholder="Search kitchen center..." />
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
                title="Delete kitchen center"
                message=Signal::derive(move || {
                    to_delete.with(|kc| match kc {
                        Some(kc) => format!(
                            "Deleting \"{}\" also deactivates its stores. Continue?",
                            kc.name
                        ),
                        None => String::new(),
                    })
                })
                on_confirm=on_confirm_delete
            />
        </PageFrame>
    }
}
