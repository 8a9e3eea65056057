use crate::domain::a009_store_partner::api::{
    delete_store_partner, fetch_store_partners, update_store_partner_status,
};
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::{use_notifications, NotificationService};
use crate::routes::paths::AppRoute;
use crate::shared::components::{
    status_badge, toggle_label, ColumnDef, ConfirmDialog, ListView, PageHeader, SearchInput,
};
use crate::shared::icons::icon;
use crate::shared::list_coordinator::{use_list_coordinator, ListCoordinator};
use crate::shared::list_screen::use_list_screen;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::use_user_scope;
use contracts::domain::a009_store_partner::aggregate::{StorePartner, UpdateStorePartnerStatusRequest};
use contracts::shared::list::SortSpec;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

fn toggle_status(
    link: &StorePartner,
    coordinator: ListCoordinator<StorePartner>,
    notifications: NotificationService,
) {
    let (store_id, partner_id) = (link.store_id, link.partner_id);
    let request = UpdateStorePartnerStatusRequest {
        status: link.status.toggled(),
    };
    let name = format!("{} / {}", link.store_name, link.partner_name);
    spawn_local(async move {
        match update_store_partner_status(store_id, partner_id, &request).await {
            Ok(()) => {
                log::info!("store partner {}-{} set to {}", store_id, partner_id, request.status.code());
                notifications.success(format!(
                    "{} is now {}",
                    name,
                    request.status.display_name().to_lowercase()
                ));
                coordinator.reload();
            }
            Err(e) => notifications.error(e.user_message()),
        }
    });
}

/// Привязки магазинов бренда к платформам доставки
#[component]
pub fn StorePartnerList() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let scope = use_user_scope();

    let screen = use_list_screen(SortSpec::asc("storeName"));
    let query = screen.query(move || scope.clone());
    let coordinator = use_list_coordinator(query, fetch_store_partners);

    let to_delete = RwSignal::new(None::<StorePartner>);
    let confirm_open = RwSignal::new(false);

    let on_confirm_delete = Callback::new(move |_| {
        let Some(link) = to_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_store_partner(link.store_id, link.partner_id).await {
                Ok(()) => {
                    log::info!("store partner {}-{} deleted", link.store_id, link.partner_id);
                    notifications.success(format!(
                        "{} is no longer linked to {}",
                        link.store_name, link.partner_name
                    ));
                    coordinator.reload();
                }
                Err(e) => notifications.error(e.user_message()),
            }
            to_delete.set(None);
        });
    });

    let columns = vec![
        ColumnDef::text("Store", "storeName"),
        ColumnDef::plain("Partner", |l: &StorePartner| {
            l.partner_type()
                .map(|p| p.display_name().to_string())
                .unwrap_or_else(|| l.partner_name.clone())
                .into_any()
        }),
        ColumnDef::text("Partner account", "userName"),
        ColumnDef::sortable("Commission", "commission", |l: &StorePartner| {
            format!("{:.0}%", l.commission).into_any()
        })
        .align_right(),
        ColumnDef::sortable("Status", "status", |l: &StorePartner| status_badge(&l.status)),
        ColumnDef::plain("", move |l: &StorePartner| {
            let edit_href = AppRoute::BrandStorePartnerEdit(l.store_id, l.partner_id).path();
            let for_toggle = l.clone();
            let for_delete = l.clone();
            view! {
                <div class="table__actions">
                    <button
                        class="button button--ghost"
                        on:click=move |_| toggle_status(&for_toggle, coordinator, notifications)
                    >
                        {toggle_label(l.status)}
                    </button>
                    <a class="table__action" href=edit_href title="Edit">{icon("edit")}</a>
                    <button
                        class="table__action table__action--danger"
                        title="Delete"
                        on:click=move |_| {
                            to_delete.set(Some(for_delete.clone()));
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
        ctx.begin_editing(AppRoute::BrandStorePartners.path());
        navigate(&AppRoute::BrandStorePartnerCreate.path(), NavigateOptions::default());
    };

    view! {
        <PageFrame page_id="a009_store_partner--list" category=PageCategory::List>
            <PageHeader title="Store partners">
                <button class="button button--primary" on:click=open_create>
                    {icon("plus")}
                    "Link store"
                </button>
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
                columns=columns
                sort=screen.sort
                pagination=screen.pagination
                filter=screen.filter
            />
            <ConfirmDialog
                open=confirm_open
                title="Delete store partner"
                message=Signal::derive(move || {
                    to_delete.with(|l| match l {
                        Some(l) => format!(
                            "Remove the {} account of \"{}\"?",
                            l.partner_name, l.store_name
                        ),
                        None => String::new(),
                    })
                })
                on_confirm=on_confirm_delete
            />
        </PageFrame>
    }
}
