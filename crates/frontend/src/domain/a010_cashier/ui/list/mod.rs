use crate::domain::a010_cashier::api::{delete_cashier, fetch_cashiers, update_cashier_status};
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::{use_notifications, NotificationService};
use crate::routes::paths::AppRoute;
use crate::shared::components::{
    status_badge, toggle_label, ColumnDef, ConfirmDialog, ListView, PageHeader, SearchInput,
};
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_coordinator::{use_list_coordinator, ListCoordinator};
use crate::shared::list_screen::use_list_screen;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::use_user_scope;
use contracts::domain::a010_cashier::aggregate::{Cashier, UpdateCashierStatusRequest};
use contracts::enums::gender::Gender;
use contracts::shared::list::SortSpec;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

fn toggle_status(
    cashier: &Cashier,
    coordinator: ListCoordinator<Cashier>,
    notifications: NotificationService,
) {
    let id = cashier.account_id;
    let request = UpdateCashierStatusRequest {
        status: cashier.status.toggled(),
    };
    let name = cashier.full_name.clone();
    spawn_local(async move {
        match update_cashier_status(id, &request).await {
            Ok(()) => {
                log::info!("cashier {} set to {}", id, request.status.code());
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

fn gender_label(cashier: &Cashier) -> String {
    match cashier.gender.as_deref() {
        Some(code) => Gender::from_code(code)
            .map(|g| g.display_name().to_string())
            .unwrap_or_else(|| code.to_string()),
        None => "-".into(),
    }
}

/// Кассиры кухонного центра
#[component]
pub fn CashierList() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let scope = use_user_scope();

    let screen = use_list_screen(SortSpec::asc("fullName"));
    let query = screen.query(move || scope.clone());
    let coordinator = use_list_coordinator(query, fetch_cashiers);

    let to_delete = RwSignal::new(None::<Cashier>);
    let confirm_open = RwSignal::new(false);

    let on_confirm_delete = Callback::new(move |_| {
        let Some(cashier) = to_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_cashier(cashier.account_id).await {
                Ok(()) => {
                    log::info!("cashier {} deleted", cashier.account_id);
                    notifications.success(format!("Cashier \"{}\" deleted", cashier.full_name));
                    coordinator.reload();
                }
                Err(e) => notifications.error(e.user_message()),
            }
            to_delete.set(None);
        });
    });

    let columns = vec![
        ColumnDef::text("Full name", "fullName"),
        ColumnDef::text("Email", "email"),
        ColumnDef::plain("Gender", |c: &Cashier| gender_label(c).into_any()),
        ColumnDef::sortable("Date of birth", "dateOfBirth", |c: &Cashier| {
            c.date_of_birth
                .as_deref()
                .map(format_date)
                .unwrap_or_else(|| "-".into())
                .into_any()
        }),
        ColumnDef::plain("Citizen number", |c: &Cashier| {
            c.citizen_number.clone().unwrap_or_else(|| "-".into()).into_any()
        }),
        ColumnDef::sortable("Status", "status", |c: &Cashier| status_badge(&c.status)),
        ColumnDef::plain("", move |c: &Cashier| {
            let edit_href = AppRoute::KitchenCenterCashierEdit(c.account_id).path();
            let for_toggle = c.clone();
            let for_delete = c.clone();
            view! {
                <div class="table__actions">
                    <button
                        class="button button--ghost"
                        on:click=move |_| toggle_status(&for_toggle, coordinator, notifications)
                    >
                        {toggle_label(c.status)}
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
        ctx.begin_editing(AppRoute::KitchenCenterCashiers.path());
        navigate(&AppRoute::KitchenCenterCashierCreate.path(), NavigateOptions::default());
    };

    view! {
        <PageFrame page_id="a010_cashier--list" category=PageCategory::List>
            <PageHeader title="Cashiers">
                <button class="button button--primary" on:click=open_create>
                    {icon("plus")}
                    "Create cashier"
                </button>
                <button class="button button--secondary" on:click=move |_| coordinator.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>
            <div class="page__toolbar">
                <SearchInput value=screen.search placeholder="Search cashier name or email..." />
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
                title="Delete cashier"
                message=Signal::derive(move || {
                    to_delete.with(|c| match c {
                        Some(c) => format!("Are you sure you want to delete \"{}\"?", c.full_name),
                        None => String::new(),
                    })
                })
                on_confirm=on_confirm_delete
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cashier(gender: Option<&str>) -> Cashier {
        serde_json::from_value(serde_json::json!({
            "accountId": 8,
            "fullName": "Tran Thi B",
            "email": "b@mbkc.vn",
            "gender": gender,
            "status": "ACTIVE",
        }))
        .unwrap()
    }

    #[test]
    fn test_gender_label() {
        assert_eq!(gender_label(&cashier(Some("FEMALE"))), "Female");
        assert_eq!(gender_label(&cashier(Some("male"))), "Male");
        assert_eq!(gender_label(&cashier(Some("N/A"))), "N/A");
        assert_eq!(gender_label(&cashier(None)), "-");
    }
}
