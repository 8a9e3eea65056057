use crate::domain::a007_banking_account::api::{delete_banking_account, fetch_banking_accounts};
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::routes::paths::AppRoute;
use crate::shared::components::{status_badge, ColumnDef, ConfirmDialog, ListView, PageHeader, SearchInput};
use crate::shared::icons::icon;
use crate::shared::list_coordinator::use_list_coordinator;
use crate::shared::list_screen::use_list_screen;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::use_user_scope;
use contracts::domain::a007_banking_account::aggregate::BankingAccount;
use contracts::shared::list::SortSpec;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Банковские счета кухонного центра
#[component]
pub fn BankingAccountList() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let scope = use_user_scope();

    let screen = use_list_screen(SortSpec::asc("name"));
    let query = screen.query(move || scope.clone());
    let coordinator = use_list_coordinator(query, fetch_banking_accounts);

    let to_delete = RwSignal::new(None::<(i64, String)>);
    let confirm_open = RwSignal::new(false);

    let columns = vec![
        ColumnDef::plain("Logo", |a: &BankingAccount| match a.logo_url.clone() {
            Some(src) => view! { <img class="table__logo" src=src alt="" /> }.into_any(),
            None => "-".into_any(),
        }),
        ColumnDef::text("Bank name", "name"),
        ColumnDef::text("Account number", "numberAccount"),
        ColumnDef::sortable("Status", "status", |a: &BankingAccount| status_badge(&a.status)),
        ColumnDef::plain("", move |a: &BankingAccount| {
            let target = (a.banking_account_id, a.name.clone());
            view! {
                <button
                    class="button button--ghost"
                    title="Delete"
                    on:click=move |_| {
                        to_delete.set(Some(target.clone()));
                        confirm_open.set(true);
                    }
                >
                    {icon("trash")}
                </button>
            }
            .into_any()
        })
        .align_right(),
    ];

    let on_confirm = Callback::new(move |_| {
        let Some((id, name)) = to_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match delete_banking_account(id).await {
                Ok(()) => {
                    log::info!("banking account {} deleted", id);
                    notifications.success(format!("Banking account \"{}\" deleted", name));
                    coordinator.reload();
                }
                Err(e) => notifications.error(e.user_message()),
            }
        });
    });

    let open_create = move |_| {
        let back = AppRoute::KitchenCenterBankingAccounts.path();
        ctx.begin_editing(back);
        navigate(
            &AppRoute::KitchenCenterBankingAccountCreate.path(),
            NavigateOptions::default(),
        );
    };

    view! {
        <PageFrame page_id="a007_banking_account--list" category=PageCategory::List>
            <PageHeader title="Banking accounts">
                <button class="button button--secondary" on:click=move |_| coordinator.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=open_create>
                    {icon("plus")}
                    "Create banking account"
                </button>
            </PageHeader>
            <div class="page__toolbar">
                <SearchInput value=screen.search placeholder="Search bank name..." />
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
                title="Delete banking account"
                message=Signal::derive(move || {
                    to_delete.with(|t| match t {
                        Some((_, name)) => format!("Delete banking account \"{}\"?", name),
                        None => String::new(),
                    })
                })
                on_confirm=on_confirm
            />
        </PageFrame>
    }
}
