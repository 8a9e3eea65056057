use super::view_model::BankingAccountCreateViewModel;
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::routes::paths::AppRoute;
use crate::shared::components::{field_error, PageHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

/// Форма нового банковского счета (`/kitchen-center/banking-accounts/new`)
#[component]
pub fn BankingAccountCreate() -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();
    let vm = BankingAccountCreateViewModel::new();

    let back = ctx.back_path(&AppRoute::KitchenCenterBankingAccounts.path());
    if !ctx.editing.get_untracked() {
        ctx.begin_editing(back.clone());
    }
    on_cleanup(move || ctx.end_editing());

    let on_submit = {
        let navigate = navigate.clone();
        let back = back.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let navigate = navigate.clone();
            let back = back.clone();
            vm.save_command(notifications, move || {
                ctx.end_editing();
                navigate(&back, NavigateOptions::default());
            });
        }
    };

    let on_cancel = {
        let back = back.clone();
        move |_| {
            ctx.end_editing();
            navigate(&back, NavigateOptions::default());
        }
    };

    view! {
        <PageFrame page_id="a007_banking_account--detail" category=PageCategory::Detail>
            <PageHeader title="Create banking account" back_href=back />
            <form class="details-form" on:submit=on_submit novalidate>
                <div class="form-group">
                    <label>"Bank name"</label>
                    <Input value=vm.bank_name placeholder="Vietcombank" />
                    {field_error(vm.errors, "bankName")}
                </div>
                <div class="form-group">
                    <label>"Account number"</label>
                    <Input value=vm.number_account placeholder="0123456789" />
                    {field_error(vm.errors, "numberAccount")}
                </div>
                <div class="form-group">
                    <label>"Bank logo URL"</label>
                    <Input value=vm.bank_logo placeholder="https://..." />
                    {field_error(vm.errors, "bankLogo")}
                </div>
                <div class="details-form__actions">
                    <button type="button" class="button button--secondary" on:click=on_cancel>
                        "Back"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.saving.get()
                    >
                        {move || if vm.saving.get() { "Saving..." } else { "Create" }}
                    </button>
                </div>
            </form>
        </PageFrame>
    }
}
