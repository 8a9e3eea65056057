use super::view_model::StorePartnerDetailsViewModel;
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::routes::params::{use_id_param, IdParam};
use crate::routes::paths::AppRoute;
use crate::shared::components::{field_error, PageHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::use_user_scope;
use crate::system::pages::access_denied::NotFoundPage;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

/// `/brand/store-partners/new` и `/brand/store-partners/:store_id/:partner_id/edit`
#[component]
pub fn StorePartnerDetails() -> impl IntoView {
    match (use_id_param("store_id"), use_id_param("partner_id")) {
        (IdParam::Absent, IdParam::Absent) => view! { <StorePartnerForm key=None /> }.into_any(),
        (IdParam::Valid(store_id), IdParam::Valid(partner_id)) => {
            view! { <StorePartnerForm key=Some((store_id, partner_id)) /> }.into_any()
        }
        _ => view! { <NotFoundPage /> }.into_any(),
    }
}

#[component]
fn StorePartnerForm(key: Option<(i64, i64)>) -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let vm = StorePartnerDetailsViewModel::new(key);
    vm.load(use_user_scope(), notifications);

    let back = ctx.back_path(&AppRoute::BrandStorePartners.path());
    if !ctx.editing.get_untracked() {
        ctx.begin_editing(back.clone());
    }
    on_cleanup(move || ctx.end_editing());

    let go_back = {
        let back = back.clone();
        move || {
            ctx.end_editing();
            navigate(&back, NavigateOptions::default());
        }
    };

    let on_submit = {
        let go_back = go_back.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            vm.save_command(notifications, go_back.clone());
        }
    };

    let title = if vm.is_create() {
        "Create store partner"
    } else {
        "Update store partner"
    };

    let link_fields = move || {
        if !vm.is_create() {
            return view! {
                <div class="form-group">
                    <label>"Store / partner"</label>
                    <div class="form-value">{move || vm.link_name.get()}</div>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="form-group">
                <label>"Store"</label>
                <select
                    class="form-select"
                    on:change=move |ev| vm.store_id.set(event_target_value(&ev))
                    prop:value=move || vm.store_id.get()
                >
                    <option value="">"Select store"</option>
                    <For
                        each=move || vm.stores.get()
                        key=|store| store.store_id
                        children=move |store| {
                            let id = store.store_id.to_string();
                            view! { <option value=id>{store.name}</option> }
                        }
                    />
                </select>
                {field_error(vm.errors, "storeId")}
            </div>
            <div class="form-group">
                <label>"Partner"</label>
                <select
                    class="form-select"
                    on:change=move |ev| vm.partner_id.set(event_target_value(&ev))
                    prop:value=move || vm.partner_id.get()
                >
                    <option value="">"Select partner"</option>
                    <For
                        each=move || vm.partners.get()
                        key=|partner| partner.partner_id
                        children=move |partner| {
                            let id = partner.partner_id.to_string();
                            view! { <option value=id>{partner.name}</option> }
                        }
                    />
                </select>
                {field_error(vm.errors, "partnerId")}
            </div>
        }
        .into_any()
    };

    view! {
        <PageFrame page_id="a009_store_partner--detail" category=PageCategory::Detail>
            <PageHeader title=title back_href=back />
            {move || vm.loading.get().then(|| view! { <Spinner /> })}
            <form class="details-form" on:submit=on_submit novalidate>
                {link_fields}
                <div class="form-group">
                    <label>"Partner account"</label>
                    <Input value=vm.user_name placeholder="Account name on the partner app" />
                    {field_error(vm.errors, "userName")}
                </div>
                <div class="form-group">
                    <label>"Password"</label>
                    <input
                        type="password"
                        class="form-input"
                        placeholder=if vm.is_create() { "Password" } else { "Leave empty to keep" }
                        prop:value=move || vm.password.get()
                        on:input=move |ev| vm.password.set(event_target_value(&ev))
                    />
                    {field_error(vm.errors, "password")}
                </div>
                <div class="form-group">
                    <label>"Commission (%)"</label>
                    <Input value=vm.commission placeholder="20" />
                    {field_error(vm.errors, "commission")}
                </div>
                <div class="details-form__actions">
                    <button type="button" class="button button--secondary" on:click=move |_| go_back()>
                        "Back"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || vm.saving.get()
                    >
                        {move || match (vm.saving.get(), vm.is_create()) {
                            (true, _) => "Saving...",
                            (false, true) => "Create",
                            (false, false) => "Update",
                        }}
                    </button>
                </div>
            </form>
        </PageFrame>
    }
}
