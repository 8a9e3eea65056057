use super::view_model::CashierDetailsViewModel;
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::routes::params::{use_id_param, IdParam};
use crate::routes::paths::AppRoute;
use crate::shared::components::{field_error, PageHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::pages::access_denied::NotFoundPage;
use contracts::enums::gender::Gender;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

/// `/kitchen-center/cashiers/new` и `/kitchen-center/cashiers/:id/edit`
#[component]
pub fn CashierDetails() -> impl IntoView {
    match use_id_param("id") {
        IdParam::Invalid => view! { <NotFoundPage /> }.into_any(),
        id => view! { <CashierForm id=id.valid() /> }.into_any(),
    }
}

#[component]
fn CashierForm(id: Option<i64>) -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let vm = CashierDetailsViewModel::new(id);
    vm.load_if_needed(notifications);

    let back = ctx.back_path(&AppRoute::KitchenCenterCashiers.path());
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

    let title = if vm.is_create() { "Create cashier" } else { "Update cashier" };

    view! {
        <PageFrame page_id="a010_cashier--detail" category=PageCategory::Detail>
            <PageHeader title=title back_href=back />
            {move || vm.loading.get().then(|| view! { <Spinner /> })}
            <form class="details-form" on:submit=on_submit novalidate>
                <div class="form-group">
                    <label>"Full name"</label>
                    <Input value=vm.full_name placeholder="Full name" />
                    {field_error(vm.errors, "fullName")}
                </div>
                <div class="form-group">
                    <label>"Email"</label>
                    {if vm.is_create() {
                        view! { <Input value=vm.email placeholder="cashier@mbkc.vn" /> }.into_any()
                    } else {
                        view! { <div class="form-value">{move || vm.email.get()}</div> }.into_any()
                    }}
                    {field_error(vm.errors, "email")}
                </div>
                <div class="form-group">
                    <label>"Gender"</label>
                    <select
                        class="form-select"
                        on:change=move |ev| vm.gender.set(event_target_value(&ev))
                        prop:value=move || vm.gender.get()
                    >
                        {Gender::all()
                            .into_iter()
                            .map(|g| {
                                view! {
                                    <option value=g.code() selected=move || vm.gender.get() == g.code()>
                                        {g.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                    {field_error(vm.errors, "gender")}
                </div>
                <div class="form-group">
                    <label>"Date of birth"</label>
                    <input
                        type="date"
                        class="form-input"
                        on:input=move |ev| vm.date_of_birth.set(event_target_value(&ev))
                        prop:value=move || vm.date_of_birth.get()
                    />
                    {field_error(vm.errors, "dateOfBirth")}
                </div>
                <div class="form-group">
                    <label>"Citizen number"</label>
                    <Input value=vm.citizen_number placeholder="079200001234" />
                    {field_error(vm.errors, "citizenNumber")}
                </div>
                <div class="form-group">
                    <label>"Avatar URL"</label>
                    <Input value=vm.avatar placeholder="https://..." />
                    {field_error(vm.errors, "avatar")}
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
