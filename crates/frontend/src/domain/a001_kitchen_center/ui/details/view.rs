use super::view_model::KitchenCenterDetailsViewModel;
use crate::layout::global_context::use_global_context;
use crate::layout::notification_service::use_notifications;
use crate::routes::params::{use_id_param, IdParam};
use crate::routes::paths::AppRoute;
use crate::shared::components::{field_error, PageHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::pages::access_denied::NotFoundPage;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

/// `/admin/kitchen-centers/new` и `/admin/kitchen-centers/:id/edit`
#[component]
pub fn KitchenCenterDetails() -> impl IntoView {
    match use_id_param("id") {
        IdParam::Invalid => view! { <NotFoundPage /> }.into_any(),
        id => view! { <KitchenCenterForm id=id.valid() /> }.into_any(),
    }
}

#[component]
fn KitchenCenterForm(id: Option<i64>) -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let vm = KitchenCenterDetailsViewModel::new(id);
    vm.load_if_needed(notifications);

    let back = ctx.back_path(&AppRoute::AdminKitchenCenters.path());
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
        "Create kitchen center"
    } else {
        "Update kitchen center"
    };

    view! {
        <PageFrame page_id="a001_kitchen_center--detail" category=PageCategory::Detail>
            <PageHeader title=title back_href=back />
            {move || vm.loading.get().then(|| view! { <Spinner /> })}
            <form class="details-form" on:submit=on_submit novalidate>
                <div class="form-group">
                    <label>"Kitchen center name"</label>
                    <Input value=vm.name placeholder="Kitchen center name" />
                    {field_error(vm.errors, "name")}
                </div>
                <div class="form-group">
                    <label>"Address"</label>
                    <Input value=vm.address placeholder="Address" />
                    {field_error(vm.errors, "address")}
                </div>
                <div class="form-group">
                    <label>"Logo URL"</label>
                    <Input value=vm.logo placeholder="https://..." />
                    {field_error(vm.errors, "logo")}
                </div>
                <div class="form-group">
                    <label>"Manager email"</label>
                    <Input value=vm.manager_email placeholder="manager@mbkc.vn" />
                    {field_error(vm.errors, "managerEmail")}
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
