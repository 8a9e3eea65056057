use super::view_model::BrandDetailsViewModel;
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

/// Форма бренда: `/admin/brands/new` и `/admin/brands/:id/edit`.
/// Нечисловой `:id` показывает "не найдено", а не форму создания.
#[component]
pub fn BrandDetails() -> impl IntoView {
    match use_id_param("id") {
        IdParam::Invalid => view! { <NotFoundPage /> }.into_any(),
        id => view! { <BrandForm id=id.valid() /> }.into_any(),
    }
}

#[component]
fn BrandForm(id: Option<i64>) -> impl IntoView {
    let ctx = use_global_context();
    let notifications = use_notifications();
    let navigate = use_navigate();

    let vm = BrandDetailsViewModel::new(id);
    vm.load_if_needed(notifications);

    let back = ctx.back_path(&AppRoute::AdminBrands.path());
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

    let title = if vm.is_create() { "Create brand" } else { "Update brand" };

    view! {
        <PageFrame page_id="a002_brand--detail" category=PageCategory::Detail>
            <PageHeader title=title back_href=back />
            {move || vm.loading.get().then(|| view! { <Spinner /> })}
            <form class="details-form" on:submit=on_submit novalidate>
                <div class="form-group">
                    <label>"Brand name"</label>
                    <Input value=vm.name placeholder="Brand name" />
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
                    <Input value=vm.manager_email placeholder="manager@brand.vn" />
                    {field_error(vm.errors, "managerEmail")}
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
