use leptos::prelude::*;

use crate::routes::paths::AppRoute;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::current_role;

/// Страница "нет доступа" (сюда ведет guard при чужой роли)
#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    let role = current_role();
    let home = move || match role.get() {
        Some(role) => AppRoute::home_for(role).path(),
        None => AppRoute::Login.path(),
    };

    view! {
        <PageFrame page_id="no_permission--system" category=PageCategory::System>
            <div class="access-denied">
                <h1>"No permission"</h1>
                <p>"The page you're trying to access has restricted access. Please refer to your system administrator."</p>
                <a class="button button--primary" href=home>"Go to home"</a>
            </div>
        </PageFrame>
    }
}

/// Неизвестный адрес
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not_found--system" category=PageCategory::System>
            <div class="access-denied">
                <h1>"Page not found"</h1>
                <a class="button button--primary" href="/">"Go to home"</a>
            </div>
        </PageFrame>
    }
}
