//! Верхняя панель: переключатель меню, название, пользователь и выход.

use crate::layout::global_context::use_global_context;
use crate::routes::paths::LOGIN_PATH;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();
    let (auth_state, set_auth_state) = use_auth();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(set_auth_state);
        ctx.end_editing();
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if ctx.left_open.get() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"MBKC"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("users")}
                    <span>
                        {move || auth_state.with(|s| s.user_info.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                    </span>
                    <span class="top-header__role">
                        {move || auth_state.with(|s| s.role().map(|r| r.display_name()).unwrap_or_default())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Logout">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
