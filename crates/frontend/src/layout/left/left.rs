use crate::layout::global_context::use_global_context;
use leptos::prelude::*;

/// Колонка бокового меню; сворачивается кнопкой в верхней панели
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <aside
            data-zone="left"
            class="app-sidebar"
            class:app-sidebar--collapsed=move || !ctx.left_open.get()
        >
            {children()}
        </aside>
    }
}
