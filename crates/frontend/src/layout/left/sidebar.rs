//! Боковое меню: пункты берутся из [`AppRoute::nav_for`] по роли пользователя.

use crate::layout::global_context::use_global_context;
use crate::routes::paths::AppRoute;
use crate::shared::icons::icon;
use crate::system::auth::context::current_role;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Пункт активен на своем пути и на вложенных (`/admin/brands/new` → "Brands")
fn is_active(item: &AppRoute, pathname: &str) -> bool {
    let path = item.path();
    if item.is_dashboard() {
        pathname.trim_end_matches('/') == path
    } else {
        pathname == path || pathname.starts_with(&format!("{}/", path))
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let role = current_role();
    let location = use_location();

    let items = move || role.get().map(AppRoute::nav_for).unwrap_or_default();

    view! {
        <div class="app-sidebar__content">
            <For
                each=items
                key=|route| *route
                children=move |route| {
                    let href = route.path();
                    view! {
                        <a
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || location.pathname.with(|p| is_active(&route, p))
                            href=href
                            on:click=move |ev| {
                                // Уход с незаконченной формы
                                if ctx.editing.get_untracked() {
                                    let leave = web_sys::window()
                                        .and_then(|w| w.confirm_with_message("Discard unsaved changes?").ok())
                                        .unwrap_or(true);
                                    if !leave {
                                        ev.prevent_default();
                                        return;
                                    }
                                    ctx.end_editing();
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(route.icon())}
                                <span>{route.label()}</span>
                            </div>
                        </a>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_matching() {
        assert!(is_active(&AppRoute::AdminBrands, "/admin/brands"));
        assert!(is_active(&AppRoute::AdminBrands, "/admin/brands/7/edit"));
        assert!(!is_active(&AppRoute::AdminBrands, "/admin/brandsx"));
        assert!(is_active(&AppRoute::AdminDashboard, "/admin/"));
        assert!(!is_active(&AppRoute::AdminDashboard, "/admin/brands"));
    }
}
