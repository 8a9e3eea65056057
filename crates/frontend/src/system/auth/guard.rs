use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::context::current_role;
use crate::routes::paths::{route_access, RouteDecision, LOGIN_PATH, NO_PERMISSION_PATH};

/// Пропускает дочерние элементы только при разрешенном маршруте.
///
/// Решение принимает [`route_access`] по текущему пути; запрет уводит на
/// страницу "нет доступа", отсутствие сессии: на логин. Экран под guard
/// не монтируется, поэтому и запросов к API не делает.
#[component]
pub fn RequireRole(children: ChildrenFn) -> impl IntoView {
    let role = current_role();
    let location = use_location();
    let decision = Memo::new(move |_| location.pathname.with(|path| route_access(role.get(), path)));

    move || match decision.get() {
        RouteDecision::Allow => children().into_any(),
        RouteDecision::RedirectLogin => {
            log::debug!("no session, redirecting to login");
            view! { <Redirect path=LOGIN_PATH /> }.into_any()
        }
        RouteDecision::AccessDenied => {
            log::warn!("access denied: {}", location.pathname.get_untracked());
            view! { <Redirect path=NO_PERMISSION_PATH /> }.into_any()
        }
    }
}
