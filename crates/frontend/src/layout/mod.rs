pub mod global_context;
pub mod left;
pub mod notification_service;
pub mod top_header;

use leptos::prelude::*;
use leptos_router::components::Outlet;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |           Content            |
/// +------------------------------------------+
/// ```
///
/// Content is the matched nested route.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    <Outlet />
                </div>
            </div>
        </div>
    }
}
