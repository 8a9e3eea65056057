use crate::layout::global_context::AppGlobalContext;
use crate::layout::notification_service::{NotificationHost, NotificationService};
use crate::routes::routes::AppRoutes;
use crate::shared::config::AppConfig;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::debug!("app config: {:?}", config);

    // Контексты приложения: настройки, уведомления, состояние форм
    provide_context(NotificationService::new(config.notification_ttl_ms));
    provide_context(config);
    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <AuthProvider>
                <AppRoutes />
            </AuthProvider>
            <NotificationHost />
        </ConfigProvider>
    }
}
