use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn css_class(&self) -> &'static str {
        match self {
            Severity::Success => "notification notification--success",
            Severity::Info => "notification notification--info",
            Severity::Warning => "notification notification--warning",
            Severity::Error => "notification notification--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub severity: Severity,
    pub message: String,
}

/// Сервис всплывающих уведомлений.
///
/// Fire-and-forget: `push` ничего не возвращает, уведомление исчезает само
/// через `ttl_ms`.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    ttl_ms: u32,
}

impl NotificationService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            ttl_ms,
        }
    }

    pub fn push(&self, severity: Severity, message: impl Into<String>) {
        let notification = Notification {
            id: Uuid::new_v4(),
            severity,
            message: message.into(),
        };
        let id = notification.id;
        self.items.update(|items| items.push(notification));

        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.ttl_ms).await;
            this.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Severity::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Severity::Error, message);
    }

    pub fn dismiss(&self, id: Uuid) {
        self.items.try_update(|items| items.retain(|n| n.id != id));
    }
}

/// Уведомление из контекста. Паникует, если `App` не предоставил сервис.
pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Стек уведомлений в правом верхнем углу
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="notification-host">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.severity.css_class() role="status">
                            <span class="notification__message">{n.message.clone()}</span>
                            <button
                                class="notification__close"
                                on:click=move |_| service.dismiss(id)
                                title="Close"
                            >
                                {crate::shared::icons::icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
