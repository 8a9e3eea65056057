use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка сводки на домашней странице роли: иконка, подпись, число.
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None while loading or after an error
    #[prop(into)]
    value: Signal<Option<usize>>,
    /// Куда ведет клик по карточке
    #[prop(optional, into)]
    href: Option<String>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    };

    view! {
        <a class="stat-card" href=href.unwrap_or_default()>
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </a>
    }
}
