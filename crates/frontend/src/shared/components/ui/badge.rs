use leptos::prelude::*;

/// Цвет бейджа
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    Primary,
    Success,
    Warning,
    Error,
    #[default]
    Neutral,
}

impl BadgeVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "badge--primary",
            BadgeVariant::Success => "badge--success",
            BadgeVariant::Warning => "badge--warning",
            BadgeVariant::Error => "badge--error",
            BadgeVariant::Neutral => "badge--neutral",
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)]
    variant: BadgeVariant,
    children: Children,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <span class=move || format!("badge {} {}", variant.css_class(), additional_class())>
            {children()}
        </span>
    }
}
