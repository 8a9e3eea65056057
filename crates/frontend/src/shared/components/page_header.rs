use crate::shared::icons::icon;
use leptos::prelude::*;

/// Заголовок страницы: название, подзаголовок и кнопки действий справа.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Ссылка "назад" (для форм создания/редактирования)
    #[prop(optional, into)]
    back_href: Option<String>,

    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                {back_href.map(|href| view! {
                    <a class="page-header__back" href=href title="Back">
                        {icon("chevron-left")}
                    </a>
                })}
                <div class="page-header__text">
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children.map(|c| c())}
            </div>
        </div>
    }
}
