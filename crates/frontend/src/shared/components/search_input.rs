use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Поле поиска над таблицей.
///
/// Пишет сырое значение в `value`; задержку накладывает экран через
/// [`crate::shared::debounce::use_debounced`], поэтому сюда таймеры не попадают.
#[component]
pub fn SearchInput(
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <Input value=value placeholder=placeholder />
            <Show when=is_filter_active>
                <button
                    class="search-input__clear"
                    title="Clear"
                    on:click=move |_| value.set(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
