use crate::shared::validation::FieldErrors;
use leptos::prelude::*;

/// Сообщение валидации под полем формы (первое для поля)
pub fn field_error(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.first(field)
                .map(|m| view! { <div class="form-group__error">{m.to_string()}</div> })
        })
    }
}
