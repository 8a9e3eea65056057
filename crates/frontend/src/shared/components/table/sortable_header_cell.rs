//! Сортируемая ячейка заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_field="name"
//!     current_sort=Signal::derive(move || sort.get())
//!     on_sort=Callback::new(move |field: String| sort.update(|s| *s = s.toggled(&field)))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list::SortSpec;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_field: String,

    /// Текущая сортировка экрана
    #[prop(into)]
    current_sort: Signal<SortSpec>,

    on_sort: Callback<String>,

    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Выравнивание заголовка (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field;

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(sort_field_for_click.clone())
            >
                {label}
                <span class=move || current_sort.with(|s| get_sort_class(s, &sort_field_for_class))>
                    {move || current_sort.with(|s| get_sort_indicator(s, &sort_field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
