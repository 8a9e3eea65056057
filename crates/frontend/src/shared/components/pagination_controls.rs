use crate::shared::icons::icon;
use leptos::prelude::*;

/// Панель пагинации под таблицей списка.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of records on the server
    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(5);
    let is_last = move || current_page.get() + 1 >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-label">"Rows per page:"</span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let val = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(val);
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value={size.to_string()} selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span class="pagination-info">
                {move || {
                    let count = total_count.get();
                    if count == 0 {
                        return "0-0 of 0".to_string();
                    }
                    let size = page_size.get().max(1);
                    let from = current_page.get() * size + 1;
                    let to = (from + size - 1).min(count);
                    format!("{}-{} of {}", from.min(count), to, count)
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(0)
                disabled=move || current_page.get() == 0
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 0 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() == 0
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page + 1 < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=is_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let total = total_pages.get();
                    if total > 0 {
                        on_page_change.run(total - 1);
                    }
                }
                disabled=is_last
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
