//! Таблица списка: строки, скелетон во время загрузки, заглушки
//! "ничего не найдено" / "записей нет" и панель пагинации.
//!
//! Экран передает колонки и свое состояние (координатор, сортировку,
//! пагинацию, фильтр после debounce); сам `ListView` запросов не делает.

use super::pagination_controls::PaginationControls;
use super::table::SortableHeaderCell;
use crate::shared::config::use_config;
use crate::shared::list_coordinator::{ListCoordinator, ListLifecycle};
use crate::shared::list_utils::{highlight_matches, stable_sort};
use crate::shared::pagination::PaginationState;
use contracts::shared::list::SortSpec;
use contracts::shared::record::Record;
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

type CellRenderer<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

enum CellKind<T> {
    /// Текст поля с подсветкой совпадений с фильтром
    Highlighted(&'static str),
    Custom(CellRenderer<T>),
}

impl<T> Clone for CellKind<T> {
    fn clone(&self) -> Self {
        match self {
            CellKind::Highlighted(field) => CellKind::Highlighted(field),
            CellKind::Custom(render) => CellKind::Custom(render.clone()),
        }
    }
}

/// Колонка таблицы списка
pub struct ColumnDef<T> {
    pub label: &'static str,
    pub sort_field: Option<&'static str>,
    pub align: &'static str,
    kind: CellKind<T>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            sort_field: self.sort_field,
            align: self.align,
            kind: self.kind.clone(),
        }
    }
}

impl<T: Record> ColumnDef<T> {
    /// Sortable text column; matches of the search term are highlighted.
    pub fn text(label: &'static str, field: &'static str) -> Self {
        Self {
            label,
            sort_field: Some(field),
            align: "left",
            kind: CellKind::Highlighted(field),
        }
    }

    pub fn sortable(
        label: &'static str,
        field: &'static str,
        render: impl Fn(&T) -> AnyView + Send + Sync + 'static,
    ) -> Self {
        Self {
            label,
            sort_field: Some(field),
            align: "left",
            kind: CellKind::Custom(Arc::new(render)),
        }
    }

    pub fn plain(label: &'static str, render: impl Fn(&T) -> AnyView + Send + Sync + 'static) -> Self {
        Self {
            label,
            sort_field: None,
            align: "left",
            kind: CellKind::Custom(Arc::new(render)),
        }
    }

    pub fn align_right(mut self) -> Self {
        self.align = "right";
        self
    }

    fn render(&self, item: &T, filter: &str) -> AnyView {
        match &self.kind {
            CellKind::Highlighted(field) => {
                let text = item.field(field).map(|v| v.to_string()).unwrap_or_default();
                highlight_matches(&text, filter)
            }
            CellKind::Custom(render) => render(item),
        }
    }
}

/// Порядковый номер строки с учетом страницы (колонка "No.")
pub fn row_number(pagination: &PaginationState, index_on_page: usize) -> usize {
    pagination.page_index * pagination.page_size + index_on_page + 1
}

/// Сколько строк-скелетонов показать во время загрузки
pub fn skeleton_row_count(pagination: &PaginationState, loaded: usize) -> usize {
    if loaded == 0 {
        pagination.page_size
    } else {
        loaded.min(pagination.page_size)
    }
}

#[component]
pub fn ListView<T>(
    coordinator: ListCoordinator<T>,
    columns: Vec<ColumnDef<T>>,
    sort: RwSignal<SortSpec>,
    pagination: RwSignal<PaginationState>,
    /// Filter term after debounce (the one actually sent to the API)
    #[prop(into)]
    filter: Signal<String>,
) -> impl IntoView
where
    T: Record + Clone + Send + Sync + 'static,
{
    let config = use_config();
    let normalize = config.clone();
    let state = coordinator.state;
    let column_count = columns.len() + 1;
    let columns = Arc::new(columns);

    // Результат сократился (например, после удаления): возвращаемся на последнюю страницу
    Effect::new(move |_| {
        let total = state.with(|s| s.total_count);
        if !state.with_untracked(|s| s.lifecycle == ListLifecycle::Success) {
            return;
        }
        let mut clamped = pagination.get_untracked();
        if clamped.clamp_to(total) {
            log::debug!("page index clamped to {} (total {})", clamped.page_index, total);
            pagination.set(clamped);
        }
    });

    let on_sort = Callback::new(move |field: String| {
        sort.update(|s| *s = s.toggled(&field));
    });

    let header_columns = columns.clone();
    let body_columns = columns;

    let body = move || {
        let page = pagination.get();
        let term = filter.get();
        let current_sort = sort.get();
        state.with(|s| {
            if s.is_loading() {
                return (0..skeleton_row_count(&page, s.items.len()))
                    .map(|_| {
                        view! {
                            <TableRow class="table__row--skeleton">
                                {(0..column_count)
                                    .map(|_| view! { <TableCell><div class="skeleton-line"></div></TableCell> })
                                    .collect_view()}
                            </TableRow>
                        }
                    })
                    .collect_view()
                    .into_any();
            }
            if s.is_not_found(&term) {
                let term = term.trim().to_string();
                return view! {
                    <TableRow>
                        <TableCell attr:colspan=column_count.to_string()>
                            <div class="list-placeholder">
                                <h4>"Not found"</h4>
                                <p>
                                    "No results found for "<strong>{format!("\"{}\"", term)}</strong>
                                    ". Try checking for typos or using complete words."
                                </p>
                            </div>
                        </TableCell>
                    </TableRow>
                }
                .into_any();
            }
            if s.is_empty(&term) {
                return view! {
                    <TableRow>
                        <TableCell attr:colspan=column_count.to_string()>
                            <div class="list-placeholder">"No data"</div>
                        </TableCell>
                    </TableRow>
                }
                .into_any();
            }

            let rows = stable_sort(s.items.clone(), &current_sort);
            let filler = page.empty_row_count(s.total_count);
            let row_views = rows
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let cells = body_columns
                        .iter()
                        .map(|col| {
                            let style = if col.align == "right" { "text-align: right;" } else { "" };
                            let content = col.render(item, &term);
                            view! {
                                <TableCell attr:style=style>
                                    <TableCellLayout truncate=true>{content}</TableCellLayout>
                                </TableCell>
                            }
                        })
                        .collect_view();
                    view! {
                        <TableRow>
                            <TableCell>{row_number(&page, i)}</TableCell>
                            {cells}
                        </TableRow>
                    }
                })
                .collect_view();
            let filler_views = (0..filler)
                .map(|_| {
                    view! {
                        <TableRow class="table__row--empty">
                            <TableCell attr:colspan=column_count.to_string()>""</TableCell>
                        </TableRow>
                    }
                })
                .collect_view();
            view! { {row_views} {filler_views} }.into_any()
        })
    };

    let total_count = coordinator.total_count();

    view! {
        <div class="list-view">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=60.0>"No."</TableHeaderCell>
                        {header_columns
                            .iter()
                            .map(|col| match col.sort_field {
                                Some(field) => view! {
                                    <SortableHeaderCell
                                        label=col.label
                                        sort_field=field
                                        current_sort=sort
                                        on_sort=on_sort
                                        align=col.align
                                    />
                                }
                                .into_any(),
                                None => {
                                    let label = col.label;
                                    view! {
                                        <TableHeaderCell>{label}</TableHeaderCell>
                                    }
                                }
                                .into_any(),
                            })
                            .collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>{body}</TableBody>
            </Table>
            <PaginationControls
                current_page=Signal::derive(move || pagination.with(|p| p.page_index))
                total_pages=Signal::derive(move || {
                    let total = total_count.get();
                    pagination.with(|p| p.total_pages(total))
                })
                total_count=total_count
                page_size=Signal::derive(move || pagination.with(|p| p.page_size))
                on_page_change=Callback::new(move |index: usize| pagination.update(|p| p.set_page(index)))
                on_page_size_change=Callback::new(move |size: usize| {
                    let size = normalize.normalize_page_size(size);
                    pagination.update(|p| p.set_page_size(size))
                })
                page_size_options=config.page_size_options.clone()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_number_continues_across_pages() {
        let mut page = PaginationState::new(5);
        assert_eq!(row_number(&page, 0), 1);
        page.set_page(2);
        assert_eq!(row_number(&page, 4), 15);
    }

    #[test]
    fn test_skeleton_rows() {
        let page = PaginationState::new(10);
        assert_eq!(skeleton_row_count(&page, 0), 10);
        assert_eq!(skeleton_row_count(&page, 3), 3);
        assert_eq!(skeleton_row_count(&page, 40), 10);
    }
}
