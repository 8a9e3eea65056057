//! Диалог привязки категорий допов к обычной категории.
//!
//! Список допов загружается целиком один раз при открытии; поиск, сортировка
//! и страницы считаются локально над загруженным списком.

use crate::domain::a004_category::api::{add_extra_categories, fetch_extra_categories};
use crate::layout::notification_service::use_notifications;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::use_config;
use crate::shared::list_utils::{filter_list, highlight_matches, stable_sort};
use crate::shared::pagination::PaginationState;
use crate::system::auth::context::use_user_scope;
use contracts::domain::a004_category::aggregate::{AddExtraCategoriesRequest, Category};
use contracts::shared::list::SortSpec;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Видимая страница локального списка
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraPage {
    pub rows: Vec<Category>,
    /// Пустые строки, добивающие последнюю страницу до полной высоты
    pub filler: usize,
    /// Совпавших с поиском записей
    pub matched: usize,
}

/// Фильтр, затем устойчивая сортировка, затем окно текущей страницы.
/// Уже привязанная к категории запись (`exclude`) в список не попадает.
pub fn visible_extras(
    items: &[Category],
    exclude: i64,
    filter: &str,
    sort: &SortSpec,
    pagination: &PaginationState,
) -> ExtraPage {
    let candidates: Vec<Category> =
        items.iter().filter(|c| c.category_id != exclude).cloned().collect();
    let matched = stable_sort(filter_list(candidates, filter), sort);
    let total = matched.len();
    let rows = matched[pagination.window(total)].to_vec();
    ExtraPage {
        rows,
        filler: pagination.empty_row_count(total),
        matched: total,
    }
}

/// Отмечает или снимает отметку; порядок отметок сохраняется
pub fn toggle_selected(selected: &mut Vec<i64>, id: i64) {
    if let Some(pos) = selected.iter().position(|s| *s == id) {
        selected.remove(pos);
    } else {
        selected.push(id);
    }
}

#[component]
pub fn AddExtraDialog(open: RwSignal<bool>, category: RwSignal<Option<Category>>) -> impl IntoView {
    let notifications = use_notifications();
    let config = use_config();
    let scope = use_user_scope();

    let extras = RwSignal::new(Vec::<Category>::new());
    let loading = RwSignal::new(false);
    let selected = RwSignal::new(Vec::<i64>::new());
    let search = RwSignal::new(String::new());
    let pagination = RwSignal::new(PaginationState::new(config.default_page_size));
    let sort = SortSpec::asc("name");

    // Каждое открытие начинает с чистого выбора и свежего списка
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        selected.set(Vec::new());
        search.set(String::new());
        pagination.update(|p| p.set_page(0));
        loading.set(true);
        let scope = scope.clone();
        spawn_local(async move {
            match fetch_extra_categories(scope).await {
                Ok(items) => {
                    extras.try_set(items);
                }
                Err(e) => notifications.error(e.user_message()),
            }
            loading.try_set(false);
        });
    });

    let exclude = move || category.with(|c| c.as_ref().map(|c| c.category_id).unwrap_or(0));
    let page = Memo::new(move |_| {
        let filter = search.get();
        let state = pagination.get();
        extras.with(|items| visible_extras(items, exclude(), &filter, &sort, &state))
    });

    let on_submit = move |_| {
        let Some(target) = category.get_untracked() else {
            return;
        };
        let request = AddExtraCategoriesRequest {
            extra_category_ids: selected.get_untracked(),
        };
        if request.extra_category_ids.is_empty() {
            notifications.error("Select at least one extra category");
            return;
        }
        spawn_local(async move {
            match add_extra_categories(target.category_id, &request).await {
                Ok(()) => {
                    log::info!(
                        "{} extra categories added to category {}",
                        request.extra_category_ids.len(),
                        target.category_id
                    );
                    notifications.success(format!("Extra categories added to \"{}\"", target.name));
                    open.try_set(false);
                }
                Err(e) => notifications.error(e.user_message()),
            }
        });
    };

    let page_size_options = config.page_size_options.clone();
    let on_page_change = Callback::new(move |index: usize| pagination.update(|p| p.set_page(index)));
    let on_page_size_change = Callback::new(move |size: usize| {
        let size = config.normalize_page_size(size);
        pagination.update(|p| p.set_page_size(size))
    });

    let rows = move || {
        let filter = search.get();
        let current = page.get();
        let filled = current.rows.into_iter().map(|c| {
            let id = c.category_id;
            let code = c.code.clone();
            let name = highlight_matches(&c.name, &filter);
            view! {
                <TableRow>
                    <TableCell>
                        <input
                            type="checkbox"
                            prop:checked=move || selected.with(|s| s.contains(&id))
                            on:change=move |_| selected.update(|s| toggle_selected(s, id))
                        />
                    </TableCell>
                    <TableCell>{code}</TableCell>
                    <TableCell>{name}</TableCell>
                </TableRow>
            }
            .into_any()
        });
        let filler = (0..current.filler).map(|_| {
            view! {
                <TableRow class="table__row--empty">
                    <TableCell attr:colspan="3">""</TableCell>
                </TableRow>
            }
            .into_any()
        });
        filled.chain(filler).collect_view()
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || {
                            category
                                .with(|c| c.as_ref().map(|c| format!("Add extra categories to \"{}\"", c.name)))
                                .unwrap_or_default()
                        }}
                    </DialogTitle>
                    <DialogContent>
                        <input
                            class="form__input"
                            type="search"
                            placeholder="Search extra category..."
                            prop:value=move || search.get()
                            on:input=move |ev| {
                                search.set(event_target_value(&ev));
                                pagination.update(|p| p.set_page(0));
                            }
                        />
                        <Show when=move || !loading.get() fallback=|| view! { <Spinner /> }>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>""</TableHeaderCell>
                                        <TableHeaderCell>"Code"</TableHeaderCell>
                                        <TableHeaderCell>"Name"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>{rows}</TableBody>
                            </Table>
                            <PaginationControls
                                current_page=Signal::derive(move || pagination.with(|p| p.page_index))
                                total_pages=Signal::derive(move || {
                                    let matched = page.with(|p| p.matched);
                                    pagination.with(|p| p.total_pages(matched))
                                })
                                total_count=Signal::derive(move || page.with(|p| p.matched))
                                page_size=Signal::derive(move || pagination.with(|p| p.page_size))
                                on_page_change=on_page_change
                                on_page_size_change=on_page_size_change
                                page_size_options=page_size_options.clone()
                            />
                        </Show>
                    </DialogContent>
                    <DialogActions>
                        <button class="button button--secondary" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button
                            class="button button--primary"
                            disabled=move || selected.with(|s| s.is_empty())
                            on:click=on_submit
                        >
                            {move || format!("Add ({})", selected.with(|s| s.len()))}
                        </button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extra(id: i64, name: &str) -> Category {
        serde_json::from_value(serde_json::json!({
            "categoryId": id,
            "code": format!("EX{}", id),
            "name": name,
            "type": "EXTRA",
            "displayOrder": id,
            "status": "ACTIVE",
        }))
        .unwrap()
    }

    fn extras() -> Vec<Category> {
        vec![
            extra(1, "Topping"),
            extra(2, "Sauce"),
            extra(3, "Cheese topping"),
            extra(4, "Drinks"),
            extra(5, "Rice"),
        ]
    }

    fn names(page: &ExtraPage) -> Vec<&str> {
        page.rows.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_filter_then_sort() {
        let page = visible_extras(
            &extras(),
            0,
            "TOPPING",
            &SortSpec::asc("name"),
            &PaginationState::new(10),
        );
        assert_eq!(names(&page), vec!["Cheese topping", "Topping"]);
        assert_eq!(page.matched, 2);
        assert_eq!(page.filler, 0);
    }

    #[test]
    fn test_second_page_is_padded() {
        let mut state = PaginationState::new(3);
        state.set_page(1);
        let page = visible_extras(&extras(), 0, "", &SortSpec::asc("name"), &state);
        assert_eq!(names(&page), vec!["Topping"]);
        assert_eq!(page.filler, 2);
        assert_eq!(page.matched, 5);
    }

    #[test]
    fn test_target_category_is_excluded() {
        let page = visible_extras(&extras(), 2, "", &SortSpec::asc("name"), &PaginationState::new(10));
        assert_eq!(page.matched, 4);
        assert!(!names(&page).contains(&"Sauce"));
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let mut state = PaginationState::new(10);
        state.set_page(3);
        let page = visible_extras(&extras(), 0, "", &SortSpec::asc("name"), &state);
        assert!(page.rows.is_empty());
    }

    #[test]
    fn test_toggle_selected() {
        let mut selected = vec![];
        toggle_selected(&mut selected, 4);
        toggle_selected(&mut selected, 2);
        assert_eq!(selected, vec![4, 2]);
        toggle_selected(&mut selected, 4);
        assert_eq!(selected, vec![2]);
    }
}
