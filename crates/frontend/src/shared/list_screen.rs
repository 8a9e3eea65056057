//! Состояние экрана-списка: строка поиска, сортировка, пагинация.
//!
//! Каждый экран создает свое состояние через [`use_list_screen`] и
//! собирает из него `Memo<ListQuery>` для координатора.

use crate::shared::config::{use_config, AppConfig};
use crate::shared::debounce::use_debounced_with;
use crate::shared::pagination::PaginationState;
use contracts::shared::list::{ListQuery, ListScope, SortSpec};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct ListScreenState {
    /// Raw input of the search box
    pub search: RwSignal<String>,
    /// Search term after debounce
    pub filter: RwSignal<String>,
    pub sort: RwSignal<SortSpec>,
    pub pagination: RwSignal<PaginationState>,
}

impl ListScreenState {
    pub fn new(default_sort: SortSpec, page_size: usize) -> Self {
        Self {
            search: RwSignal::new(String::new()),
            filter: RwSignal::new(String::new()),
            sort: RwSignal::new(default_sort),
            pagination: RwSignal::new(PaginationState::new(page_size)),
        }
    }

    /// Снимок запроса; пересчитывается при любом изменении фильтра, сортировки,
    /// страницы или ключей владельца.
    pub fn query(
        &self,
        scope: impl Fn() -> ListScope + Send + Sync + 'static,
    ) -> Memo<ListQuery> {
        let this = *self;
        Memo::new(move |_| {
            ListQuery::new(
                this.filter.get(),
                this.sort.get(),
                this.pagination.with(|p| p.to_page_spec()),
            )
            .with_scope(scope())
        })
    }

    /// Публикует поисковый запрос после debounce.
    ///
    /// Страница сбрасывается в том же синхронном обновлении, поэтому мемо
    /// запроса видит новый фильтр сразу с первой страницей.
    pub fn apply_filter(&self, term: String) {
        if self.filter.with_untracked(|f| *f == term) {
            return;
        }
        self.reset_page();
        self.filter.set(term);
    }

    /// Первая страница (новый поиск, другая вкладка)
    pub fn reset_page(&self) {
        if self.pagination.with_untracked(|p| p.page_index != 0) {
            self.pagination.update(|p| p.set_page(0));
        }
    }
}

pub fn use_list_screen(default_sort: SortSpec) -> ListScreenState {
    list_screen_with(default_sort, &use_config(), TimeoutFuture::new)
}

fn list_screen_with<S, Fut>(default_sort: SortSpec, config: &AppConfig, sleep: S) -> ListScreenState
where
    S: Fn(u32) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let screen = ListScreenState::new(default_sort, config.default_page_size);
    use_debounced_with(
        screen.search.into(),
        config.search_debounce_ms,
        sleep,
        move |term| screen.apply_filter(term),
    );
    screen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{settle, sleep, with_owner};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded(query: Memo<ListQuery>) -> Rc<RefCell<Vec<ListQuery>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        Effect::new(move |_| sink.borrow_mut().push(query.get()));
        seen
    }

    #[tokio::test]
    async fn test_search_change_builds_one_descriptor_on_first_page() {
        with_owner(|_| async {
            let config = AppConfig {
                search_debounce_ms: 20,
                ..AppConfig::default()
            };
            let screen = list_screen_with(SortSpec::asc("name"), &config, sleep);
            let seen = recorded(screen.query(ListScope::default));
            settle().await;

            screen.pagination.update(|p| p.set_page(2));
            settle().await;
            assert_eq!(seen.borrow().len(), 2);

            screen.search.set("pizza".into());
            settle().await;
            sleep(60).await;
            settle().await;

            let seen = seen.borrow();
            assert_eq!(seen.len(), 3, "{:?}", *seen);
            let last = &seen[2];
            assert_eq!(last.filter, "pizza");
            assert_eq!(last.page.page_index, 0);
            // Нет промежуточного запроса "новый фильтр + старая страница"
            assert!(!seen
                .iter()
                .any(|q| q.filter == "pizza" && q.page.page_index != 0));
        })
        .await;
    }

    #[tokio::test]
    async fn test_same_term_does_not_reissue() {
        with_owner(|_| async {
            let screen = ListScreenState::new(SortSpec::asc("name"), 5);
            let seen = recorded(screen.query(ListScope::default));
            settle().await;

            screen.apply_filter("pho".into());
            settle().await;
            screen.apply_filter("pho".into());
            settle().await;
            assert_eq!(seen.borrow().len(), 2);
        })
        .await;
    }

    #[tokio::test]
    async fn test_reset_page_on_first_page_is_noop() {
        with_owner(|_| async {
            let screen = ListScreenState::new(SortSpec::asc("name"), 5);
            let seen = recorded(screen.query(ListScope::default));
            settle().await;
            screen.reset_page();
            settle().await;
            assert_eq!(seen.borrow().len(), 1);

            screen.pagination.update(|p| p.set_page(4));
            screen.reset_page();
            settle().await;
            // Обе записи в одном тике: мемо не изменился
            assert_eq!(seen.borrow().len(), 1);
        })
        .await;
    }
}
