//! Координатор загрузки списка.
//!
//! Экран описывает запрос как `Memo<ListQuery>` (фильтр после debounce,
//! сортировка, страница, ключи владельца). Каждый пересчет мемо выдает ровно
//! один запрос к API. Ответы применяются в порядке выдачи запросов: каждый
//! запрос получает [`RequestTicket`] с возрастающим номером, и ответ на
//! устаревший запрос отбрасывается. При ошибке предыдущие строки остаются на
//! экране, а текст ошибки уходит в [`NotificationService`].

use crate::layout::notification_service::NotificationService;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListLifecycle {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Sequence number of one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn seq(&self) -> u64 {
        self.0
    }
}

/// Что произошло с пришедшим ответом
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// Ошибка применена; сообщение нужно показать пользователю
    Failed(String),
    /// Уже выдан более новый запрос: ответ проигнорирован
    Stale,
    /// Экран размонтирован: ответ проигнорирован
    Disposed,
}

#[derive(Clone, Debug)]
pub struct ListState<T> {
    pub lifecycle: ListLifecycle,
    pub items: Vec<T>,
    pub total_count: usize,
    pub last_error: Option<String>,
    issued: u64,
    disposed: bool,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            lifecycle: ListLifecycle::Idle,
            items: Vec::new(),
            total_count: 0,
            last_error: None,
            issued: 0,
            disposed: false,
        }
    }
}

impl<T> ListState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new request: bumps the sequence and switches to `Pending`
    /// before anything is awaited.
    pub fn begin(&mut self) -> RequestTicket {
        self.issued += 1;
        if !self.disposed {
            self.lifecycle = ListLifecycle::Pending;
        }
        RequestTicket(self.issued)
    }

    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        result: Result<ListPage<T>, ApiError>,
    ) -> Resolution {
        if self.disposed {
            return Resolution::Disposed;
        }
        if ticket.0 != self.issued {
            return Resolution::Stale;
        }
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total_count = page.total_count;
                self.last_error = None;
                self.lifecycle = ListLifecycle::Success;
                Resolution::Applied
            }
            Err(err) => {
                let message = err.user_message();
                self.last_error = Some(message.clone());
                self.lifecycle = ListLifecycle::Error;
                Resolution::Failed(message)
            }
        }
    }

    /// Teardown: every later `resolve` is a no-op.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    pub fn is_loading(&self) -> bool {
        self.lifecycle == ListLifecycle::Pending
    }

    /// Пустой результат при непустом поиске: "ничего не найдено"
    pub fn is_not_found(&self, filter: &str) -> bool {
        self.lifecycle == ListLifecycle::Success
            && self.items.is_empty()
            && !filter.trim().is_empty()
    }

    /// Пустой результат без поиска: "записей пока нет"
    pub fn is_empty(&self, filter: &str) -> bool {
        self.lifecycle == ListLifecycle::Success
            && self.items.is_empty()
            && filter.trim().is_empty()
    }
}

/// Handle returned by [`use_list_coordinator`].
pub struct ListCoordinator<T: Send + Sync + 'static> {
    pub state: RwSignal<ListState<T>>,
    reload_trigger: RwSignal<u64>,
}

impl<T: Send + Sync + 'static> Clone for ListCoordinator<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListCoordinator<T> {}

impl<T: Clone + Send + Sync + 'static> ListCoordinator<T> {
    /// Повторить текущий запрос (например, после удаления записи)
    pub fn reload(&self) {
        self.reload_trigger.update(|n| *n += 1);
    }

    pub fn items(&self) -> Signal<Vec<T>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.items.clone()))
    }

    pub fn total_count(&self) -> Signal<usize> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.total_count))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }
}

/// Подключает экран к API: один запрос на каждый новый `ListQuery`.
///
/// Автоматических повторов нет; повторить можно через [`ListCoordinator::reload`]
/// или изменив фильтр/страницу.
pub fn use_list_coordinator<T, F, Fut>(query: Memo<ListQuery>, fetch: F) -> ListCoordinator<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
{
    let state = RwSignal::new(ListState::<T>::new());
    let reload_trigger = RwSignal::new(0u64);
    let notifications = use_context::<NotificationService>();

    Effect::new(move |_| {
        reload_trigger.track();
        let descriptor = query.get();
        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };
        log::debug!("list request #{} issued: {:?}", ticket.seq(), descriptor);

        let request = fetch(descriptor);
        spawn_local(async move {
            let result = request.await;
            match state.try_update(|s| s.resolve(ticket, result)) {
                Some(Resolution::Applied) => {
                    log::debug!("list request #{} applied", ticket.seq());
                }
                Some(Resolution::Failed(message)) => {
                    log::warn!("list request #{} failed: {}", ticket.seq(), message);
                    if let Some(notifications) = notifications {
                        notifications.error(message);
                    }
                }
                Some(Resolution::Stale) => {
                    log::debug!("list request #{} superseded, response dropped", ticket.seq());
                }
                Some(Resolution::Disposed) | None => {}
            }
        });
    });

    on_cleanup(move || {
        state.try_update_untracked(|s| s.dispose());
    });

    ListCoordinator {
        state,
        reload_trigger,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::filter_list;
    use contracts::shared::record::{FieldValue, Record, RecordId};

    #[derive(Debug, Clone, PartialEq)]
    struct Dish {
        id: i64,
        name: String,
    }

    impl Record for Dish {
        fn record_id(&self) -> RecordId {
            RecordId::Int(self.id)
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "name" => Some(self.name.as_str().into()),
                _ => None,
            }
        }
    }

    fn dish(id: i64, name: &str) -> Dish {
        Dish {
            id,
            name: name.to_string(),
        }
    }

    fn page(names: &[&str]) -> ListPage<Dish> {
        let items: Vec<Dish> = names
            .iter()
            .enumerate()
            .map(|(i, n)| dish(i as i64 + 1, n))
            .collect();
        let total = items.len();
        ListPage::new(items, total)
    }

    #[test]
    fn test_begin_sets_pending_synchronously() {
        let mut state = ListState::<Dish>::new();
        assert_eq!(state.lifecycle, ListLifecycle::Idle);
        let ticket = state.begin();
        assert_eq!(state.lifecycle, ListLifecycle::Pending);
        assert!(state.is_loading());
        assert_eq!(ticket.seq(), 1);
    }

    #[test]
    fn test_success_replaces_items_and_total() {
        let mut state = ListState::new();
        let t = state.begin();
        assert_eq!(state.resolve(t, Ok(page(&["Pho", "Bun cha"]))), Resolution::Applied);
        assert_eq!(state.lifecycle, ListLifecycle::Success);
        assert_eq!(state.total_count, 2);

        let t = state.begin();
        assert_eq!(state.resolve(t, Ok(page(&["Com tam"]))), Resolution::Applied);
        assert_eq!(state.items, vec![dish(1, "Com tam")]);
        assert_eq!(state.total_count, 1);
    }

    #[test]
    fn test_out_of_order_response_is_dropped() {
        let mut state = ListState::new();
        let r1 = state.begin();
        let r2 = state.begin();

        assert_eq!(state.resolve(r2, Ok(page(&["from R2"]))), Resolution::Applied);
        assert_eq!(state.resolve(r1, Ok(page(&["from R1", "late"]))), Resolution::Stale);

        assert_eq!(state.items, vec![dish(1, "from R2")]);
        assert_eq!(state.total_count, 1);
        assert_eq!(state.lifecycle, ListLifecycle::Success);
    }

    #[test]
    fn test_superseded_request_is_not_applied_even_if_first() {
        let mut state = ListState::new();
        let r1 = state.begin();
        let _r2 = state.begin();
        assert_eq!(state.resolve(r1, Ok(page(&["old"]))), Resolution::Stale);
        assert!(state.items.is_empty());
        assert_eq!(state.lifecycle, ListLifecycle::Pending);
    }

    #[test]
    fn test_failure_keeps_previous_items() {
        let mut state = ListState::new();
        let t = state.begin();
        state.resolve(t, Ok(page(&["Pho"])));

        let t = state.begin();
        let outcome = state.resolve(t, Err(ApiError::Network("offline".into())));
        assert!(matches!(outcome, Resolution::Failed(ref m) if m.contains("server")));
        assert_eq!(state.lifecycle, ListLifecycle::Error);
        assert_eq!(state.items, vec![dish(1, "Pho")]);
        assert_eq!(state.total_count, 1);
        assert!(state.last_error.is_some());
    }

    #[test]
    fn test_stale_failure_is_silent() {
        let mut state = ListState::<Dish>::new();
        let r1 = state.begin();
        let r2 = state.begin();
        assert_eq!(state.resolve(r1, Err(ApiError::Unauthorized)), Resolution::Stale);
        assert_eq!(state.resolve(r2, Ok(page(&[]))), Resolution::Applied);
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_error_then_new_request_goes_pending() {
        let mut state = ListState::<Dish>::new();
        let t = state.begin();
        state.resolve(t, Err(ApiError::Decode("bad json".into())));
        assert_eq!(state.lifecycle, ListLifecycle::Error);
        let t = state.begin();
        assert_eq!(state.lifecycle, ListLifecycle::Pending);
        state.resolve(t, Ok(page(&["Banh xeo"])));
        assert_eq!(state.last_error, None);
    }

    #[test]
    fn test_dispose_turns_completions_into_noops() {
        let mut state = ListState::new();
        let t = state.begin();
        state.dispose();
        assert_eq!(state.resolve(t, Ok(page(&["late"]))), Resolution::Disposed);
        assert!(state.items.is_empty());
        // Новый запрос после размонтирования тоже ничего не меняет
        let t = state.begin();
        assert_eq!(state.resolve(t, Ok(page(&["later"]))), Resolution::Disposed);
        assert_eq!(state.lifecycle, ListLifecycle::Pending);
    }

    #[test]
    fn test_pizza_search_scenario() {
        // Сервер уже отфильтровал по "pizza" и вернул 3 записи
        let server_page = ListPage::new(
            vec![dish(7, "Pizza Hut"), dish(9, "pizza 4Ps"), dish(12, "The Pizza Company")],
            3,
        );
        let query_filter = "pizza";

        let mut state = ListState::new();
        let t = state.begin();
        assert_eq!(state.resolve(t, Ok(server_page)), Resolution::Applied);
        assert_eq!(state.total_count, 3);
        assert!(!state.is_not_found(query_filter));
        // Каждая строка содержит "pizza" без учета регистра
        assert_eq!(filter_list(state.items.clone(), query_filter).len(), 3);
    }

    #[test]
    fn test_not_found_and_empty_states() {
        let mut state = ListState::<Dish>::new();
        let t = state.begin();
        state.resolve(t, Ok(page(&[])));
        assert!(state.is_not_found("sushi"));
        assert!(!state.is_empty("sushi"));
        assert!(state.is_empty(""));
    }

    mod hook {
        use super::*;
        use crate::shared::test_support::{settle, with_owner};
        use contracts::shared::list::{PageSpec, SortSpec};
        use std::cell::RefCell;
        use std::pin::Pin;
        use std::rc::Rc;
        use tokio::sync::oneshot;

        type Reply = Result<ListPage<Dish>, ApiError>;

        /// Один вызов fetch: запрос, был ли список уже в Pending, отложенный ответ
        struct Call {
            query: ListQuery,
            pending_at_call: bool,
            reply: Option<oneshot::Sender<Reply>>,
        }

        #[derive(Clone, Default)]
        struct FakeApi {
            calls: Rc<RefCell<Vec<Call>>>,
            state: Rc<RefCell<Option<RwSignal<ListState<Dish>>>>>,
        }

        impl FakeApi {
            fn fetch(&self) -> impl Fn(ListQuery) -> Pin<Box<dyn Future<Output = Reply>>> + 'static {
                let api = self.clone();
                move |query| {
                    let state = *api.state.borrow();
                    let pending_at_call = state
                        .and_then(|s| s.try_with_untracked(|s| s.is_loading()))
                        .unwrap_or(false);
                    let (tx, rx) = oneshot::channel();
                    api.calls.borrow_mut().push(Call {
                        query,
                        pending_at_call,
                        reply: Some(tx),
                    });
                    Box::pin(async move {
                        rx.await
                            .unwrap_or_else(|_| Err(ApiError::Network("dropped".into())))
                    })
                }
            }

            fn attach(&self, coordinator: ListCoordinator<Dish>) {
                *self.state.borrow_mut() = Some(coordinator.state);
            }

            fn count(&self) -> usize {
                self.calls.borrow().len()
            }

            fn answer(&self, index: usize, reply: Reply) {
                let sender = self.calls.borrow_mut()[index].reply.take();
                if let Some(sender) = sender {
                    let _ = sender.send(reply);
                }
            }
        }

        fn query(filter: &str) -> ListQuery {
            ListQuery::new(filter, SortSpec::asc("name"), PageSpec::new(0, 5))
        }

        #[tokio::test]
        async fn test_pending_is_set_before_fetch_and_one_request_per_descriptor() {
            with_owner(|_| async {
                let api = FakeApi::default();
                let source = RwSignal::new(query(""));
                let memo = Memo::new(move |_| source.get());
                let coordinator = use_list_coordinator(memo, api.fetch());
                api.attach(coordinator);
                settle().await;

                assert_eq!(api.count(), 1);
                assert!(api.calls.borrow()[0].pending_at_call);
                assert!(coordinator.state.with_untracked(|s| s.is_loading()));

                // Тот же дескриптор: мемо не изменился, запроса нет
                source.set(query(""));
                settle().await;
                assert_eq!(api.count(), 1);

                api.answer(0, Ok(page(&["Pho", "Bun cha"])));
                settle().await;
                coordinator.state.with_untracked(|s| {
                    assert_eq!(s.lifecycle, ListLifecycle::Success);
                    assert_eq!(s.total_count, 2);
                });

                coordinator.reload();
                settle().await;
                assert_eq!(api.count(), 2);
                assert_eq!(api.calls.borrow()[1].query, query(""));
            })
            .await;
        }

        #[tokio::test]
        async fn test_out_of_order_completion_keeps_latest() {
            with_owner(|_| async {
                let api = FakeApi::default();
                let source = RwSignal::new(query(""));
                let memo = Memo::new(move |_| source.get());
                let coordinator = use_list_coordinator(memo, api.fetch());
                settle().await;

                source.set(query("pizza"));
                settle().await;
                assert_eq!(api.count(), 2);
                assert_eq!(api.calls.borrow()[1].query.filter, "pizza");

                api.answer(1, Ok(page(&["Pizza Hut"])));
                settle().await;
                api.answer(0, Ok(page(&["Pho", "Bun cha", "Com tam"])));
                settle().await;

                coordinator.state.with_untracked(|s| {
                    assert_eq!(s.lifecycle, ListLifecycle::Success);
                    assert_eq!(s.items, vec![dish(1, "Pizza Hut")]);
                    assert_eq!(s.total_count, 1);
                });
            })
            .await;
        }

        #[tokio::test]
        async fn test_failed_load_keeps_rows() {
            with_owner(|_| async {
                let api = FakeApi::default();
                let source = RwSignal::new(query(""));
                let memo = Memo::new(move |_| source.get());
                let coordinator = use_list_coordinator(memo, api.fetch());
                settle().await;
                api.answer(0, Ok(page(&["Pho"])));
                settle().await;

                coordinator.reload();
                settle().await;
                api.answer(1, Err(ApiError::Network("offline".into())));
                settle().await;

                coordinator.state.with_untracked(|s| {
                    assert_eq!(s.lifecycle, ListLifecycle::Error);
                    assert_eq!(s.items, vec![dish(1, "Pho")]);
                    assert!(s.last_error.is_some());
                });
            })
            .await;
        }

        #[tokio::test]
        async fn test_teardown_makes_completion_a_noop() {
            with_owner(|owner| async move {
                let api = FakeApi::default();
                let source = RwSignal::new(query(""));
                let memo = Memo::new(move |_| source.get());

                let screen = owner.child();
                let coordinator = screen.with(|| use_list_coordinator(memo, api.fetch()));
                settle().await;
                assert_eq!(api.count(), 1);

                screen.cleanup();
                api.answer(0, Ok(page(&["late"])));
                settle().await;
                assert!(coordinator.state.try_with_untracked(|s| s.items.len()).is_none());

                // Экран размонтирован: новый дескриптор запроса не выдает
                source.set(query("pho"));
                settle().await;
                assert_eq!(api.count(), 1);
            })
            .await;
        }
    }
}
