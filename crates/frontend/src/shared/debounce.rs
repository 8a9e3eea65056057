//! Debounce для поисковой строки.
//!
//! [`Debouncer`] хранит только последнее значение и номер "поколения";
//! таймер, сработавший для устаревшего поколения, ничего не выдает.
//! [`use_debounced`] связывает его с сигналом Leptos и таймерами `gloo-timers`.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::rc::Rc;

/// Ticket handed out for every pushed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

#[derive(Debug)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
    cancelled: bool,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
            cancelled: false,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Запоминает новое значение; предыдущее ожидающее значение отбрасывается.
    pub fn push(&mut self, value: T) -> DebounceTicket {
        self.generation += 1;
        self.pending = Some(value);
        DebounceTicket(self.generation)
    }

    /// Called when the timer for `ticket` elapses. Yields the value only if no
    /// newer value arrived in between and the debouncer was not cancelled.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if self.cancelled || ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Teardown: drops the pending value, every later `fire` is a no-op.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.pending = None;
    }
}

/// Вызывает `on_emit` со значением `source`, которое не менялось `delay_ms`.
///
/// Каждое изменение `source` перезапускает таймер. Начальное значение не
/// выдается. При размонтировании компонента ожидающее значение отбрасывается.
pub fn use_debounced(source: Signal<String>, delay_ms: u32, on_emit: impl Fn(String) + 'static) {
    use_debounced_with(source, delay_ms, TimeoutFuture::new, on_emit);
}

/// [`use_debounced`] с произвольным таймером: `sleep(ms)` завершается через `ms`.
pub fn use_debounced_with<S, Fut>(
    source: Signal<String>,
    delay_ms: u32,
    sleep: S,
    on_emit: impl Fn(String) + 'static,
) where
    S: Fn(u32) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let debouncer = StoredValue::new(Debouncer::<String>::new());
    let on_emit = Rc::new(on_emit);

    Effect::new(move |prev: Option<()>| {
        let value = source.get();
        if prev.is_none() {
            return;
        }
        let Some(ticket) = debouncer.try_update_value(|d| d.push(value)) else {
            return;
        };
        let delay = sleep(delay_ms);
        let on_emit = on_emit.clone();
        spawn_local(async move {
            delay.await;
            if let Some(value) = debouncer.try_update_value(|d| d.fire(ticket)).flatten() {
                log::debug!("debounced search value: {:?}", value);
                on_emit(value);
            }
        });
    });

    on_cleanup(move || {
        debouncer.try_update_value(|d| d.cancel());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_value_is_emitted() {
        let mut debouncer = Debouncer::new();
        let t1 = debouncer.push("a".to_string());
        let t2 = debouncer.push("ab".to_string());
        let t3 = debouncer.push("abc".to_string());

        // Таймеры срабатывают по очереди; выдает значение только последний
        let emitted: Vec<String> = [t1, t2, t3]
            .into_iter()
            .filter_map(|t| debouncer.fire(t))
            .collect();
        assert_eq!(emitted, vec!["abc".to_string()]);
        // Значение выдано: повтор последнего таймера пуст
        assert_eq!(debouncer.fire(t3), None);
    }

    #[test]
    fn test_stale_timer_after_new_input_is_ignored() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.push(1);
        let second = debouncer.push(2);
        assert_eq!(debouncer.fire(first), None);
        assert_eq!(debouncer.fire(second), Some(2));
        // Повторное срабатывание того же таймера ничего не дает
        assert_eq!(debouncer.fire(second), None);
    }

    #[test]
    fn test_separate_windows_emit_separately() {
        let mut debouncer = Debouncer::new();
        let t = debouncer.push("pho");
        assert_eq!(debouncer.fire(t), Some("pho"));
        let t = debouncer.push("pizza");
        assert_eq!(debouncer.fire(t), Some("pizza"));
    }

    #[test]
    fn test_cancel_suppresses_pending_emission() {
        let mut debouncer = Debouncer::new();
        let t = debouncer.push("abc");
        debouncer.cancel();
        assert_eq!(debouncer.fire(t), None);
        let t = debouncer.push("abcd");
        assert_eq!(debouncer.fire(t), None);
    }

    mod hook {
        use super::super::*;
        use crate::shared::test_support::{settle, sleep, with_owner};
        use std::cell::RefCell;

        fn collect(source: RwSignal<String>, delay_ms: u32) -> Rc<RefCell<Vec<String>>> {
            let emitted = Rc::new(RefCell::new(Vec::new()));
            let sink = emitted.clone();
            use_debounced_with(source.into(), delay_ms, sleep, move |v| {
                sink.borrow_mut().push(v)
            });
            emitted
        }

        #[tokio::test]
        async fn test_typing_burst_emits_last_value_once() {
            with_owner(|_| async {
                let source = RwSignal::new(String::new());
                let emitted = collect(source, 30);
                settle().await;

                for term in ["a", "ab", "abc"] {
                    source.set(term.to_string());
                    settle().await;
                }
                assert!(emitted.borrow().is_empty());

                sleep(90).await;
                settle().await;
                assert_eq!(*emitted.borrow(), vec!["abc".to_string()]);
            })
            .await;
        }

        #[tokio::test]
        async fn test_initial_value_is_not_emitted() {
            with_owner(|_| async {
                let source = RwSignal::new("pho".to_string());
                let emitted = collect(source, 10);
                settle().await;
                sleep(40).await;
                settle().await;
                assert!(emitted.borrow().is_empty());
            })
            .await;
        }

        #[tokio::test]
        async fn test_teardown_drops_pending_value() {
            with_owner(|owner| async move {
                let source = RwSignal::new(String::new());
                let emitted = collect(source, 30);
                settle().await;

                source.set("pizza".to_string());
                settle().await;
                owner.cleanup();

                sleep(90).await;
                settle().await;
                assert!(emitted.borrow().is_empty());
            })
            .await;
        }
    }
}
