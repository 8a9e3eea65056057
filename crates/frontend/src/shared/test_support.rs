//! Запуск реактивных тестов: tokio `LocalSet` как исполнитель Leptos.

use any_spawner::Executor;
use leptos::prelude::*;
use std::future::Future;
use std::time::Duration;
use tokio::task::LocalSet;

/// Выполняет `body` под новым `Owner` на однопоточном исполнителе.
pub async fn with_owner<F, Fut>(body: F)
where
    F: FnOnce(Owner) -> Fut,
    Fut: Future<Output = ()>,
{
    let _ = Executor::init_tokio();
    let owner = Owner::new();
    owner.set();
    LocalSet::new().run_until(body(owner)).await;
}

/// Дает отработать эффектам и задачам `spawn_local`
pub async fn settle() {
    for _ in 0..8 {
        Executor::tick().await;
    }
}

pub async fn sleep(ms: u32) {
    tokio::time::sleep(Duration::from_millis(u64::from(ms))).await;
}
