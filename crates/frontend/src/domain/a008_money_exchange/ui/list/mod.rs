use crate::domain::a008_money_exchange::api::fetch_money_exchanges;
use crate::shared::components::{status_badge, ColumnDef, ListView, PageHeader, SearchInput};
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_coordinator::use_list_coordinator;
use crate::shared::list_screen::{use_list_screen, ListScreenState};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PageCategory;
use crate::system::auth::context::use_user_scope;
use contracts::domain::a008_money_exchange::aggregate::MoneyExchange;
use contracts::enums::status::ExchangeType;
use contracts::shared::list::{ListScope, SortSpec};
use leptos::prelude::*;

fn exchange_scope(base: &ListScope, exchange_type: Option<ExchangeType>) -> ListScope {
    ListScope {
        exchange_type: exchange_type.map(|t| t.code().to_string()),
        ..base.clone()
    }
}

/// Сумма со знаком: поступления положительные, списания отрицательные
pub fn signed_amount(exchange: &MoneyExchange) -> String {
    match exchange.exchange_type {
        ExchangeType::Receive => format!("+{:.0}", exchange.amount),
        ExchangeType::Send | ExchangeType::Withdraw => format!("-{:.0}", exchange.amount),
    }
}

fn columns() -> Vec<ColumnDef<MoneyExchange>> {
    vec![
        ColumnDef::sortable("Time", "transactionTime", |m: &MoneyExchange| {
            format_datetime(&m.transaction_time).into_any()
        }),
        ColumnDef::sortable("Type", "exchangeType", |m: &MoneyExchange| status_badge(&m.exchange_type)),
        ColumnDef::text("Content", "content"),
        ColumnDef::plain("Sender", |m: &MoneyExchange| {
            m.sender_name.clone().unwrap_or_else(|| "-".into()).into_any()
        }),
        ColumnDef::plain("Receiver", |m: &MoneyExchange| {
            m.receiver_name.clone().unwrap_or_else(|| "-".into()).into_any()
        }),
        ColumnDef::sortable("Amount", "amount", |m: &MoneyExchange| signed_amount(m).into_any())
            .align_right(),
        ColumnDef::sortable("Status", "status", |m: &MoneyExchange| status_badge(&m.status)),
    ]
}

/// Вкладки кошелька: все операции или один тип
const TABS: [(Option<ExchangeType>, &str); 4] = [
    (None, "All"),
    (Some(ExchangeType::Receive), "Receive"),
    (Some(ExchangeType::Send), "Send"),
    (Some(ExchangeType::Withdraw), "Withdraw"),
];

/// Переключает вкладку. Страница сбрасывается в том же синхронном обновлении,
/// поэтому мемо запроса видит новый тип сразу с первой страницей.
fn select_exchange_type(
    screen: &ListScreenState,
    active: RwSignal<Option<ExchangeType>>,
    tab: Option<ExchangeType>,
) {
    if active.get_untracked() == tab {
        return;
    }
    screen.reset_page();
    active.set(tab);
}

/// Движения денег в пределах области пользователя.
/// С `tabs` над таблицей показываются вкладки типов операций.
#[component]
pub fn MoneyExchangeList(
    #[prop(into)]
    title: String,
    page_id: &'static str,
    #[prop(optional)]
    tabs: bool,
) -> impl IntoView {
    let scope = use_user_scope();
    let active = RwSignal::new(None::<ExchangeType>);
    let screen = use_list_screen(SortSpec::desc("transactionTime"));
    let query = screen.query(move || exchange_scope(&scope, active.get()));
    let coordinator = use_list_coordinator(query, fetch_money_exchanges);

    let tab_bar = tabs.then(|| {
        view! {
            <div class="wallet__tabs">
                {TABS
                    .into_iter()
                    .map(|(tab, label)| {
                        view! {
                            <button
                                class="wallet__tab"
                                class:wallet__tab--active=move || active.get() == tab
                                on:click=move |_| select_exchange_type(&screen, active, tab)
                            >
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        }
    });

    view! {
        <PageFrame page_id=page_id category=PageCategory::List>
            <PageHeader title=title>
                <button class="button button--secondary" on:click=move |_| coordinator.reload()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>
            {tab_bar}
            <div class="page__toolbar">
                <SearchInput value=screen.search placeholder="Search content..." />
            </div>
            <ListView
                coordinator=coordinator
                columns=columns()
                sort=screen.sort
                pagination=screen.pagination
                filter=screen.filter
            />
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_support::{settle, with_owner};
    use contracts::enums::status::Status;
    use contracts::shared::list::ListQuery;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn exchange(exchange_type: ExchangeType, amount: f64) -> MoneyExchange {
        MoneyExchange {
            exchange_id: 1,
            amount,
            exchange_type,
            content: "Daily settlement".into(),
            status: Status::Active,
            sender_name: None,
            receiver_name: None,
            transaction_time: "2024-03-15T14:02:26Z".into(),
        }
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(signed_amount(&exchange(ExchangeType::Receive, 150000.0)), "+150000");
        assert_eq!(signed_amount(&exchange(ExchangeType::Withdraw, 20000.0)), "-20000");
    }

    #[test]
    fn test_exchange_scope_keeps_owner() {
        let base = ListScope {
            id_cashier: Some(7),
            ..Default::default()
        };
        let scope = exchange_scope(&base, Some(ExchangeType::Send));
        assert_eq!(scope.id_cashier, Some(7));
        assert_eq!(scope.exchange_type.as_deref(), Some("SEND"));
        assert_eq!(exchange_scope(&base, None).exchange_type, None);
    }

    #[tokio::test]
    async fn test_tab_change_builds_one_descriptor_on_first_page() {
        with_owner(|_| async {
            let screen = ListScreenState::new(SortSpec::desc("transactionTime"), 5);
            let active = RwSignal::new(None::<ExchangeType>);
            let base = ListScope::default();
            let query = screen.query(move || exchange_scope(&base, active.get()));

            let seen: Rc<RefCell<Vec<ListQuery>>> = Rc::new(RefCell::new(Vec::new()));
            let sink = seen.clone();
            Effect::new(move |_| sink.borrow_mut().push(query.get()));
            settle().await;

            screen.pagination.update(|p| p.set_page(3));
            settle().await;
            assert_eq!(seen.borrow().len(), 2);

            select_exchange_type(&screen, active, Some(ExchangeType::Withdraw));
            settle().await;

            let seen = seen.borrow();
            assert_eq!(seen.len(), 3, "{:?}", *seen);
            assert_eq!(seen[2].scope.exchange_type.as_deref(), Some("WITHDRAW"));
            assert_eq!(seen[2].page.page_index, 0);
            // Нет запроса "новый тип + старая страница"
            assert!(!seen
                .iter()
                .any(|q| q.scope.exchange_type.is_some() && q.page.page_index != 0));
        })
        .await;
    }

    #[tokio::test]
    async fn test_same_tab_keeps_page() {
        with_owner(|_| async {
            let screen = ListScreenState::new(SortSpec::desc("transactionTime"), 5);
            let active = RwSignal::new(Some(ExchangeType::Send));
            screen.pagination.update(|p| p.set_page(2));

            select_exchange_type(&screen, active, Some(ExchangeType::Send));
            assert_eq!(screen.pagination.get_untracked().page_index, 2);
        })
        .await;
    }
}
