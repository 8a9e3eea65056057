use crate::domain::a008_money_exchange::ui::list::MoneyExchangeList;
use leptos::prelude::*;

/// Кошелек кухонного центра: движения денег с переключением типа
#[component]
pub fn WalletPage() -> impl IntoView {
    view! {
        <div class="wallet">
            <MoneyExchangeList title="Wallet" page_id="a008_money_exchange--list" tabs=true />
        </div>
    }
}
