use crate::shared::api_utils::fetch_list;
use contracts::domain::a008_money_exchange::aggregate::MoneyExchange;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery};

pub async fn fetch_money_exchanges(query: ListQuery) -> Result<ListPage<MoneyExchange>, ApiError> {
    fetch_list("moneyexchanges", &query).await
}
