use crate::shared::api_utils::{delete, fetch_list, post_json};
use contracts::domain::a007_banking_account::aggregate::{BankingAccount, CreateBankingAccountRequest};
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery};

pub async fn fetch_banking_accounts(query: ListQuery) -> Result<ListPage<BankingAccount>, ApiError> {
    fetch_list("bankingaccounts", &query).await
}

pub async fn create_banking_account(
    request: &CreateBankingAccountRequest,
) -> Result<BankingAccount, ApiError> {
    post_json("/api/bankingaccounts", request).await
}

pub async fn delete_banking_account(id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/bankingaccounts/{}", id)).await
}
