use crate::shared::api_utils::{fetch_list, options_query, post_command};
use contracts::domain::a004_category::aggregate::{AddExtraCategoriesRequest, Category};
use contracts::enums::status::CategoryType;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery, ListScope};

pub async fn fetch_categories(query: ListQuery) -> Result<ListPage<Category>, ApiError> {
    fetch_list("categories", &query).await
}

/// Все категории допов бренда одним запросом (диалог фильтрует их локально)
pub async fn fetch_extra_categories(scope: ListScope) -> Result<Vec<Category>, ApiError> {
    let scope = ListScope {
        category_type: Some(CategoryType::Extra.code().to_string()),
        ..scope
    };
    let page: ListPage<Category> = fetch_list("categories", &options_query("name", scope)).await?;
    Ok(page.items)
}

pub async fn add_extra_categories(
    category_id: i64,
    request: &AddExtraCategoriesRequest,
) -> Result<(), ApiError> {
    post_command(&format!("/api/categories/{}/extra-categories", category_id), request).await
}
