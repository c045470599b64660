use common::{ApiClient, ApiRequest};
use models::category::{Category, CategoryUpdate, NewCategory};
use tracing::instrument;

use crate::errors::ServiceError;

const BASE: &str = "/categories";

/// List categories; with `group_id` only that group's.
pub async fn get_all(client: &ApiClient, group_id: Option<i64>) -> Result<Vec<Category>, ServiceError> {
    let req = ApiRequest::get(BASE).query_opt("groupId", group_id);
    Ok(client.send(req).await?)
}

pub async fn get_by_id(client: &ApiClient, id: i64) -> Result<Category, ServiceError> {
    Ok(client.get(&format!("{BASE}/{id}")).await?)
}

#[instrument(skip(client, input), fields(name = %input.name))]
pub async fn create(client: &ApiClient, input: &NewCategory) -> Result<Category, ServiceError> {
    Ok(client.post(BASE, input).await?)
}

#[instrument(skip(client, changes))]
pub async fn update(client: &ApiClient, id: i64, changes: &CategoryUpdate) -> Result<Category, ServiceError> {
    Ok(client.put(&format!("{BASE}/{id}"), changes).await?)
}

#[instrument(skip(client))]
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ServiceError> {
    Ok(client.delete(&format!("{BASE}/{id}")).await?)
}
