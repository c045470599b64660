use common::ApiClient;
use models::celula::{Celula, CelulaUpdate, MultiplyCelula, MultiplyOutcome, NewCelula};
use tracing::{info, instrument};

use crate::errors::ServiceError;

const BASE: &str = "/celulas";

pub async fn get_all(client: &ApiClient) -> Result<Vec<Celula>, ServiceError> {
    Ok(client.get(BASE).await?)
}

pub async fn get_by_id(client: &ApiClient, id: i64) -> Result<Celula, ServiceError> {
    Ok(client.get(&format!("{BASE}/{id}")).await?)
}

#[instrument(skip(client, input), fields(name = %input.name))]
pub async fn create(client: &ApiClient, input: &NewCelula) -> Result<Celula, ServiceError> {
    Ok(client.post(BASE, input).await?)
}

#[instrument(skip(client, changes))]
pub async fn update(client: &ApiClient, id: i64, changes: &CelulaUpdate) -> Result<Celula, ServiceError> {
    Ok(client.put(&format!("{BASE}/{id}"), changes).await?)
}

#[instrument(skip(client))]
pub async fn delete(client: &ApiClient, id: i64) -> Result<(), ServiceError> {
    Ok(client.delete(&format!("{BASE}/{id}")).await?)
}

/// Split a celula in two. The backend moves `member_ids` (and the new
/// leader, if any) into the created celula.
#[instrument(skip(client, input), fields(members = input.member_ids.len()))]
pub async fn multiply(client: &ApiClient, id: i64, input: &MultiplyCelula) -> Result<MultiplyOutcome, ServiceError> {
    let outcome: MultiplyOutcome = client.post(&format!("{BASE}/{id}/multiply"), input).await?;
    info!(original = outcome.original.id, created = outcome.created.id, "celula_multiplied");
    Ok(outcome)
}
