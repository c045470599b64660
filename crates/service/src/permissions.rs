use common::ApiClient;
use models::permission::{PermissionGrant, PermissionUpsert};
use tracing::instrument;

use crate::errors::ServiceError;

/// Create or replace the grant for `input.email`. Celula identifiers are
/// transmitted exactly as given.
#[instrument(skip(client, input), fields(email = %input.email, celulas = input.celula_ids.len()))]
pub async fn upsert(client: &ApiClient, input: &PermissionUpsert) -> Result<PermissionGrant, ServiceError> {
    Ok(client.post("/permissions", input).await?)
}
