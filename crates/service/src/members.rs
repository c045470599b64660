use common::ApiClient;
use models::member::{Member, MemberUpdate, NewMember};
use tracing::instrument;

use crate::errors::ServiceError;

pub async fn get_members(client: &ApiClient, celula_id: i64) -> Result<Vec<Member>, ServiceError> {
    Ok(client.get(&format!("/celulas/{celula_id}/members")).await?)
}

#[instrument(skip(client, input))]
pub async fn add_member(client: &ApiClient, celula_id: i64, input: &NewMember) -> Result<Member, ServiceError> {
    Ok(client.post(&format!("/celulas/{celula_id}/members"), input).await?)
}

/// Update a member. The backend addresses members globally, so the celula
/// id is accepted for symmetry with the other member calls but not used in
/// the path.
#[instrument(skip(client, changes))]
pub async fn update_member(
    client: &ApiClient,
    _celula_id: i64,
    member_id: i64,
    changes: &MemberUpdate,
) -> Result<Member, ServiceError> {
    Ok(client.put(&format!("/members/{member_id}"), changes).await?)
}

/// Deactivate a member. Same flat path as `update_member`.
#[instrument(skip(client))]
pub async fn delete_member(client: &ApiClient, _celula_id: i64, member_id: i64) -> Result<(), ServiceError> {
    Ok(client.delete(&format!("/members/{member_id}")).await?)
}
