use serde::{Deserialize, Serialize};

/// Celula identifier as the permission endpoint accepts it: either numeric
/// or textual. Sent exactly as given.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CelulaRef {
    Id(i64),
    Key(String),
}

impl From<i64> for CelulaRef {
    fn from(id: i64) -> Self { CelulaRef::Id(id) }
}

impl From<&str> for CelulaRef {
    fn from(key: &str) -> Self { CelulaRef::Key(key.to_string()) }
}

impl From<String> for CelulaRef {
    fn from(key: String) -> Self { CelulaRef::Key(key) }
}

/// Create-or-replace a grant keyed by email.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionUpsert {
    pub email: String,
    pub celula_ids: Vec<CelulaRef>,
    pub is_admin: bool,
    pub can_manage_celulas: bool,
    pub can_manage_reports: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionGrant {
    #[serde(default)]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub celula_ids: Vec<CelulaRef>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub can_manage_celulas: bool,
    #[serde(default)]
    pub can_manage_reports: bool,
}
