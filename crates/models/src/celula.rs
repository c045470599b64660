use serde::{Deserialize, Serialize};

/// A cell group. Nested under a discipulado on the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Celula {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub leader_user_id: Option<i64>,
    #[serde(default)]
    pub discipulado_id: Option<i64>,
    #[serde(default)]
    pub weekday: Option<u8>,
    #[serde(default)]
    pub meeting_time: Option<String>,
}

impl Celula {
    pub fn is_led_by(&self, user_id: i64) -> bool {
        self.leader_user_id == Some(user_id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCelula {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipulado_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_time: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelulaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leader_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipulado_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_time: Option<String>,
}

/// Split request: the listed members move to a new celula under a new leader.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplyCelula {
    pub new_celula_name: String,
    pub member_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_leader_user_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_leader_user_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplyOutcome {
    pub original: Celula,
    pub created: Celula,
}
