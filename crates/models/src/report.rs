use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::member::Member;

/// Attendance for one meeting: every member lands in exactly one list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(default)]
    pub id: Option<i64>,
    pub date: NaiveDate,
    #[serde(default)]
    pub present: Vec<Member>,
    #[serde(default)]
    pub absent: Vec<Member>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    pub date: NaiveDate,
    pub present_member_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceSummary {
    pub date: NaiveDate,
    pub present_count: u32,
    #[serde(default)]
    pub absent_count: u32,
}

/// Everything a monthly report screen needs for one celula.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReports {
    pub year: i32,
    pub month: u32,
    #[serde(default)]
    pub members: Vec<Member>,
    #[serde(default)]
    pub reports: Vec<Report>,
}
