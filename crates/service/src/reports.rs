use common::ApiClient;
use models::report::{MonthlyReports, NewReport, PresenceSummary, Report};
use tracing::instrument;

use crate::errors::ServiceError;

/// Submit attendance for one meeting.
#[instrument(skip(client, input), fields(date = %input.date, present = input.present_member_ids.len()))]
pub async fn create_report(client: &ApiClient, celula_id: i64, input: &NewReport) -> Result<Report, ServiceError> {
    Ok(client.post(&format!("/celulas/{celula_id}/reports"), input).await?)
}

/// Recent presence totals, newest first as the backend sends them.
pub async fn get_presences(client: &ApiClient, celula_id: i64) -> Result<Vec<PresenceSummary>, ServiceError> {
    Ok(client.get(&format!("/celulas/{celula_id}/reports/presences")).await?)
}

/// Reports of one month. Year and month are separate path segments.
pub async fn get_reports_by_month(
    client: &ApiClient,
    celula_id: i64,
    year: i32,
    month: u32,
) -> Result<MonthlyReports, ServiceError> {
    Ok(client
        .get(&format!("/celulas/{celula_id}/reports/by-month/{year}/{month}"))
        .await?)
}
