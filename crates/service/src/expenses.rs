use common::{ApiClient, ApiRequest};
use models::expense::Expense;

use crate::errors::ServiceError;

/// Budget lines, filtered to `year` when given.
pub async fn get_by_year(client: &ApiClient, year: Option<&str>) -> Result<Vec<Expense>, ServiceError> {
    let req = ApiRequest::get("/expenses").query_opt("year", year);
    Ok(client.send(req).await?)
}
