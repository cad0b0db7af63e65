use contracts::domain::a013_ticket::aggregate::{NewTicket, TICKETS_PATH};
use contracts::shared::http::ApiError;

use crate::shared::api_utils::ApiClient;

pub async fn create_ticket(client: &ApiClient, ticket: &NewTicket) -> Result<(), ApiError> {
    client
        .post::<_, serde_json::Value>(TICKETS_PATH, ticket)
        .await
        .map(|_| ())
}
