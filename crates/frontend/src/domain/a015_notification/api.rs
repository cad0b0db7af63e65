use contracts::domain::a015_notification::aggregate::{
    element_path, read_path, Notification, NOTIFICATIONS_PATH,
};
use contracts::shared::http::ApiError;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_notifications(client: &ApiClient) -> Result<Vec<Notification>, ApiError> {
    client.get(NOTIFICATIONS_PATH).await
}

pub async fn mark_read(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.post_empty(&read_path(id)).await
}

pub async fn delete_notification(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&element_path(id)).await
}
