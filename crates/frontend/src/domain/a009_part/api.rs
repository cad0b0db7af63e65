use contracts::domain::a009_part::aggregate::{
    PartMovement, PartStock, StockAdjustment, MOVEMENTS_PATH, STOCKS_PATH, STOCK_ADJUST_PATH,
};
use contracts::shared::http::ApiError;

use crate::shared::api_utils::ApiClient;

pub async fn fetch_stocks(client: &ApiClient) -> Result<Vec<PartStock>, ApiError> {
    client.get(STOCKS_PATH).await
}

pub async fn fetch_movements(client: &ApiClient) -> Result<Vec<PartMovement>, ApiError> {
    client.get(MOVEMENTS_PATH).await
}

pub async fn adjust_stock(client: &ApiClient, adjustment: &StockAdjustment) -> Result<(), ApiError> {
    client
        .post::<_, serde_json::Value>(STOCK_ADJUST_PATH, adjustment)
        .await
        .map(|_| ())
}
