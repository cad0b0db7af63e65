use contracts::domain::a014_pricing_settings::aggregate::{PricingSettings, PRICING_SETTINGS_PATH};
use contracts::shared::http::ApiError;

use crate::shared::api_utils::ApiClient;

/// Current rates; defaults when nothing has been saved yet.
pub async fn fetch_pricing(client: &ApiClient) -> Result<PricingSettings, ApiError> {
    let settings: Option<PricingSettings> = client.get(PRICING_SETTINGS_PATH).await?;
    Ok(settings.unwrap_or_default())
}

pub async fn save_pricing(client: &ApiClient, settings: &PricingSettings) -> Result<(), ApiError> {
    client
        .put::<_, serde_json::Value>(PRICING_SETTINGS_PATH, settings)
        .await
        .map(|_| ())
}
