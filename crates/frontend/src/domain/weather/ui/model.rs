use crate::shared::api_utils::get_text_with;
use contracts::domain::weather::{forecast_url, Coordinates, WeatherData};

/// Current conditions at `at`; any failure is logged and yields `None`.
pub async fn fetch_weather(at: Coordinates) -> Option<WeatherData> {
    match get_text_with(&forecast_url(at), WeatherData::parse).await {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("weather unavailable: {}", e);
            None
        }
    }
}
