//! Current weather from the Open-Meteo forecast API (no key required).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Bremen, Germany.
pub const BREMEN: Coordinates = Coordinates {
    latitude: 53.0793,
    longitude: 8.8017,
};

pub fn forecast_url(at: Coordinates) -> String {
    format!(
        "https://api.open-meteo.com/v1/forecast?latitude={}&longitude={}&current=temperature_2m,is_day,weather_code&timezone=auto",
        at.latitude, at.longitude
    )
}

/// Closed set of labels shown by the weather chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeatherCondition {
    ClearSky,
    PartlyCloudy,
    Foggy,
    Rain,
    Snow,
    Cloudy,
}

impl WeatherCondition {
    /// WMO weather interpretation code → label, by ordered range checks.
    /// Codes outside the known ranges (drizzle-free showers, thunderstorms…) read as cloudy.
    pub fn from_wmo_code(code: i64) -> Self {
        match code {
            0 => WeatherCondition::ClearSky,
            1..=3 => WeatherCondition::PartlyCloudy,
            45..=48 => WeatherCondition::Foggy,
            51..=67 => WeatherCondition::Rain,
            71..=77 => WeatherCondition::Snow,
            _ => WeatherCondition::Cloudy,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::ClearSky => "Clear sky",
            WeatherCondition::PartlyCloudy => "Partly cloudy",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Cloudy => "Cloudy",
        }
    }

    /// Icon name understood by the frontend icon set.
    pub fn icon(&self, is_day: bool) -> &'static str {
        match self {
            WeatherCondition::Rain => "cloud-rain",
            WeatherCondition::Snow => "cloud-snow",
            WeatherCondition::PartlyCloudy | WeatherCondition::Cloudy | WeatherCondition::Foggy => {
                "cloud"
            }
            WeatherCondition::ClearSky if is_day => "sun",
            WeatherCondition::ClearSky => "moon",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub current: Option<CurrentWeather>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub temperature_2m: f64,
    pub is_day: i64,
    pub weather_code: i64,
}

/// Snapshot shown by the weather chip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Whole degrees Celsius.
    pub temperature: i32,
    pub condition: WeatherCondition,
    pub is_day: bool,
}

impl WeatherData {
    pub fn from_response(response: ForecastResponse) -> Option<Self> {
        let current = response.current?;
        if !current.temperature_2m.is_finite() {
            return None;
        }
        Some(Self {
            // half-up, matching how browsers round
            temperature: (current.temperature_2m + 0.5).floor() as i32,
            condition: WeatherCondition::from_wmo_code(current.weather_code),
            is_day: current.is_day == 1,
        })
    }

    /// Decode a raw forecast body; any malformed payload yields `None`.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str::<ForecastResponse>(body)
            .ok()
            .and_then(Self::from_response)
    }

    pub fn summary(&self, place: &str) -> String {
        format!("{}°C {} in {}", self.temperature, self.condition.label(), place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_mapping() {
        assert_eq!(WeatherCondition::from_wmo_code(0).label(), "Clear sky");
        assert_eq!(WeatherCondition::from_wmo_code(2).label(), "Partly cloudy");
        assert_eq!(WeatherCondition::from_wmo_code(45).label(), "Foggy");
        assert_eq!(WeatherCondition::from_wmo_code(61).label(), "Rain");
        assert_eq!(WeatherCondition::from_wmo_code(73).label(), "Snow");
        assert_eq!(WeatherCondition::from_wmo_code(95).label(), "Cloudy");
        assert_eq!(WeatherCondition::from_wmo_code(-1).label(), "Cloudy");
    }

    #[test]
    fn test_parse_current() {
        let body = r#"{"latitude":53.08,"current":{"time":"2025-01-10T12:00","temperature_2m":4.5,"is_day":1,"weather_code":61}}"#;
        let w = WeatherData::parse(body).unwrap();
        assert_eq!(w.temperature, 5);
        assert!(w.is_day);
        assert_eq!(w.condition, WeatherCondition::Rain);
        assert_eq!(w.summary("Bremen"), "5°C Rain in Bremen");
    }

    #[test]
    fn test_negative_rounding_is_half_up() {
        let body = r#"{"current":{"temperature_2m":-2.5,"is_day":0,"weather_code":0}}"#;
        let w = WeatherData::parse(body).unwrap();
        assert_eq!(w.temperature, -2);
        assert!(!w.is_day);
        assert_eq!(w.condition.icon(w.is_day), "moon");
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(WeatherData::parse("").is_none());
        assert!(WeatherData::parse("{}").is_none());
        assert!(WeatherData::parse(r#"{"current":null}"#).is_none());
        assert!(WeatherData::parse(r#"{"current":{"temperature_2m":"warm"}}"#).is_none());
        assert!(WeatherData::parse(r#"{"error":true,"reason":"bad"}"#).is_none());
    }

    #[test]
    fn test_forecast_url() {
        let url = forecast_url(BREMEN);
        assert!(url.starts_with("https://api.open-meteo.com/v1/forecast?latitude=53.0793&longitude=8.8017"));
        assert!(url.contains("current=temperature_2m,is_day,weather_code"));
    }

    #[test]
    fn test_icons() {
        assert_eq!(WeatherCondition::Rain.icon(true), "cloud-rain");
        assert_eq!(WeatherCondition::Foggy.icon(true), "cloud");
        assert_eq!(WeatherCondition::ClearSky.icon(true), "sun");
    }
}
