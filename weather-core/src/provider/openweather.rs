use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::{
    CityQuery, FetchError, WeatherSummary,
    config::DEFAULT_BASE_URL,
};

use super::WeatherProvider;

/// Client for the OpenWeather current-conditions endpoint, metric units.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, city: &str) -> Result<WeatherSummary, FetchError> {
        let url = format!("{}/weather", self.base_url);
        debug!(%url, city, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let err = FetchError::provider(provider_message(&body).as_deref());
            warn!(%status, body = %truncate_body(&body), "OpenWeather rejected request");
            return Err(err);
        }

        parse_summary(&body)
    }
}

fn parse_summary(body: &str) -> Result<WeatherSummary, FetchError> {
    let parsed: OwCurrentResponse = serde_json::from_str(body).map_err(|e| {
        warn!(error = %e, "failed to parse OpenWeather response");
        FetchError::Malformed(e.to_string())
    })?;

    parsed.into_summary()
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    sys: OwSys,
    main: OwMain,
    weather: Vec<OwWeather>,
}

impl OwCurrentResponse {
    fn into_summary(self) -> Result<WeatherSummary, FetchError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            FetchError::Malformed("response contained no weather conditions".to_string())
        })?;

        Ok(WeatherSummary {
            name: self.name,
            country: self.sys.country,
            temperature_c: self.main.temp,
            humidity_pct: self.main.humidity,
            description: condition.description,
            icon: condition.icon,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<serde_json::Value>,
}

/// The `message` field of an error body, when it is a string.
fn provider_message(body: &str) -> Option<String> {
    let parsed: OwErrorBody = serde_json::from_str(body).ok()?;
    match parsed.message? {
        serde_json::Value::String(msg) => Some(msg),
        _ => None,
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    #[instrument(skip_all, fields(city = %city))]
    async fn current_weather(&self, city: &CityQuery) -> Result<WeatherSummary, FetchError> {
        self.fetch_current(city.as_str()).await
    }
}

fn truncate_body(body: &str) -> &str {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
