use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, de};

use crate::error::LookupError;
use crate::model::{Query, WeatherSnapshot};

use super::WeatherProvider;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const SUCCESS_COD: u16 = 200;

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            http: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn fetch(&self, params: Vec<(&'static str, String)>) -> Result<WeatherSnapshot, LookupError> {
        let url = format!("{}/weather", self.base_url);
        tracing::debug!(%url, "requesting current weather");

        let res = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(LookupError::Transport)?;

        // The provider reports its own status in the body (`cod`), also on
        // HTTP error responses, so the body is parsed unconditionally.
        let body = res.text().await.map_err(LookupError::Transport)?;
        let reply: OwReply = serde_json::from_str(&body).map_err(LookupError::Parse)?;

        match reply {
            OwReply::Current(current) if current.cod.0 == SUCCESS_COD => Ok(current.into()),
            OwReply::Current(current) => Err(LookupError::NoData {
                status: current.cod.0,
                message: None,
            }),
            OwReply::Status(status) => {
                tracing::debug!(cod = status.cod.0, message = ?status.message, "provider returned no data");
                Err(LookupError::NoData {
                    status: status.cod.0,
                    message: status.message,
                })
            }
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &Query) -> Result<WeatherSnapshot, LookupError> {
        let mut params: Vec<(&'static str, String)> = match query {
            Query::Place(name) => vec![("q", name.clone())],
            Query::Coords { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        };
        params.push(("appid", self.api_key.clone()));
        params.push(("units", "metric".to_string()));

        self.fetch(params).await
    }
}

/// `cod` arrives as a number on success and a string on error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cod(u16);

impl<'de> Deserialize<'de> for Cod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u16),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(Cod(n)),
            Raw::Text(s) => s
                .parse()
                .map(Cod)
                .map_err(|_| de::Error::custom(format!("non-numeric status code: {s}"))),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OwReply {
    Current(OwCurrent),
    Status(OwStatus),
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    cod: Cod,
    name: String,
    timezone: i32,
    weather: Vec<OwWeather>,
    main: OwMain,
    wind: OwWind,
}

/// Error envelope, e.g. `{"cod":"404","message":"city not found"}`.
#[derive(Debug, Deserialize)]
struct OwStatus {
    cod: Cod,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

impl From<OwCurrent> for WeatherSnapshot {
    fn from(current: OwCurrent) -> Self {
        let (description, icon_code) = current
            .weather
            .into_iter()
            .next()
            .map(|w| (w.description, w.icon))
            .unwrap_or_else(|| ("Unknown".to_string(), String::new()));

        WeatherSnapshot {
            location_name: current.name,
            description,
            icon_code,
            temperature_c: current.main.temp,
            humidity_pct: current.main.humidity,
            wind_speed_mps: current.wind.speed,
            utc_offset_secs: current.timezone,
        }
    }
}
