use crate::models::{
    error::AppError,
    market::{InflationForecast, InflationRate, LastPrice, PriceHistory, PricePoint, Province},
    prediction::CommodityPrediction,
    time_range::TimeRange,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;

// CONSTANTS
const BASE_URL: &str = "https://api.inflationwatch.dev/v1";

// API CONFIGURATION
/// Configuration for the market data API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// URL listing the provinces that offer a commodity.
    pub fn provinces_url(&self, commodity_id: &str) -> String {
        format!("{}/commodities/{commodity_id}/provinces", self.base_url)
    }

    /// URL for the historical price series of a commodity in a province.
    pub fn price_history_url(&self, commodity_id: &str, province_id: &str) -> String {
        format!(
            "{}/commodities/{commodity_id}/prices/{province_id}",
            self.base_url
        )
    }

    /// URL for a province's current inflation rate.
    pub fn current_inflation_url(&self, province_id: &str) -> String {
        format!("{}/inflation/{province_id}/current", self.base_url)
    }

    /// URL for a province's predicted inflation rate.
    pub fn inflation_forecast_url(&self, province_id: &str) -> String {
        format!("{}/inflation/{province_id}/forecast", self.base_url)
    }

    /// URL for the last known price of a commodity in a province.
    pub fn last_price_url(&self, province_id: &str, commodity_id: &str) -> String {
        format!(
            "{}/commodities/{commodity_id}/prices/{province_id}/latest",
            self.base_url
        )
    }

    /// URL for the time-ranged prediction series. The window is passed as
    /// the forecast encoding of `range`.
    pub fn prediction_url(&self, commodity_id: &str, province_id: &str, range: TimeRange) -> String {
        format!(
            "{}/commodities/{commodity_id}/predictions/{province_id}?time_range={}",
            self.base_url,
            range.forecast_code()
        )
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// API RESPONSE TYPES
#[derive(Deserialize, Debug)]
struct ApiEnvelope<T> {
    data: T,
}

#[derive(Deserialize, Debug)]
struct ApiPriceHistory {
    description: String,
    #[serde(default)]
    prices: Vec<PricePoint>,
}

impl From<ApiPriceHistory> for PriceHistory {
    fn from(h: ApiPriceHistory) -> Self {
        Self {
            description: h.description,
            prices: h.prices,
        }
    }
}

#[derive(Deserialize, Debug)]
struct ApiPrediction {
    commodity_name: String,
    province_name: String,
    description: String,
    #[serde(default)]
    prices: Vec<PricePoint>,
}

impl From<ApiPrediction> for CommodityPrediction {
    fn from(p: ApiPrediction) -> Self {
        Self {
            commodity_name: p.commodity_name,
            province_name: p.province_name,
            description: p.description,
            predictions: p.prices,
        }
    }
}

// MARKET DATA CLIENT
/// HTTP client for the commodity price and inflation API.
pub struct MarketDataClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl MarketDataClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the provinces offering a commodity.
    pub async fn fetch_provinces(&self, commodity_id: &str) -> Result<Vec<Province>, AppError> {
        let envelope: ApiEnvelope<Vec<Province>> =
            self.get(&self.config.provinces_url(commodity_id)).await?;
        Ok(envelope.data)
    }

    /// Fetches the historical price series with its description.
    pub async fn fetch_price_history(
        &self,
        commodity_id: &str,
        province_id: &str,
    ) -> Result<PriceHistory, AppError> {
        let envelope: ApiEnvelope<ApiPriceHistory> = self
            .get(&self.config.price_history_url(commodity_id, province_id))
            .await?;
        Ok(envelope.data.into())
    }

    /// Fetches the current inflation rate for a province.
    pub async fn fetch_current_inflation(
        &self,
        province_id: &str,
    ) -> Result<InflationRate, AppError> {
        let envelope: ApiEnvelope<InflationRate> = self
            .get(&self.config.current_inflation_url(province_id))
            .await?;
        Ok(envelope.data)
    }

    /// Fetches the predicted inflation rate for a province.
    pub async fn fetch_inflation_forecast(
        &self,
        province_id: &str,
    ) -> Result<InflationForecast, AppError> {
        let envelope: ApiEnvelope<InflationForecast> = self
            .get(&self.config.inflation_forecast_url(province_id))
            .await?;
        Ok(envelope.data)
    }

    /// Fetches the last known price of a commodity in a province.
    pub async fn fetch_last_price(
        &self,
        province_id: &str,
        commodity_id: &str,
    ) -> Result<LastPrice, AppError> {
        let envelope: ApiEnvelope<LastPrice> = self
            .get(&self.config.last_price_url(province_id, commodity_id))
            .await?;
        Ok(envelope.data)
    }

    /// Fetches the prediction record for a commodity/province pair,
    /// windowed server-side to the given range.
    pub async fn fetch_prediction(
        &self,
        commodity_id: &str,
        province_id: &str,
        range: TimeRange,
    ) -> Result<CommodityPrediction, AppError> {
        let envelope: ApiEnvelope<ApiPrediction> = self
            .get(&self.config.prediction_url(commodity_id, province_id, range))
            .await?;
        Ok(envelope.data.into())
    }

    /// Executes a single GET and parses the JSON body.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            401 | 403 => AppError::AuthError(format!("Authentication failed: {status}")),
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl Default for MarketDataClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the province list using default configuration.
pub async fn fetch_provinces(commodity_id: &str) -> Result<Vec<Province>, AppError> {
    MarketDataClient::new()?.fetch_provinces(commodity_id).await
}

/// Fetches the price history using default configuration.
pub async fn fetch_price_history(
    commodity_id: &str,
    province_id: &str,
) -> Result<PriceHistory, AppError> {
    MarketDataClient::new()?
        .fetch_price_history(commodity_id, province_id)
        .await
}

/// Fetches the current inflation rate using default configuration.
pub async fn fetch_current_inflation(province_id: &str) -> Result<InflationRate, AppError> {
    MarketDataClient::new()?
        .fetch_current_inflation(province_id)
        .await
}

/// Fetches the predicted inflation rate using default configuration.
pub async fn fetch_inflation_forecast(province_id: &str) -> Result<InflationForecast, AppError> {
    MarketDataClient::new()?
        .fetch_inflation_forecast(province_id)
        .await
}

/// Fetches the last known price using default configuration.
pub async fn fetch_last_price(
    province_id: &str,
    commodity_id: &str,
) -> Result<LastPrice, AppError> {
    MarketDataClient::new()?
        .fetch_last_price(province_id, commodity_id)
        .await
}

/// Fetches a time-ranged prediction record using default configuration.
pub async fn fetch_prediction(
    commodity_id: &str,
    province_id: &str,
    range: TimeRange,
) -> Result<CommodityPrediction, AppError> {
    MarketDataClient::new()?
        .fetch_prediction(commodity_id, province_id, range)
        .await
}
