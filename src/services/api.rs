use crate::config::Config;
use crate::models::{cache_key::CacheKey, error::AppError, prices::PriceResponse};

// CONSTANTS
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

// API CONFIGURATION
/// Configuration for the fuel price API client.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
    prices_path: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Configuration pointing at the origin the page was served from.
    pub fn from_page_origin() -> Self {
        let builder = Self::builder();
        match web_sys::window().and_then(|w| w.location().origin().ok()) {
            Some(origin) => builder.base_url(origin).build(),
            None => builder.build(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Constructs the URL of the price lookup endpoint.
    pub fn prices_url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.prices_path.trim_start_matches('/')
        )
    }

    /// Full lookup URL for one cache key.
    pub fn request_url(&self, key: &CacheKey) -> Result<reqwest::Url, AppError> {
        reqwest::Url::parse_with_params(
            &self.prices_url(),
            [
                ("date", key.date_param()),
                ("fuelType", key.fuel_type().as_str()),
            ],
        )
        .map_err(|e| AppError::ConfigError(format!("Invalid API URL: {e}")))
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
    prices_path: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the path of the price lookup endpoint.
    pub fn prices_path(mut self, path: impl Into<String>) -> Self {
        self.prices_path = Some(path.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            prices_path: self
                .prices_path
                .unwrap_or_else(|| Config::API_PATH.to_string()),
        }
    }
}

// FUEL PRICE CLIENT
/// HTTP client for the remote price lookup.
#[derive(Clone)]
pub struct FuelPriceClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl FuelPriceClient {
    /// Creates a new client for the page origin.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::from_page_origin())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Fetches the three-slot price bundle for one key.
    pub async fn fetch_prices(&self, key: &CacheKey) -> Result<PriceResponse, AppError> {
        let url = self.config.request_url(key)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(Self::classify_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, &body));
        }

        response
            .json::<PriceResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            429 => AppError::RateLimited,
            404 => AppError::NotFound(format!("No prices: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}
