use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::debug;

use crate::core::rates::{RateDocument, RateProvider};

/// Fetches latest rates from an exchangerate-api.com compatible endpoint.
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiProvider {
    async fn fetch_latest(&self, base: &str) -> Result<RateDocument> {
        let url = format!("{}/v4/latest/{}", self.base_url, base);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder().user_agent("cambio/0.1").build()?;
        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base: {} URL: {}", e, base, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                base
            ));
        }

        let text = response.text().await?;
        let doc: RateDocument = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse rates response for {}: {}", base, e))?;

        if doc.rates.is_empty() {
            return Err(anyhow!("No rates found for base currency: {}", base));
        }

        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(base: &str, mock_response: &str) -> wiremock::MockServer {
        let mock_server = wiremock::MockServer::start().await;
        let request_path = format!("/v4/latest/{base}");

        Mock::given(method("GET"))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rates_fetch() {
        let mock_response = r#"{
            "base": "USD",
            "date": "2026-08-20",
            "rates": {
                "USD": 1.0,
                "EUR": 0.92,
                "ARS": 850.0
            }
        }"#;

        let mock_server = create_mock_server("USD", mock_response).await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let doc = provider.fetch_latest("USD").await.unwrap();
        assert_eq!(doc.base, "USD");
        assert_eq!(doc.date.as_deref(), Some("2026-08-20"));
        assert_eq!(doc.rates.get("EUR"), Some(&0.92));
        assert_eq!(doc.rates.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_rates_is_an_error() {
        let mock_response = r#"{"base": "USD", "date": "2026-08-20", "rates": {}}"#;
        let mock_server = create_mock_server("USD", mock_response).await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let result = provider.fetch_latest("USD").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No rates found for base currency: USD"
        );
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v4/latest/USD"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        let result = provider.fetch_latest("USD").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error for base currency: USD"
        );
    }

    #[tokio::test]
    async fn test_api_malformed_response() {
        let mock_response = r#"{"base": "USD", "ratess": {}}"#; // "ratess" instead of "rates"
        let mock_server = create_mock_server("USD", mock_response).await;
        let provider = ExchangeRateApiProvider::new(&mock_server.uri());

        let result = provider.fetch_latest("USD").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse rates response for USD")
        );
    }
}
