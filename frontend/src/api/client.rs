use reqwest::Client;

use crate::{api::types::*, config};

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            config::normalize_base_url(base)
        } else {
            config::await_api_base_url().await
        }
    }

    /// Fetches every date-tagged record published by the holidays endpoint.
    pub async fn get_holidays_events(&self) -> Result<Vec<RawCalendarItem>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .client
            .get(format!("{}/holidays-events", base_url))
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let body: HolidaysEventsResponse = response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))?;
            Ok(body.into_items())
        } else {
            Err(response
                .json::<ApiError>()
                .await
                .unwrap_or_else(|_| ApiError::http_status(status.as_u16())))
        }
    }
}
