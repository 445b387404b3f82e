use crate::core::{ConfigProvider, DatasetSource, Result};
use crate::utils::error::AttendanceError;
use async_trait::async_trait;
use reqwest::Client;

pub struct HttpFetcher<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpFetcher<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl<C: ConfigProvider> DatasetSource for HttpFetcher<C> {
    async fn fetch_raw(&self) -> Result<String> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self.client.get(self.config.api_endpoint()).send().await?;

        tracing::debug!("API response status: {}", response.status());

        // 非 2xx 一律視為致命錯誤，沒有重試
        if !response.status().is_success() {
            return Err(AttendanceError::FetchError {
                url: self.config.api_endpoint().to_string(),
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(body)
    }
}
