use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
}

/// Where the raw dataset text comes from. The HTTP fetcher is the only
/// production implementation; tests substitute in-memory sources.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch_raw(&self) -> Result<String>;
}
