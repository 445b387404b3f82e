use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;

const DEFAULT_DATASET_URL: &str = "https://pastebin.com/raw/TytE0smz";

#[derive(Debug, Clone, Parser)]
#[command(name = "attendance-cli")]
#[command(about = "Interactive viewer for a remotely hosted attendance dataset")]
pub struct CliConfig {
    /// URL the attendance dataset is fetched from at startup
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    pub api_endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)
    }
}
