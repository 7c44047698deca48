pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// EmojiHub 的隨機 emoji 端點
pub const DEFAULT_ENDPOINT: &str = "https://emojihub.yurace.pro/api/random";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "emoji-fetch")]
#[command(about = "Fetch a random emoji record from EmojiHub and print it")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, help = "Append records to this file instead of stdout")]
    pub output_path: Option<String>,

    #[arg(long, default_value = "pretty", help = "Output format: pretty or compact")]
    pub format: String,

    #[arg(long, default_value = "1", help = "Number of sequential fetches")]
    pub count: usize,

    #[arg(long, help = "Load settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log system resource usage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> Option<&str> {
        self.output_path.as_deref()
    }

    fn output_format(&self) -> &str {
        &self.format
    }

    fn record_count(&self) -> usize {
        self.count
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_output_format("format", &self.format)?;
        validation::validate_positive_number("count", self.count, 1)?;

        if let Some(path) = &self.output_path {
            validation::validate_path("output_path", path)?;
        }

        Ok(())
    }
}
