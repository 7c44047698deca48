pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalSink, toml_config::FileConfig};

pub use core::{engine::FetchEngine, pipeline::EmojiPipeline};
pub use utils::error::{FetchError, Result};
