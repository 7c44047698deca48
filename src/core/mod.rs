pub mod engine;
pub mod pipeline;

pub use crate::domain::model::EmojiRecord;
pub use crate::domain::ports::{ConfigProvider, OutputSink, Pipeline};
pub use crate::utils::error::Result;
