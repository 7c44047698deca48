use crate::domain::model::EmojiRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait OutputSink: Send + Sync {
    fn write_line(&self, line: &str) -> impl std::future::Future<Output = Result<()>> + Send;
    fn destination(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn output_format(&self) -> &str;
    fn record_count(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch(&self) -> Result<Vec<u8>>;
    async fn decode(&self, body: Vec<u8>) -> Result<EmojiRecord>;
    async fn emit(&self, record: EmojiRecord) -> Result<String>;
}
