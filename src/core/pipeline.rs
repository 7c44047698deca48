use crate::core::{ConfigProvider, EmojiRecord, OutputSink, Pipeline};
use crate::utils::error::Result;
use reqwest::Client;

pub struct EmojiPipeline<S: OutputSink, C: ConfigProvider> {
    sink: S,
    config: C,
    client: Client,
}

impl<S: OutputSink, C: ConfigProvider> EmojiPipeline<S, C> {
    pub fn new(sink: S, config: C) -> Self {
        Self {
            sink,
            config,
            client: Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl<S: OutputSink, C: ConfigProvider> Pipeline for EmojiPipeline<S, C> {
    async fn fetch(&self) -> Result<Vec<u8>> {
        tracing::debug!("Making API request to: {}", self.config.api_endpoint());
        let response = self.client.get(self.config.api_endpoint()).send().await?;

        tracing::debug!("API response status: {}", response.status());

        // 非 2xx 一律視為失敗，不做任何回退
        let response = response.error_for_status()?;
        let body = response.bytes().await?;

        Ok(body.to_vec())
    }

    async fn decode(&self, body: Vec<u8>) -> Result<EmojiRecord> {
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(EmojiRecord::new(value))
    }

    async fn emit(&self, record: EmojiRecord) -> Result<String> {
        let line = match self.config.output_format() {
            "compact" => record.to_compact_json()?,
            _ => record.to_pretty_json()?,
        };

        self.sink.write_line(&line).await?;
        Ok(self.sink.destination())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FetchError;
    use httpmock::prelude::*;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockSink {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl MockSink {
        fn new() -> Self {
            Self {
                lines: Arc::new(Mutex::new(Vec::new())),
            }
        }

        async fn captured(&self) -> Vec<String> {
            self.lines.lock().await.clone()
        }
    }

    impl OutputSink for MockSink {
        async fn write_line(&self, line: &str) -> Result<()> {
            let mut lines = self.lines.lock().await;
            lines.push(line.to_string());
            Ok(())
        }

        fn destination(&self) -> String {
            "mock".to_string()
        }
    }

    struct MockConfig {
        api_endpoint: String,
        format: String,
    }

    impl MockConfig {
        fn new(api_endpoint: String) -> Self {
            Self {
                api_endpoint,
                format: "pretty".to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn api_endpoint(&self) -> &str {
            &self.api_endpoint
        }

        fn output_path(&self) -> Option<&str> {
            None
        }

        fn output_format(&self) -> &str {
            &self.format
        }

        fn record_count(&self) -> usize {
            1
        }
    }

    #[tokio::test]
    async fn test_fetch_and_decode_successful_response() {
        let server = MockServer::start();
        let mock_data = serde_json::json!({
            "name": "grinning face",
            "category": "smileys and people",
            "htmlCode": ["&#128512;"],
            "unicode": ["U+1F600"]
        });

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/random");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(mock_data.clone());
        });

        let config = MockConfig::new(server.url("/api/random"));
        let pipeline = EmojiPipeline::new(MockSink::new(), config);

        let body = pipeline.fetch().await.unwrap();
        let record = pipeline.decode(body).await.unwrap();

        api_mock.assert();
        assert_eq!(record.data, mock_data);
        assert_eq!(record.name(), Some("grinning face"));
    }

    #[tokio::test]
    async fn test_fetch_error_status_propagates() {
        let server = MockServer::start();

        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/api/random");
            then.status(500);
        });

        let config = MockConfig::new(server.url("/api/random"));
        let pipeline = EmojiPipeline::new(MockSink::new(), config);

        let result = pipeline.fetch().await;

        api_mock.assert();
        assert!(matches!(result, Err(FetchError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_endpoint_propagates() {
        // 不開伺服器，直接打一個沒人監聽的埠
        let config = MockConfig::new("http://127.0.0.1:1/api/random".to_string());
        let pipeline = EmojiPipeline::new(MockSink::new(), config);

        let result = pipeline.fetch().await;

        assert!(matches!(result, Err(FetchError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_decode_rejects_invalid_json() {
        let config = MockConfig::new("http://localhost:8080".to_string());
        let pipeline = EmojiPipeline::new(MockSink::new(), config);

        let result = pipeline.decode(b"not json".to_vec()).await;

        assert!(matches!(result, Err(FetchError::DecodeError(_))));
    }

    #[tokio::test]
    async fn test_emit_pretty_format() {
        let sink = MockSink::new();
        let config = MockConfig::new("http://localhost:8080".to_string());
        let pipeline = EmojiPipeline::new(sink.clone(), config);

        let data = serde_json::json!({"name": "grinning face"});
        let destination = pipeline.emit(EmojiRecord::new(data.clone())).await.unwrap();

        assert_eq!(destination, "mock");
        let lines = sink.captured().await;
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], serde_json::to_string_pretty(&data).unwrap());
    }

    #[tokio::test]
    async fn test_emit_compact_format() {
        let sink = MockSink::new();
        let mut config = MockConfig::new("http://localhost:8080".to_string());
        config.format = "compact".to_string();
        let pipeline = EmojiPipeline::new(sink.clone(), config);

        let data = serde_json::json!({"name": "grinning face"});
        pipeline.emit(EmojiRecord::new(data.clone())).await.unwrap();

        let lines = sink.captured().await;
        assert_eq!(lines, vec![serde_json::to_string(&data).unwrap()]);
    }
}
