use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;

pub struct FetchEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> FetchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(false),
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    /// 執行一次完整的 fetch → decode → emit 流程
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Requesting emoji record...");
        let body = self.pipeline.fetch().await?;
        tracing::info!("Received {} bytes", body.len());
        self.monitor.log_stats("Fetch");

        let record = self.pipeline.decode(body).await?;
        if let Some(name) = record.name() {
            tracing::info!("🎲 Drew emoji: {}", name);
        }
        self.monitor.log_stats("Decode");

        let destination = self.pipeline.emit(record).await?;
        tracing::info!("Record written to: {}", destination);
        self.monitor.log_final_stats();

        Ok(destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EmojiRecord;
    use crate::utils::error::FetchError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct StubPipeline {
        body: Option<Vec<u8>>,
        fetched: Arc<AtomicUsize>,
        emitted: Arc<AtomicUsize>,
    }

    impl StubPipeline {
        fn new(body: Option<Vec<u8>>) -> Self {
            Self {
                body,
                fetched: Arc::new(AtomicUsize::new(0)),
                emitted: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait::async_trait]
    impl Pipeline for StubPipeline {
        async fn fetch(&self) -> Result<Vec<u8>> {
            self.fetched.fetch_add(1, Ordering::SeqCst);
            self.body.clone().ok_or_else(|| {
                FetchError::IoError(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "transport down",
                ))
            })
        }

        async fn decode(&self, body: Vec<u8>) -> Result<EmojiRecord> {
            let value: serde_json::Value = serde_json::from_slice(&body)?;
            Ok(EmojiRecord::new(value))
        }

        async fn emit(&self, _record: EmojiRecord) -> Result<String> {
            self.emitted.fetch_add(1, Ordering::SeqCst);
            Ok("stub".to_string())
        }
    }

    #[tokio::test]
    async fn test_run_executes_all_stages() {
        let pipeline = StubPipeline::new(Some(br#"{"name":"grinning face"}"#.to_vec()));
        let emitted = pipeline.emitted.clone();

        let engine = FetchEngine::new(pipeline);
        let destination = engine.run().await.unwrap();

        assert_eq!(destination, "stub");
        assert_eq!(emitted.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_emit() {
        let pipeline = StubPipeline::new(None);
        let emitted = pipeline.emitted.clone();

        let engine = FetchEngine::new(pipeline);
        let result = engine.run().await;

        assert!(result.is_err());
        assert_eq!(emitted.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_decode_failure_skips_emit() {
        let pipeline = StubPipeline::new(Some(b"not json".to_vec()));
        let emitted = pipeline.emitted.clone();

        let engine = FetchEngine::new(pipeline);
        let result = engine.run().await;

        assert!(matches!(result, Err(FetchError::DecodeError(_))));
        assert_eq!(emitted.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_repeated_runs_fetch_independently() {
        let pipeline = StubPipeline::new(Some(br#"{"name":"victory hand"}"#.to_vec()));
        let fetched = pipeline.fetched.clone();

        let engine = FetchEngine::new(pipeline);
        engine.run().await.unwrap();
        engine.run().await.unwrap();

        assert_eq!(fetched.load(Ordering::SeqCst), 2);
    }
}
