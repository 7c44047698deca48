use crate::core::OutputSink;
use crate::utils::error::Result;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// 本地輸出：預設寫到 stdout，指定路徑時改為附加到檔案
#[derive(Debug, Clone)]
pub struct LocalSink {
    output_path: Option<String>,
}

impl LocalSink {
    pub fn new(output_path: Option<String>) -> Self {
        Self { output_path }
    }
}

impl OutputSink for LocalSink {
    async fn write_line(&self, line: &str) -> Result<()> {
        match &self.output_path {
            Some(path) => {
                let full_path = Path::new(path);

                if let Some(parent) = full_path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }

                let mut file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(full_path)?;
                writeln!(file, "{}", line)?;
            }
            None => println!("{}", line),
        }

        Ok(())
    }

    fn destination(&self) -> String {
        self.output_path
            .clone()
            .unwrap_or_else(|| "stdout".to_string())
    }
}
