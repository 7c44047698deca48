use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

/// 遠端回傳的 emoji 紀錄，保持原始 JSON 不做任何結構驗證
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiRecord {
    pub data: serde_json::Value,
}

impl EmojiRecord {
    pub fn new(data: serde_json::Value) -> Self {
        Self { data }
    }

    /// Best-effort name lookup, only used for log lines.
    pub fn name(&self) -> Option<&str> {
        self.data.get("name").and_then(|v| v.as_str())
    }

    pub fn to_pretty_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.data)?)
    }

    pub fn to_compact_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.data)?)
    }
}
