use serde::{Deserialize, Serialize};

use crate::error::AdapterError;

/// 默认的Gemini模型
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// 默认的最大输出tokens数
pub const DEFAULT_MAX_TOKENS: u32 = 100;

/// 固定采样温度，不通过CLI暴露
pub const TEMPERATURE: f64 = 0.2;

/// 单次调用配置
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Gemini模型名称
    pub model: String,

    /// 提示词文本
    pub prompt: String,

    /// 最大输出tokens数
    pub max_tokens: u32,

    /// 采样温度
    pub temperature: f64,

    /// API KEY，由调用方从环境变量显式传入
    pub api_key: String,
}

impl Config {
    /// 校验凭证是否存在，缺失或为空均视为配置错误
    pub fn validate(&self) -> Result<(), AdapterError> {
        if self.api_key.trim().is_empty() {
            return Err(AdapterError::MissingApiKey);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            prompt: String::new(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: TEMPERATURE,
            api_key: String::new(),
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
