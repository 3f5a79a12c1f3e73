//! LLM客户端 - 提供统一的文本生成接口

use anyhow::Result;
use async_trait::async_trait;

mod provider;

pub use provider::LLMClient;

/// 文本生成能力的统一接口
///
/// 调用外部生成API的边界，测试中可替换为确定性的mock实现。
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// 发出单次生成请求，返回原始生成文本
    async fn generate(&self, prompt: &str) -> Result<String>;
}
