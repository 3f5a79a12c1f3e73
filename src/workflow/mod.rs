//! 工作流 - 校验凭证、发起单次生成调用、汇总结果

use crate::config::Config;
use crate::error::AdapterError;
use crate::llm::client::{LLMClient, TextGenerator};

/// 执行一次完整的生成流程
pub async fn launch(config: &Config) -> Result<String, AdapterError> {
    // 凭证校验必须发生在任何网络活动之前
    config.validate()?;

    let client = LLMClient::new(config).map_err(|e| AdapterError::Call(e.to_string()))?;
    generate_with(&client, &config.prompt).await
}

/// 通过给定的生成器发出请求，并把所有非成功路径汇聚为AdapterError
pub async fn generate_with(
    generator: &dyn TextGenerator,
    prompt: &str,
) -> Result<String, AdapterError> {
    let text = generator
        .generate(prompt)
        .await
        .map_err(|e| AdapterError::Call(e.to_string()))?;

    // 空判定针对原始文本；仅含空白的响应视为已生成，修剪后打印为空字符串
    if text.is_empty() {
        return Err(AdapterError::EmptyResponse);
    }

    Ok(text.trim().to_string())
}
