//! Gemini Provider支持模块

use anyhow::Result;
use async_trait::async_trait;
use rig::{
    agent::Agent,
    client::CompletionClient,
    completion::Prompt,
    providers::gemini,
    providers::gemini::completion::gemini_api_types::{AdditionalParameters, GenerationConfig},
};

use super::TextGenerator;
use crate::config::Config;

/// 基于rig的Gemini客户端
pub struct LLMClient {
    agent: Agent<gemini::completion::CompletionModel>,
}

impl LLMClient {
    /// 根据配置创建Gemini客户端并构建Agent
    pub fn new(config: &Config) -> Result<Self> {
        let client = gemini::Client::builder(&config.api_key).build()?;

        let gen_cfg = GenerationConfig::default();
        let cfg = AdditionalParameters::default().with_config(gen_cfg);

        let agent = client
            .agent(&config.model)
            .max_tokens(config.max_tokens.into())
            .temperature(config.temperature)
            .additional_params(serde_json::to_value(cfg)?)
            .build();

        Ok(Self { agent })
    }
}

#[async_trait]
impl TextGenerator for LLMClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.agent.prompt(prompt).await.map_err(|e| e.into())
    }
}
