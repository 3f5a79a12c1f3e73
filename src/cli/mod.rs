use crate::config::{Config, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, TEMPERATURE};
use clap::Parser;

/// Gemini CLI - 将提示词转发给Gemini生成API并输出生成文本
#[derive(Parser, Debug)]
#[command(name = "gemini-cli")]
#[command(
    about = "Forward a prompt to the Gemini generation API and print the generated text to stdout."
)]
#[command(version)]
pub struct Args {
    /// Gemini模型名称
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// 提示词文本
    #[arg(long)]
    pub prompt: String,

    /// 最大输出tokens数
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,
}

impl Args {
    /// 将CLI参数转换为配置，凭证由调用方显式传入
    pub fn into_config(self, api_key: Option<String>) -> Config {
        Config {
            model: self.model,
            prompt: self.prompt,
            max_tokens: self.max_tokens,
            temperature: TEMPERATURE,
            api_key: api_key.unwrap_or_default(),
        }
    }
}
