//! 适配器错误类型 - 所有非成功路径统一汇聚到这里

use thiserror::Error;

/// 适配器的终止性错误，全部映射为退出码1
///
/// `Display`输出即stderr中`Error: `前缀之后的原因文本。
#[derive(Debug, Error)]
pub enum AdapterError {
    /// 凭证缺失或为空，在任何网络活动之前检测
    #[error("GOOGLE_API_KEY environment variable not set")]
    MissingApiKey,

    /// 调用成功但未返回可用文本
    #[error("No response generated")]
    EmptyResponse,

    /// 客户端构建或生成调用期间的任何其他失败（网络、鉴权、无效模型名、配额等）
    #[error("{0}")]
    Call(String),
}
