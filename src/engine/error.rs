use thiserror::Error;

/// 消息生成错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("No data found for load {load_number}")]
    EmptyLoad { load_number: String },
}
