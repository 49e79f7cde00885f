// ==========================================
// 司机派车消息生成 - API层错误类型
// ==========================================
// 职责: 汇总导入层/引擎层错误,转换为面向用户的错误消息
// ==========================================

use crate::engine::ComposeError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须是可直接展示给用户的完整句子
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotReady(String),

    // ==========================================
    // 下层错误
    // ==========================================
    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// API层 Result 类型
pub type ApiResult<T> = Result<T, ApiError>;
