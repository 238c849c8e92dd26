//! 错误类型（致命错误 / 单文件可恢复错误）
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 致命错误：出现即终止整次编译
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("cannot create root directory {path}")]
    CreateRoot { path: PathBuf, source: io::Error },

    #[error("cannot open output file {path}")]
    OpenOutput { path: PathBuf, source: io::Error },

    #[error("root is not a directory: {0}")]
    RootNotDir(PathBuf),

    #[error("cannot walk root {path}")]
    Walk { path: PathBuf, source: walkdir::Error },

    #[error("write output failed")]
    Write(#[from] io::Error),
}

/// 单文件读取失败（记录到输出文档中，不中断）
/// Display 文本即错误标记里的 "Reason"
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("invalid UTF-8 content: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}
