//! 编译选项、源文件与统计信息（模块）
use std::path::{Path, PathBuf};

use crate::languages::LanguageMap;

/// 默认输出文件名（相对根目录）
pub const DEFAULT_OUTPUT_NAME: &str = "project_code.md";

/// 编译选项
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// 扫描根目录
    pub root: PathBuf,
    /// 输出文件；相对路径按 root 解析
    pub output: PathBuf,
    /// 扩展名 → 语言标签
    pub languages: LanguageMap,
    /// 根目录不存在时是否自动创建
    pub create_root: bool,
}

impl CompileOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), ..Self::default() }
    }

    /// 实际写入的输出路径
    pub fn output_path(&self) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            self.root.join(&self.output)
        }
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_NAME),
            languages: LanguageMap::default(),
            create_root: true,
        }
    }
}

/// 遍历中发现的一个待输出文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// 遍历得到的路径（root 拼接而成）
    pub path: PathBuf,
    /// 相对 root 的路径
    pub relative: PathBuf,
    /// 文件名（标题）
    pub name: String,
    /// 代码块语言标签
    pub label: String,
}

impl SourceFile {
    pub fn new(root: &Path, path: PathBuf, label: &str) -> Self {
        let relative = path.strip_prefix(root).map(Path::to_path_buf).unwrap_or_else(|_| path.clone());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { path, relative, name, label: label.to_string() }
    }
}

/// 编译统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct CompileStats {
    pub files_written: usize,
    pub files_failed: usize,
    pub output: PathBuf,
}
