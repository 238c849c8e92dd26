//! 目录遍历与扩展名过滤
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::CompileError;
use crate::languages::LanguageMap;
use crate::options::SourceFile;

/// 递归遍历 `root`，返回命中扩展名的普通文件
/// 顺序：深度优先前序，每个目录内按文件名排序，保证输出可复现
/// - 根目录不可访问：致命错误
/// - 子目录不可读：记录 warn 后跳过
/// - `skip`（已规范化的输出文件路径）不会被列入
pub fn discover(root: &Path, languages: &LanguageMap, skip: Option<&Path>) -> Result<Vec<SourceFile>, CompileError> {
    if !root.is_dir() {
        return Err(CompileError::RootNotDir(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(err) if err.depth() == 0 => {
                return Err(CompileError::Walk { path: root.to_path_buf(), source: err });
            }
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                continue;
            }
        };
        // 符号链接指向普通文件时也算普通文件
        if !entry.path().is_file() {
            continue;
        }
        let label = match languages.label_for(entry.path()) {
            Some(l) => l,
            None => continue,
        };
        if is_skipped(entry.path(), skip) {
            debug!(path = %entry.path().display(), "skipping output document");
            continue;
        }
        files.push(SourceFile::new(root, entry.into_path(), label));
    }

    debug!(root = %root.display(), matched = files.len(), "discovery finished");
    Ok(files)
}

fn is_skipped(path: &Path, skip: Option<&Path>) -> bool {
    let skip = match skip {
        Some(s) => s,
        None => return false,
    };
    if path.file_name() != skip.file_name() {
        return false;
    }
    std::fs::canonicalize(path).map(|p| p == skip).unwrap_or(false)
}
