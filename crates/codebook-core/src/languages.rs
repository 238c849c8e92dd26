//! 扩展名 → 代码块语言标签映射（内置默认表 + TOML 文件加载）
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

/// 单条映射的配置（支持 ext 或 extension 字段）
#[derive(Debug, Clone, Deserialize)]
struct LanguageEntry {
    #[serde(alias = "extension")]
    ext: String,
    label: String,
}

/// 顶层语言文件结构
#[derive(Debug, Clone, Deserialize)]
struct LanguageFile {
    #[serde(default)]
    languages: Vec<LanguageEntry>,
}

/// 有序的扩展名映射；扩展名存储时不带前导 "."
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<(String, String)>,
}

impl Default for LanguageMap {
    fn default() -> Self {
        let mut map = Self::empty();
        map.insert(".tsx", "tsx");
        map.insert(".jsx", "jsx");
        map.insert(".ts", "typescript");
        map
    }
}

impl LanguageMap {
    pub fn empty() -> Self {
        Self { entries: Vec::new() }
    }

    /// 插入或覆盖一条映射，`ts` 与 `.ts` 等价；空扩展名返回 false
    pub fn insert(&mut self, ext: &str, label: &str) -> bool {
        let ext = normalize_ext(ext);
        if ext.is_empty() {
            return false;
        }
        match self.entries.iter_mut().find(|(e, _)| e == ext) {
            Some(entry) => entry.1 = label.to_string(),
            None => self.entries.push((ext.to_string(), label.to_string())),
        }
        true
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(e, l)| (e.as_str(), l.as_str()))
    }

    /// 按路径最后一个扩展名查找标签（区分大小写）
    /// `.ts` 这类只有前缀点的文件名没有扩展名，不会命中
    pub fn label_for(&self, path: &Path) -> Option<&str> {
        let ext = path.extension()?.to_str()?;
        self.entries
            .iter()
            .find(|(e, _)| e == ext)
            .map(|(_, l)| l.as_str())
    }
}

/// 去掉首尾空白与全部前导 "."，`..ts`、`.ts`、`ts` 等价
fn normalize_ext(ext: &str) -> &str {
    ext.trim().trim_start_matches('.')
}

/// 从 TOML 文件加载映射表
pub fn load_language_map(path: &Path) -> Result<LanguageMap> {
    let txt = std::fs::read_to_string(path)
        .with_context(|| format!("read language file {}", path.display()))?;
    parse_language_map(&txt).with_context(|| format!("parse language file {}", path.display()))
}

pub(crate) fn parse_language_map(txt: &str) -> Result<LanguageMap> {
    let parsed: LanguageFile = toml::from_str(txt)?;
    let mut map = LanguageMap::empty();
    for e in parsed.languages {
        if !map.insert(&e.ext, &e.label) {
            bail!("empty extension for label {:?}", e.label);
        }
    }
    if map.is_empty() {
        bail!("no languages defined");
    }
    Ok(map)
}

/// 解析命令行形式的 "ext=label"
pub fn parse_language_pair(s: &str) -> Result<(String, String)> {
    let (ext, label) = match s.split_once('=') {
        Some(pair) => pair,
        None => bail!("expected EXT=LABEL, got {s:?}"),
    };
    let ext = normalize_ext(ext);
    if ext.is_empty() {
        bail!("empty extension in {s:?}");
    }
    Ok((ext.to_string(), label.trim().to_string()))
}
