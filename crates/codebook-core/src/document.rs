//! Markdown 文档写出（标题、路径引用、围栏代码块、错误标记）
use std::io::{self, Write};

use crate::options::SourceFile;

/// 文档顶部唯一的一级标题
pub const DOCUMENT_HEADER: &str = "## Project Code Compilation\n\n";

/// 按固定格式向 `out` 写出各段落
pub struct MarkdownWriter<W: Write> {
    out: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn write_header(&mut self) -> io::Result<()> {
        self.out.write_all(DOCUMENT_HEADER.as_bytes())
    }

    /// 单文件段落：标题 → 分隔线 → 路径引用 → 代码块（内容原样写入）
    pub fn write_section(&mut self, file: &SourceFile, content: &str) -> io::Result<()> {
        write!(self.out, "## {}\n---\n> Path: {}\n\n", file.name, file.relative.display())?;
        write!(self.out, "```{}\n", file.label)?;
        self.out.write_all(content.as_bytes())?;
        self.out.write_all(b"\n```\n\n")
    }

    /// 读取失败时占据该文件段落的位置
    pub fn write_error(&mut self, file: &SourceFile, reason: &dyn std::fmt::Display) -> io::Result<()> {
        write!(self.out, "\n**ERROR: Could not read file {}. Reason: {}**\n\n", file.path.display(), reason)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    fn file(rel: &str, label: &str) -> SourceFile {
        SourceFile::new(Path::new("/root"), Path::new("/root").join(rel), label)
    }

    fn render(f: impl FnOnce(&mut MarkdownWriter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut w = MarkdownWriter::new(Vec::new());
        f(&mut w).unwrap();
        String::from_utf8(w.into_inner()).unwrap()
    }

    #[test]
    fn header_is_heading_and_blank_line() {
        assert_eq!(render(|w| w.write_header()), "## Project Code Compilation\n\n");
    }

    #[test]
    fn section_layout_is_exact() {
        let out = render(|w| w.write_section(&file("a.ts", "typescript"), "const x = 1;"));
        assert_eq!(out, "## a.ts\n---\n> Path: a.ts\n\n```typescript\nconst x = 1;\n```\n\n");
    }

    #[test]
    fn empty_content_gives_empty_fence() {
        let out = render(|w| w.write_section(&file("empty.tsx", "tsx"), ""));
        assert!(out.ends_with("```tsx\n\n```\n\n"));
    }

    #[test]
    fn trailing_newline_in_content_is_kept() {
        let out = render(|w| w.write_section(&file("b.jsx", "jsx"), "x\r\ny\n"));
        assert!(out.contains("```jsx\nx\r\ny\n\n```\n\n"));
    }

    #[test]
    fn nested_relative_path_uses_native_separator() {
        let f = file("pages/admin/Dash.tsx", "tsx");
        let out = render(|w| w.write_section(&f, "x"));
        let expected = PathBuf::from("pages").join("admin").join("Dash.tsx");
        assert!(out.starts_with("## Dash.tsx\n---\n"));
        assert!(out.contains(&format!("> Path: {}\n", expected.display())));
    }

    #[test]
    fn error_marker_names_path_and_reason() {
        let f = file("gone.ts", "typescript");
        let out = render(|w| w.write_error(&f, &"No such file or directory"));
        assert_eq!(
            out,
            format!("\n**ERROR: Could not read file {}. Reason: No such file or directory**\n\n", f.path.display())
        );
    }
}
