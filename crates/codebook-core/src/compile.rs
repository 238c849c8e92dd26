//! 编译主流程：创建根目录 → 打开输出 → 遍历 → 逐文件写出
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::discovery::discover;
use crate::document::MarkdownWriter;
use crate::error::{CompileError, ReadError};
use crate::languages::LanguageMap;
use crate::options::{CompileOptions, CompileStats, SourceFile};

/// 按选项完成一次编译，输出文件总是被截断重写
pub fn compile(opts: &CompileOptions) -> Result<CompileStats, CompileError> {
    if opts.create_root {
        fs::create_dir_all(&opts.root)
            .map_err(|source| CompileError::CreateRoot { path: opts.root.clone(), source })?;
    }

    let output = opts.output_path();
    let file = File::create(&output).map_err(|source| CompileError::OpenOutput { path: output.clone(), source })?;
    // 输出文件本身不能作为输入
    let skip = fs::canonicalize(&output).ok();

    let mut out = BufWriter::new(file);
    // 遍历失败时也先冲刷已写出的文档头再返回
    let result = compile_to_writer(&opts.root, &opts.languages, skip.as_deref(), &mut out);
    out.flush()?;
    let mut stats = result?;

    stats.output = output;
    Ok(stats)
}

/// 写文档头后遍历 `root`，结果写入任意 `out`
pub fn compile_to_writer(
    root: &Path,
    languages: &LanguageMap,
    skip: Option<&Path>,
    out: &mut dyn Write,
) -> Result<CompileStats, CompileError> {
    let mut writer = MarkdownWriter::new(out);
    writer.write_header()?;
    let files = discover(root, languages, skip)?;
    write_sections(&files, &mut writer)
}

/// 为已发现的文件列表写出完整文档（含文档头）
pub fn write_document(files: &[SourceFile], out: &mut dyn Write) -> Result<CompileStats, CompileError> {
    let mut writer = MarkdownWriter::new(out);
    writer.write_header()?;
    write_sections(files, &mut writer)
}

fn write_sections<W: Write>(files: &[SourceFile], writer: &mut MarkdownWriter<W>) -> Result<CompileStats, CompileError> {
    let mut stats = CompileStats::default();
    for file in files {
        info!("Processing: {}", file.relative.display());
        // 先整读再写，失败时只留下错误标记
        match read_source(&file.path) {
            Ok(content) => {
                writer.write_section(file, &content)?;
                stats.files_written += 1;
            }
            Err(err) => {
                warn!(path = %file.path.display(), error = %err, "could not read file");
                writer.write_error(file, &err)?;
                stats.files_failed += 1;
            }
        }
    }
    writer.flush()?;
    Ok(stats)
}

/// 严格 UTF-8 解码，不做换行或 BOM 归一化
fn read_source(path: &Path) -> Result<String, ReadError> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8(bytes)?)
}
