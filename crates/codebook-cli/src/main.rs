use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use codebook_core::{compile, load_language_map, parse_language_pair, CompileOptions, LanguageMap, DEFAULT_OUTPUT_NAME};
use std::path::{Path, PathBuf};
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "codebook", version, about = "Compile a source tree into one Markdown document")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 遍历目录并生成 Markdown 汇编文件
    Compile {
        /// 扫描根目录（不存在时自动创建）
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// 输出文件；相对路径按根目录解析，已存在则覆盖
        #[arg(long, default_value = DEFAULT_OUTPUT_NAME)]
        output: PathBuf,

        /// 语言映射文件（TOML），缺省使用内置 tsx/jsx/ts 表
        #[arg(long)]
        languages: Option<PathBuf>,

        /// 追加或覆盖单条映射，形如 ts=typescript，可重复
        #[arg(long = "lang", value_name = "EXT=LABEL", value_parser = parse_lang_arg)]
        lang: Vec<(String, String)>,

        /// 根目录不存在时报错而不是创建
        #[arg(long)]
        no_create_root: bool,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Compile { root, output, languages, lang, no_create_root } => {
            let languages = build_language_map(languages, &lang)?;
            info!(?root, ?output, languages = languages.len(), "starting compile");

            let opts = CompileOptions { root, output, languages, create_root: !no_create_root };
            let stats = compile(&opts).context("compile failed")?;

            info!(files_written = stats.files_written, files_failed = stats.files_failed, "compile finished");
            print!("{}", summary(&stats.output));
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(env_filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 映射表：文件优先，其次内置表；--lang 逐条覆盖
fn build_language_map(file: Option<PathBuf>, overrides: &[(String, String)]) -> Result<LanguageMap> {
    let mut map = match file {
        Some(path) => load_language_map(&path)?,
        None => LanguageMap::default(),
    };
    for (ext, label) in overrides {
        map.insert(ext, label);
    }
    Ok(map)
}

/// 完成提示：分隔线包围的单行结果
fn summary(output: &Path) -> String {
    format!("\n---\n✅ Success! Code successfully extracted to: {}\n---\n", output.display())
}

fn parse_lang_arg(s: &str) -> Result<(String, String), String> {
    parse_language_pair(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_defaults() {
        let cli = Cli::try_parse_from(["codebook", "compile"]).unwrap();
        let Commands::Compile { root, output, languages, lang, no_create_root } = cli.command;
        assert_eq!(root, PathBuf::from("."));
        assert_eq!(output, PathBuf::from("project_code.md"));
        assert!(languages.is_none());
        assert!(lang.is_empty());
        assert!(!no_create_root);
    }

    #[test]
    fn repeated_lang_overrides_extend_default_table() {
        let cli = Cli::try_parse_from(["codebook", "compile", "--lang", "rs=rust", "--lang", ".ts=ts"]).unwrap();
        let Commands::Compile { languages, lang, .. } = cli.command;
        let map = build_language_map(languages, &lang).unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map.label_for(Path::new("main.rs")), Some("rust"));
        assert_eq!(map.label_for(Path::new("a.ts")), Some("ts"));
    }

    #[test]
    fn malformed_lang_is_rejected() {
        assert!(Cli::try_parse_from(["codebook", "compile", "--lang", "rust"]).is_err());
    }

    #[test]
    fn summary_frames_output_path() {
        let text = summary(Path::new("src/project_code.md"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "---");
        assert!(lines[2].ends_with(&format!("extracted to: {}", Path::new("src/project_code.md").display())));
        assert_eq!(lines[3], "---");
    }
}
