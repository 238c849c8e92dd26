//! 源码汇编库
//!
//! 递归遍历根目录，按扩展名筛选源文件，把每个文件写成一个 Markdown 段落：
//! - 文件名二级标题、分隔线、相对路径引用、带语言标签的围栏代码块。
//! - 单文件读取失败只写入错误标记，整次编译继续；根目录或输出文件出错则终止。
//! - 遍历顺序固定（目录内按文件名排序），同一目录树多次编译输出逐字节一致。

mod compile;
mod discovery;
mod document;
mod error;
mod languages;
mod options;

pub use compile::{compile, compile_to_writer, write_document};
pub use discovery::discover;
pub use document::{MarkdownWriter, DOCUMENT_HEADER};
pub use error::{CompileError, ReadError};
pub use languages::{load_language_map, parse_language_pair, LanguageMap};
pub use options::{CompileOptions, CompileStats, SourceFile, DEFAULT_OUTPUT_NAME};
