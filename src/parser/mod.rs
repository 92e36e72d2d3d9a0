//! Document package extraction.

mod docx_parser;
mod package;

pub use docx_parser::DocxParser;
pub use package::{part_names, DocxPackage};
