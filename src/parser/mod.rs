pub mod archive_parser;

pub use archive_parser::{ArchiveParser, Parser};
