pub mod core;
pub mod document;
pub mod listing;
pub mod parser;
pub mod script;

pub use crate::core::{ParserConfig, ParserError, ParserResult};
pub use document::Document;
pub use listing::{JobRecord, ListingNormalizer};
pub use parser::{PageParser, PageResult, PaginationExtractor, Parser};
pub use script::{ScriptContext, ScriptDataExtractor, ScriptError};
