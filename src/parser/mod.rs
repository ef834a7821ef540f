mod base;
mod page_parser;
mod pagination;
mod result;

pub use base::Parser;
pub use page_parser::PageParser;
pub use pagination::PaginationExtractor;
pub use result::{PageResult, PageResultBuilder};
