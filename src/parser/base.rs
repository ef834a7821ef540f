use super::PageResult;
use crate::ParserResult;

pub trait Parser: Send + Sync {
    /// Parses one search-result page into its listings and forward page links.
    fn parse(&self, html: &str) -> ParserResult<PageResult>;
}
