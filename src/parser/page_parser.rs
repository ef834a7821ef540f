use super::{PageResult, PaginationExtractor, Parser};
use crate::core::{ParserConfig, ParserResult};
use crate::document::{self, Document};
use crate::listing::ListingNormalizer;
use crate::script::ScriptDataExtractor;
use log::{debug, info};

/// Parses search-result pages of the target classifieds site.
///
/// Holds no per-page state, so one instance can serve any number of pages
/// and threads.
#[derive(Debug, Clone)]
pub struct PageParser {
    config: ParserConfig,
    pagination: PaginationExtractor,
    scripts: ScriptDataExtractor,
    normalizer: ListingNormalizer,
}

impl PageParser {
    pub fn new() -> ParserResult<Self> {
        Self::with_config(ParserConfig::default())
    }

    /// Builds a parser for a custom layout, rejecting malformed selectors up front.
    pub fn with_config(config: ParserConfig) -> ParserResult<Self> {
        document::compile(&config.script_selector)?;
        document::compile(&config.pagination_selector)?;

        Ok(Self {
            pagination: PaginationExtractor::new(&config),
            scripts: ScriptDataExtractor::new(&config),
            normalizer: ListingNormalizer::new(&config),
            config,
        })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn parse_page(&self, html: &str) -> ParserResult<PageResult> {
        let document = Document::parse(html);
        let mut builder = PageResult::builder();

        let pages = self.pagination.extract(&document)?;
        debug!("Found {} forward page link(s)", pages.len());
        for href in pages {
            builder.page(href);
        }

        for listing in self.scripts.extract(&document)? {
            builder.job(self.normalizer.normalize(&listing));
        }

        let result = builder.build();
        info!(
            "Parsed page: {} job(s), {} page link(s)",
            result.jobs().len(),
            result.pages().len()
        );
        Ok(result)
    }
}

impl Parser for PageParser {
    fn parse(&self, html: &str) -> ParserResult<PageResult> {
        self.parse_page(html)
    }
}
