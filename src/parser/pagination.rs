use crate::core::{ParserConfig, ParserResult};
use crate::document::Document;
use log::{debug, trace};

/// Collects the pagination links that come after the active page.
#[derive(Debug, Clone)]
pub struct PaginationExtractor {
    selector: String,
    active_tag: String,
    link_tag: String,
    link_attribute: String,
}

impl PaginationExtractor {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            selector: config.pagination_selector.clone(),
            active_tag: config.active_tag.clone(),
            link_tag: config.link_tag.clone(),
            link_attribute: config.link_attribute.clone(),
        }
    }

    pub fn extract(&self, document: &Document) -> ParserResult<Vec<String>> {
        let mut pages = Vec::new();
        let mut seen_active = false;

        for node in document.query(&self.selector)? {
            let tag = node.tag_name();
            if tag.eq_ignore_ascii_case(&self.active_tag) {
                trace!("Active page marker: {}", node.text().trim());
                seen_active = true;
            } else if seen_active && tag.eq_ignore_ascii_case(&self.link_tag) {
                match node.attribute(&self.link_attribute) {
                    Some(href) => pages.push(href.to_string()),
                    None => debug!("Pagination link without `{}`", self.link_attribute),
                }
            }
        }

        if !seen_active {
            debug!("No active page marker found, emitting no page links");
        }
        Ok(pages)
    }
}
