pub const DEFAULT_SCRIPT_SELECTOR: &str = "script";
pub const DEFAULT_SCRIPT_MARKER: &str = "var SEARCH_DATA";
pub const DEFAULT_LISTING_PATH: &str = "LIST.vacancies";
pub const DEFAULT_PAGINATION_SELECTOR: &str =
    "ul[class='ra-pagination-pages'] > li > [rv-text='page:page']";
pub const DEFAULT_METRO_LABEL: &str = "метро";

/// Layout assumptions about the target search-result page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    pub script_selector: String,
    pub script_marker: String,
    pub listing_path: String,
    pub pagination_selector: String,
    pub active_tag: String,
    pub link_tag: String,
    pub link_attribute: String,
    pub metro_label: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            script_selector: DEFAULT_SCRIPT_SELECTOR.to_string(),
            script_marker: DEFAULT_SCRIPT_MARKER.to_string(),
            listing_path: DEFAULT_LISTING_PATH.to_string(),
            pagination_selector: DEFAULT_PAGINATION_SELECTOR.to_string(),
            active_tag: "span".to_string(),
            link_tag: "a".to_string(),
            link_attribute: "href".to_string(),
            metro_label: DEFAULT_METRO_LABEL.to_string(),
        }
    }
}

impl ParserConfig {
    pub fn with_script_selector(mut self, selector: impl Into<String>) -> Self {
        self.script_selector = selector.into();
        self
    }

    pub fn with_script_marker(mut self, marker: impl Into<String>) -> Self {
        self.script_marker = marker.into();
        self
    }

    pub fn with_listing_path(mut self, path: impl Into<String>) -> Self {
        self.listing_path = path.into();
        self
    }

    pub fn with_pagination_selector(mut self, selector: impl Into<String>) -> Self {
        self.pagination_selector = selector.into();
        self
    }

    pub fn with_active_tag(mut self, tag: impl Into<String>) -> Self {
        self.active_tag = tag.into();
        self
    }

    pub fn with_link_tag(mut self, tag: impl Into<String>, attribute: impl Into<String>) -> Self {
        self.link_tag = tag.into();
        self.link_attribute = attribute.into();
        self
    }

    pub fn with_metro_label(mut self, label: impl Into<String>) -> Self {
        self.metro_label = label.into();
        self
    }
}
