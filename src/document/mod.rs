//! Queryable view over a parsed HTML page.
//!
//! Wraps [`scraper::Html`], which tolerates malformed and partial markup, and
//! exposes the small surface the extractors rely on: run a structural query,
//! then read tag names, attributes and text off the matched nodes.

use crate::core::{ParserError, ParserResult};
use scraper::{ElementRef, Html, Selector};

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Returns every node matching `query`, in document order.
    pub fn query(&self, query: &str) -> ParserResult<Vec<Node<'_>>> {
        let selector = compile(query)?;
        Ok(self
            .html
            .select(&selector)
            .map(|element| Node { element })
            .collect())
    }
}

/// Parses a query, mapping failures to [`ParserError::MalformedQuery`].
pub fn compile(query: &str) -> ParserResult<Selector> {
    Selector::parse(query).map_err(|e| ParserError::MalformedQuery {
        query: query.to_string(),
        reason: e.to_string(),
    })
}

#[derive(Clone, Copy)]
pub struct Node<'a> {
    element: ElementRef<'a>,
}

impl<'a> Node<'a> {
    pub fn tag_name(&self) -> &'a str {
        self.element.value().name()
    }

    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    pub fn text(&self) -> String {
        self.element.text().collect()
    }
}
