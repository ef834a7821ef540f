mod config;
mod errors;

pub use config::{
    ParserConfig, DEFAULT_LISTING_PATH, DEFAULT_METRO_LABEL, DEFAULT_PAGINATION_SELECTOR,
    DEFAULT_SCRIPT_MARKER, DEFAULT_SCRIPT_SELECTOR,
};
pub use errors::{ParserError, ParserResult};
