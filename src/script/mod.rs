mod context;
mod error;
mod extractor;
mod interpreter;

pub use context::ScriptContext;
pub use error::ScriptError;
pub use extractor::ScriptDataExtractor;
