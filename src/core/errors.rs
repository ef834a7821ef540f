use crate::script::ScriptError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Malformed query `{query}`: {reason}")]
    MalformedQuery { query: String, reason: String },

    #[error("Script execution error: {source}")]
    ScriptExecution {
        #[source]
        source: ScriptError,
        script: String,
    },

    #[error("Unexpected shape at `{path}`: expected a list, found {found}")]
    UnexpectedShape {
        path: String,
        found: String,
        script: String,
    },
}

impl ParserError {
    /// Script text that caused the failure, when the failure came from a script block.
    pub fn script(&self) -> Option<&str> {
        match self {
            ParserError::ScriptExecution { script, .. }
            | ParserError::UnexpectedShape { script, .. } => Some(script),
            ParserError::MalformedQuery { .. } => None,
        }
    }
}

pub type ParserResult<T> = Result<T, ParserError>;
