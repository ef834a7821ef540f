use thiserror::Error;

/// Failure while executing a script block, positioned in the script source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (line {line}, column {column})")]
pub struct ScriptError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl ScriptError {
    pub(crate) fn at(source: &[char], pos: usize, message: impl Into<String>) -> Self {
        let mut line = 1;
        let mut column = 1;
        for c in source.iter().take(pos) {
            if *c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}
