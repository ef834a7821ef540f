use super::error::ScriptError;
use super::interpreter::{child, Interpreter, Segment};
use serde_json::Value;
use std::collections::HashMap;

/// Isolated global scope for executing one script block.
///
/// Scripts can only declare and assign data: there is no host object, no
/// function call and no I/O reachable from inside the context.
#[derive(Debug, Default)]
pub struct ScriptContext {
    globals: HashMap<String, Value>,
}

impl ScriptContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, source: &str) -> Result<(), ScriptError> {
        Interpreter::new(source, &mut self.globals).run()
    }

    /// Looks up a dotted variable path such as `LIST.vacancies`.
    pub fn read_path(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let root = self.globals.get(segments.next()?)?;
        segments.try_fold(root, |value, name| {
            child(value, &Segment::Name(name.to_string()))
        })
    }

    /// Moves the value at `path` out, dropping everything else the script defined.
    pub fn into_value(mut self, path: &str) -> Option<Value> {
        let mut segments = path.split('.');
        let root = self.globals.remove(segments.next()?)?;
        segments.try_fold(root, |value, name| match value {
            Value::Object(mut map) => map.remove(name),
            Value::Array(items) => {
                let index: usize = name.parse().ok()?;
                items.into_iter().nth(index)
            }
            _ => None,
        })
    }
}
