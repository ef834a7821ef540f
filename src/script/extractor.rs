use super::ScriptContext;
use crate::core::{ParserConfig, ParserError, ParserResult};
use crate::document::Document;
use log::{debug, trace};
use serde_json::Value;

/// Pulls the raw listing collection out of the page's inline data scripts.
#[derive(Debug, Clone)]
pub struct ScriptDataExtractor {
    script_selector: String,
    marker: String,
    listing_path: String,
}

impl ScriptDataExtractor {
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            script_selector: config.script_selector.clone(),
            marker: config.script_marker.clone(),
            listing_path: config.listing_path.clone(),
        }
    }

    /// Returns every raw listing from every matching script, in document order.
    pub fn extract(&self, document: &Document) -> ParserResult<Vec<Value>> {
        let mut listings = Vec::new();
        for node in document.query(&self.script_selector)? {
            let text = node.text();
            let script = text.trim();
            if !script.starts_with(&self.marker) {
                continue;
            }

            trace!("Evaluating data script: {}", script);
            let found = self.evaluate(script)?;
            debug!(
                "Data script yielded {} listing(s) at `{}`",
                found.len(),
                self.listing_path
            );
            listings.extend(found);
        }
        Ok(listings)
    }

    fn evaluate(&self, script: &str) -> ParserResult<Vec<Value>> {
        let mut context = ScriptContext::new();
        context
            .execute(script)
            .map_err(|source| ParserError::ScriptExecution {
                source,
                script: script.to_string(),
            })?;

        match context.into_value(&self.listing_path) {
            Some(Value::Array(items)) => Ok(items),
            None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(Vec::new()),
            Some(Value::String(s)) if s.is_empty() => Ok(Vec::new()),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Ok(Vec::new()),
            Some(other) => Err(ParserError::UnexpectedShape {
                path: self.listing_path.clone(),
                found: describe(&other),
                script: script.to_string(),
            }),
        }
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Object(map) => format!("an object with {} key(s)", map.len()),
        Value::String(_) => "a string".to_string(),
        Value::Number(n) => format!("the number {}", n),
        Value::Bool(b) => format!("the boolean {}", b),
        Value::Array(_) | Value::Null => "a list".to_string(),
    }
}
