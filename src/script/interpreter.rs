use super::error::ScriptError;
use serde_json::{Map, Number, Value};
use std::collections::HashMap;
use std::fmt;

/// Nesting limit for literals and member expressions.
const MAX_DEPTH: usize = 256;
/// Largest gap an index assignment may open at the end of an array.
const MAX_ARRAY_GAP: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Segment {
    Name(String),
    Index(usize),
}

impl Segment {
    fn from_key(key: Value) -> Self {
        match key {
            Value::Number(n) => match n.as_u64() {
                Some(i) => Segment::Index(i as usize),
                None => Segment::Name(n.to_string()),
            },
            Value::String(s) => Segment::Name(s),
            Value::Null => Segment::Name("undefined".to_string()),
            other => Segment::Name(other.to_string()),
        }
    }

    fn as_index(&self) -> Option<usize> {
        match self {
            Segment::Index(i) => Some(*i),
            Segment::Name(name) => name.parse().ok(),
        }
    }

    fn as_name(&self) -> String {
        match self {
            Segment::Index(i) => i.to_string(),
            Segment::Name(name) => name.clone(),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_name())
    }
}

/// Property read, `None` standing for `undefined`.
pub(crate) fn child<'v>(value: &'v Value, segment: &Segment) -> Option<&'v Value> {
    match value {
        Value::Object(map) => map.get(&segment.as_name()),
        Value::Array(items) => segment.as_index().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn child_mut<'v>(value: &'v mut Value, segment: &Segment) -> Option<&'v mut Value> {
    match value {
        Value::Object(map) => map.get_mut(&segment.as_name()),
        Value::Array(items) => segment.as_index().and_then(move |i| items.get_mut(i)),
        _ => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "undefined",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn member(value: &Value, segment: &Segment) -> Result<Value, String> {
    match value {
        Value::Null => Err(format!(
            "cannot read property `{}` of undefined",
            segment
        )),
        Value::Array(items) if segment.as_name() == "length" => Ok(Value::from(items.len())),
        Value::String(s) if segment.as_name() == "length" => {
            Ok(Value::from(s.encode_utf16().count()))
        }
        other => Ok(child(other, segment).cloned().unwrap_or(Value::Null)),
    }
}

fn assign(
    globals: &mut HashMap<String, Value>,
    name: String,
    path: &[Segment],
    value: Value,
) -> Result<(), String> {
    let Some((last, parents)) = path.split_last() else {
        globals.insert(name, value);
        return Ok(());
    };

    let mut target = globals
        .get_mut(&name)
        .ok_or_else(|| format!("{} is not defined", name))?;
    for segment in parents {
        target = child_mut(target, segment)
            .ok_or_else(|| format!("cannot set property `{}` of undefined", last))?;
    }

    match target {
        Value::Object(map) => {
            map.insert(last.as_name(), value);
            Ok(())
        }
        Value::Array(items) => {
            let index = last
                .as_index()
                .ok_or_else(|| format!("cannot set property `{}` on an array", last))?;
            if index >= items.len() {
                if index - items.len() > MAX_ARRAY_GAP {
                    return Err(format!("array index {} is out of range", index));
                }
                items.resize(index + 1, Value::Null);
            }
            items[index] = value;
            Ok(())
        }
        other => Err(format!(
            "cannot set property `{}` on {}",
            last,
            kind(other)
        )),
    }
}

fn is_ident_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

fn is_ident_part(c: char) -> bool {
    is_ident_start(c) || c.is_alphanumeric()
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn float(f: f64) -> Value {
    Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
}

/// Executes the data-assignment subset of a script against a set of globals.
///
/// Every reader skips the trivia in front of its token and never the trivia
/// after it, so statement terminators can see the line break that ends a
/// statement without a semicolon.
pub(crate) struct Interpreter<'g> {
    src: Vec<char>,
    pos: usize,
    depth: usize,
    globals: &'g mut HashMap<String, Value>,
}

impl<'g> Interpreter<'g> {
    pub(crate) fn new(source: &str, globals: &'g mut HashMap<String, Value>) -> Self {
        Self {
            src: source.chars().collect(),
            pos: 0,
            depth: 0,
            globals,
        }
    }

    pub(crate) fn run(mut self) -> Result<(), ScriptError> {
        loop {
            self.skip_trivia()?;
            if self.at_end() {
                return Ok(());
            }
            self.statement()?;
        }
    }

    fn statement(&mut self) -> Result<(), ScriptError> {
        if self.eat_token(';')? {
            return Ok(());
        }

        let start = self.pos;
        let keyword = self.identifier()?;
        match keyword.as_str() {
            "var" | "let" | "const" => self.declaration()?,
            _ => {
                self.pos = start;
                self.assignment()?;
            }
        }
        self.terminator()
    }

    fn declaration(&mut self) -> Result<(), ScriptError> {
        loop {
            let name = self.identifier()?;
            if self.eat_token('=')? {
                let value = self.expression()?;
                self.globals.insert(name, value);
            } else {
                self.globals.entry(name).or_insert(Value::Null);
            }
            if !self.eat_token(',')? {
                return Ok(());
            }
        }
    }

    fn assignment(&mut self) -> Result<(), ScriptError> {
        let start = self.pos;
        let name = self.identifier()?;
        let mut path = Vec::new();
        loop {
            if self.eat_token('.')? {
                path.push(Segment::Name(self.identifier()?));
            } else if self.eat_token('[')? {
                let key = self.expression()?;
                self.expect_token(']')?;
                path.push(Segment::from_key(key));
            } else if self.eat_token('(')? {
                return Err(self.error_at(start, "function calls are not supported"));
            } else {
                break;
            }
        }
        self.expect_token('=')?;
        let value = self.expression()?;

        assign(self.globals, name, &path, value).map_err(|message| self.error_at(start, message))
    }

    fn terminator(&mut self) -> Result<(), ScriptError> {
        let line_break = self.skip_trivia()?;
        if self.at_end() || line_break || self.eat(';') {
            Ok(())
        } else {
            Err(self.error("expected `;` after statement"))
        }
    }

    fn expression(&mut self) -> Result<Value, ScriptError> {
        self.skip_trivia()?;
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error("expression nesting is too deep"));
        }

        let mut value = self.primary()?;
        loop {
            let start = self.pos;
            let segment = if self.eat_token('.')? {
                Segment::Name(self.identifier()?)
            } else if self.eat_token('[')? {
                let key = self.expression()?;
                self.expect_token(']')?;
                Segment::from_key(key)
            } else if self.eat_token('(')? {
                return Err(self.error_at(start, "function calls are not supported"));
            } else {
                break;
            };
            value = member(&value, &segment).map_err(|message| self.error_at(start, message))?;
        }

        self.depth -= 1;
        Ok(value)
    }

    fn primary(&mut self) -> Result<Value, ScriptError> {
        let c = self
            .peek()
            .ok_or_else(|| self.error("unexpected end of script"))?;
        match c {
            '{' => self.object(),
            '[' => self.array(),
            '"' | '\'' | '`' => Ok(Value::String(self.string()?)),
            '0'..='9' | '.' => self.number(false),
            '-' | '+' => {
                self.pos += 1;
                self.skip_trivia()?;
                match self.peek() {
                    Some(c) if is_ident_start(c) => {
                        let start = self.pos;
                        match self.identifier()?.as_str() {
                            "Infinity" | "NaN" => Ok(Value::Null),
                            other => Err(self.error_at(
                                start,
                                format!("unary operator on `{}` is not supported", other),
                            )),
                        }
                    }
                    _ => self.number(c == '-'),
                }
            }
            c if is_ident_start(c) => {
                let start = self.pos;
                let word = self.identifier()?;
                match word.as_str() {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" | "undefined" | "NaN" | "Infinity" => Ok(Value::Null),
                    "new" | "function" => Err(self.error_at(
                        start,
                        format!("`{}` expressions are not supported", word),
                    )),
                    _ => self
                        .globals
                        .get(&word)
                        .cloned()
                        .ok_or_else(|| self.error_at(start, format!("{} is not defined", word))),
                }
            }
            other => Err(self.error(format!("unexpected character `{}`", other))),
        }
    }

    fn object(&mut self) -> Result<Value, ScriptError> {
        self.pos += 1;
        let mut map = Map::new();
        loop {
            if self.eat_token('}')? {
                break;
            }
            let key = self.property_key()?;
            self.expect_token(':')?;
            let value = self.expression()?;
            map.insert(key, value);
            if !self.eat_token(',')? {
                self.expect_token('}')?;
                break;
            }
        }
        Ok(Value::Object(map))
    }

    fn property_key(&mut self) -> Result<String, ScriptError> {
        self.skip_trivia()?;
        match self.peek() {
            Some('"' | '\'') => self.string(),
            Some(c) if c.is_ascii_digit() || c == '.' => Ok(match self.number(false)? {
                Value::Number(n) => n.to_string(),
                _ => "NaN".to_string(),
            }),
            Some(c) if is_ident_start(c) => self.identifier(),
            _ => Err(self.error("expected property name")),
        }
    }

    fn array(&mut self) -> Result<Value, ScriptError> {
        self.pos += 1;
        let mut items = Vec::new();
        loop {
            if self.eat_token(']')? {
                break;
            }
            if self.eat_token(',')? {
                items.push(Value::Null);
                continue;
            }
            items.push(self.expression()?);
            if !self.eat_token(',')? {
                self.expect_token(']')?;
                break;
            }
        }
        Ok(Value::Array(items))
    }

    fn string(&mut self) -> Result<String, ScriptError> {
        let start = self.pos;
        let quote = self.src[self.pos];
        self.pos += 1;
        let mut out = String::new();
        loop {
            let c = self
                .bump()
                .ok_or_else(|| self.error_at(start, "unterminated string literal"))?;
            match c {
                c if c == quote => return Ok(out),
                '\\' => self.escape(&mut out)?,
                '$' if quote == '`' && self.peek() == Some('{') => {
                    return Err(self.error("template substitutions are not supported"))
                }
                c if quote != '`' && is_line_break(c) => {
                    return Err(self.error_at(start, "unterminated string literal"))
                }
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<(), ScriptError> {
        let c = self
            .bump()
            .ok_or_else(|| self.error("unterminated escape sequence"))?;
        match c {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !self.peek().is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            'x' => {
                let code = self.hex_digits(2)?;
                out.push(char::from_u32(code).unwrap_or('\u{fffd}'));
            }
            'u' => {
                let code = self.unicode_escape()?;
                out.push(code);
            }
            '\r' => {
                if self.peek() == Some('\n') {
                    self.pos += 1;
                }
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            other => out.push(other),
        }
        Ok(())
    }

    fn unicode_escape(&mut self) -> Result<char, ScriptError> {
        if self.eat('{') {
            let start = self.pos;
            while self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.pos += 1;
            }
            let digits: String = self.src[start..self.pos].iter().collect();
            if !self.eat('}') {
                return Err(self.error("malformed unicode escape"));
            }
            let code = u32::from_str_radix(&digits, 16)
                .map_err(|_| self.error_at(start, "malformed unicode escape"))?;
            return Ok(char::from_u32(code).unwrap_or('\u{fffd}'));
        }

        let high = self.hex_digits(4)?;
        if (0xD800..0xDC00).contains(&high) && self.looking_at("\\u") {
            let save = self.pos;
            self.pos += 2;
            let low = self.hex_digits(4)?;
            if (0xDC00..0xE000).contains(&low) {
                let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                return Ok(char::from_u32(code).unwrap_or('\u{fffd}'));
            }
            self.pos = save;
        }
        Ok(char::from_u32(high).unwrap_or('\u{fffd}'))
    }

    fn hex_digits(&mut self, count: usize) -> Result<u32, ScriptError> {
        let start = self.pos;
        let mut code = 0;
        for _ in 0..count {
            let digit = self
                .peek()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.error_at(start, "malformed hexadecimal escape"))?;
            code = code * 16 + digit;
            self.pos += 1;
        }
        Ok(code)
    }

    fn number(&mut self, negative: bool) -> Result<Value, ScriptError> {
        let start = self.pos;
        let radix = match (self.peek(), self.peek_at(1)) {
            (Some('0'), Some('x' | 'X')) => Some(16),
            (Some('0'), Some('o' | 'O')) => Some(8),
            (Some('0'), Some('b' | 'B')) => Some(2),
            _ => None,
        };

        if let Some(radix) = radix {
            self.pos += 2;
            let digits_start = self.pos;
            while self.peek().is_some_and(|c| c.is_digit(radix)) {
                self.pos += 1;
            }
            let digits: String = self.src[digits_start..self.pos].iter().collect();
            let magnitude = u64::from_str_radix(&digits, radix)
                .map_err(|_| self.error_at(start, "malformed number literal"))?;
            return Ok(match i64::try_from(magnitude) {
                Ok(n) if negative => Value::from(-n),
                Ok(n) => Value::from(n),
                Err(_) if negative => float(-(magnitude as f64)),
                Err(_) => Value::from(magnitude),
            });
        }

        let mut integral = true;
        self.digits();
        if self.peek() == Some('.') {
            integral = false;
            self.pos += 1;
            self.digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            integral = false;
            self.pos += 1;
            if matches!(self.peek(), Some('+' | '-')) {
                self.pos += 1;
            }
            self.digits();
        }

        let text: String = self.src[start..self.pos].iter().collect();
        if integral {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::from(if negative { -n } else { n }));
            }
        }
        let f: f64 = text
            .parse()
            .map_err(|_| self.error_at(start, format!("malformed number literal `{}`", text)))?;
        Ok(float(if negative { -f } else { f }))
    }

    fn digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.pos += 1;
        }
    }

    fn identifier(&mut self) -> Result<String, ScriptError> {
        self.skip_trivia()?;
        let start = self.pos;
        if !self.peek().is_some_and(is_ident_start) {
            return Err(match self.peek() {
                Some(c) => self.error(format!("expected identifier, found `{}`", c)),
                None => self.error("expected identifier, found end of script"),
            });
        }
        while self.peek().is_some_and(is_ident_part) {
            self.pos += 1;
        }
        Ok(self.src[start..self.pos].iter().collect())
    }

    /// Skips whitespace and comments, reporting whether a line break was crossed.
    fn skip_trivia(&mut self) -> Result<bool, ScriptError> {
        let mut line_break = false;
        loop {
            match self.peek() {
                Some(c) if is_line_break(c) => {
                    line_break = true;
                    self.pos += 1;
                }
                Some(c) if c.is_whitespace() || c == '\u{feff}' => self.pos += 1,
                Some('/') if self.peek_at(1) == Some('/') => self.skip_line(),
                Some('/') if self.peek_at(1) == Some('*') => {
                    let start = self.pos;
                    self.pos += 2;
                    loop {
                        match self.bump() {
                            Some('*') if self.eat('/') => break,
                            Some(c) if is_line_break(c) => line_break = true,
                            Some(_) => {}
                            None => return Err(self.error_at(start, "unterminated comment")),
                        }
                    }
                }
                Some('<') if self.looking_at("<!--") => self.skip_line(),
                Some('-') if (line_break || self.pos == 0) && self.looking_at("-->") => {
                    self.skip_line()
                }
                _ => return Ok(line_break),
            }
        }
    }

    fn skip_line(&mut self) {
        while self.peek().is_some_and(|c| !is_line_break(c)) {
            self.pos += 1;
        }
    }

    fn eat_token(&mut self, expected: char) -> Result<bool, ScriptError> {
        let save = self.pos;
        self.skip_trivia()?;
        if self.eat(expected) {
            Ok(true)
        } else {
            self.pos = save;
            Ok(false)
        }
    }

    fn expect_token(&mut self, expected: char) -> Result<(), ScriptError> {
        if self.eat_token(expected)? {
            return Ok(());
        }
        self.skip_trivia()?;
        Err(match self.peek() {
            Some(c) => self.error(format!("expected `{}`, found `{}`", expected, c)),
            None => self.error(format!("expected `{}`, found end of script", expected)),
        })
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn looking_at(&self, s: &str) -> bool {
        s.chars()
            .enumerate()
            .all(|(i, c)| self.peek_at(i) == Some(c))
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.src.get(self.pos + offset).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn error(&self, message: impl Into<String>) -> ScriptError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, pos: usize, message: impl Into<String>) -> ScriptError {
        ScriptError::at(&self.src, pos, message)
    }
}
