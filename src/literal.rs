//! Strict parser for Python-style literal text
//!
//! Some catalog dumps store nested lists as `repr()` output rather than JSON:
//! single-quoted strings, `True`/`False`/`None`, tuples. This parser accepts that
//! grammar (and plain JSON, which is a subset of it once `true`/`false`/`null`
//! are allowed) and produces a `serde_json::Value`. Nothing is ever evaluated.

use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LiteralError {
    #[error("{message} at offset {position}")]
    Syntax { position: usize, message: String },

    #[error("unexpected end of input")]
    UnexpectedEnd,

    #[error("record does not match the expected shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Parse a complete literal; trailing non-whitespace is an error
pub fn parse(text: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser {
        chars: text.chars().collect(),
        pos: 0,
    };
    let value = parser.value()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        return Err(parser.syntax("trailing characters"));
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next(&mut self) -> Result<char, LiteralError> {
        let c = self.peek().ok_or(LiteralError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(c)
    }

    fn syntax(&self, message: impl Into<String>) -> LiteralError {
        LiteralError::Syntax {
            position: self.pos,
            message: message.into(),
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), LiteralError> {
        self.skip_whitespace();
        match self.next()? {
            c if c == expected => Ok(()),
            c => {
                self.pos -= 1;
                Err(self.syntax(format!("expected {:?}, found {:?}", expected, c)))
            }
        }
    }

    fn value(&mut self) -> Result<Value, LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd),
            Some('{') => self.dict(),
            Some('[') => self.sequence('[', ']'),
            Some('(') => self.sequence('(', ')'),
            Some('\'') | Some('"') => self.string().map(Value::String),
            Some(c) if c == '-' || c == '+' || c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) if c.is_ascii_alphabetic() => self.keyword(),
            Some(c) => Err(self.syntax(format!("unexpected {:?}", c))),
        }
    }

    fn dict(&mut self) -> Result<Value, LiteralError> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.pos += 1;
                return Ok(Value::Object(map));
            }
            let key = match self.value()? {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                _ => return Err(self.syntax("dictionary keys must be strings or numbers")),
            };
            self.expect(':')?;
            let value = self.value()?;
            map.insert(key, value);

            self.skip_whitespace();
            match self.next()? {
                ',' => continue,
                '}' => return Ok(Value::Object(map)),
                c => {
                    self.pos -= 1;
                    return Err(self.syntax(format!("expected ',' or '}}', found {:?}", c)));
                }
            }
        }
    }

    fn sequence(&mut self, open: char, close: char) -> Result<Value, LiteralError> {
        self.expect(open)?;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.pos += 1;
                return Ok(Value::Array(items));
            }
            items.push(self.value()?);

            self.skip_whitespace();
            match self.next()? {
                ',' => continue,
                c if c == close => return Ok(Value::Array(items)),
                c => {
                    self.pos -= 1;
                    return Err(self.syntax(format!("expected ',' or {:?}, found {:?}", close, c)));
                }
            }
        }
    }

    fn string(&mut self) -> Result<String, LiteralError> {
        let quote = self.next()?;
        let mut out = String::new();
        loop {
            match self.next()? {
                c if c == quote => return Ok(out),
                '\\' => self.escape(&mut out)?,
                c => out.push(c),
            }
        }
    }

    fn escape(&mut self, out: &mut String) -> Result<(), LiteralError> {
        match self.next()? {
            '\\' => out.push('\\'),
            '\'' => out.push('\''),
            '"' => out.push('"'),
            '/' => out.push('/'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'x' => {
                let code = self.hex(2)?;
                out.push(char::from_u32(code).ok_or_else(|| self.syntax("invalid \\x escape"))?);
            }
            'u' => {
                let code = self.hex(4)?;
                let c = if (0xD800..0xDC00).contains(&code) {
                    // high surrogate must be followed by its low half
                    if self.peek() != Some('\\') || self.chars.get(self.pos + 1) != Some(&'u') {
                        return Err(self.syntax("unpaired surrogate"));
                    }
                    self.pos += 2;
                    let low = self.hex(4)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(self.syntax("unpaired surrogate"));
                    }
                    char::from_u32(0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00))
                } else {
                    char::from_u32(code)
                };
                out.push(c.ok_or_else(|| self.syntax("invalid \\u escape"))?);
            }
            'U' => {
                let code = self.hex(8)?;
                out.push(char::from_u32(code).ok_or_else(|| self.syntax("invalid \\U escape"))?);
            }
            // unknown escapes are kept verbatim, as Python does
            other => {
                out.push('\\');
                out.push(other);
            }
        }
        Ok(())
    }

    fn hex(&mut self, digits: usize) -> Result<u32, LiteralError> {
        let mut code = 0u32;
        for _ in 0..digits {
            let c = self.next()?;
            let digit = c
                .to_digit(16)
                .ok_or_else(|| self.syntax(format!("invalid hex digit {:?}", c)))?;
            code = code * 16 + digit;
        }
        Ok(code)
    }

    fn number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        if matches!(self.peek(), Some('-') | Some('+')) {
            self.pos += 1;
        }
        let mut is_float = false;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' | '_' => {}
                '.' => is_float = true,
                'e' | 'E' => {
                    is_float = true;
                    if matches!(self.chars.get(self.pos + 1), Some('-') | Some('+')) {
                        self.pos += 1;
                    }
                }
                _ => break,
            }
            self.pos += 1;
        }

        let text: String = self.chars[start..self.pos]
            .iter()
            .filter(|c| **c != '_')
            .collect();

        if !is_float {
            if let Ok(n) = text.parse::<i64>() {
                return Ok(Value::Number(n.into()));
            }
        }
        text.parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| LiteralError::Syntax {
                position: start,
                message: format!("invalid number {:?}", text),
            })
    }

    fn keyword(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            "None" | "null" => Ok(Value::Null),
            _ => Err(LiteralError::Syntax {
                position: start,
                message: format!("unknown name {:?}", word),
            }),
        }
    }
}
