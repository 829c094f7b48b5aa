#![forbid(unsafe_code)]

//! A small CSS selector subset for naming tour targets.
//!
//! Supported: compound simple selectors (`tag`, `*`, `#id`, `.class`,
//! `[attr]`, `[attr=value]`, `[attr="value"]`) and comma-separated selector
//! lists. Combinators (descendant, `>`, `+`, `~`) and pseudo-classes are
//! rejected; tour targets are expected to carry a stable id, class or data
//! attribute.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Why a selector string was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,
    #[error("unexpected character `{ch}` at offset {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("combinators are not supported (offset {pos})")]
    Combinator { pos: usize },
    #[error("expected a name at offset {pos}")]
    MissingName { pos: usize },
    #[error("unterminated attribute selector starting at offset {pos}")]
    UnterminatedAttribute { pos: usize },
    /// Raised by host element sources that parse selectors themselves.
    #[error("selector rejected by host: {0}")]
    Rejected(String),
}

/// Attribute condition inside `[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrMatch {
    pub name: String,
    /// `None` matches on presence alone.
    pub value: Option<String>,
}

/// A sequence of simple selectors that must all match one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    /// Lowercased tag name; `None` for `*` or when no tag is given.
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<AttrMatch>,
}

/// A parsed selector list. An element matches if any entry matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    alternatives: Vec<Compound>,
}

impl Selector {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Self, SelectorError> {
        if input.trim().is_empty() {
            return Err(SelectorError::Empty);
        }
        let mut alternatives = Vec::new();
        for (offset, part) in split_list(input) {
            let leading = part.len() - part.trim_start().len();
            let body = part.trim();
            if body.is_empty() {
                return Err(SelectorError::MissingName {
                    pos: offset + leading,
                });
            }
            alternatives.push(parse_compound(body, offset + leading)?);
        }
        Ok(Self { alternatives })
    }

    /// The comma-separated entries of this selector.
    pub fn alternatives(&self) -> &[Compound] {
        &self.alternatives
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, compound) in self.alternatives.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{compound}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bare = self.id.is_none() && self.classes.is_empty() && self.attrs.is_empty();
        match &self.tag {
            Some(tag) => f.write_str(tag)?,
            None if bare => f.write_str("*")?,
            None => {}
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        for attr in &self.attrs {
            match &attr.value {
                Some(value) if value.contains('"') => write!(f, "[{}='{}']", attr.name, value)?,
                Some(value) => write!(f, "[{}=\"{}\"]", attr.name, value)?,
                None => write!(f, "[{}]", attr.name)?,
            }
        }
        Ok(())
    }
}

/// Split on top-level commas, leaving quoted attribute values intact.
fn split_list(input: &str) -> Vec<(usize, &str)> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut quote = None;
    for (i, c) in input.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, ',') => {
                parts.push((start, &input[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push((start, &input[start..]));
    parts
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_')
}

struct Cursor<'a> {
    src: &'a str,
    pos: usize,
    base: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn offset(&self) -> usize {
        self.base + self.pos
    }

    fn name(&mut self) -> Result<&'a str, SelectorError> {
        let start = self.pos;
        while self.peek().is_some_and(is_name_char) {
            self.bump();
        }
        if start == self.pos {
            return Err(SelectorError::MissingName {
                pos: self.base + start,
            });
        }
        Ok(&self.src[start..self.pos])
    }
}

fn parse_compound(src: &str, base: usize) -> Result<Compound, SelectorError> {
    let mut cur = Cursor { src, pos: 0, base };
    let mut compound = Compound::default();

    match cur.peek() {
        Some('*') => {
            cur.bump();
        }
        Some(c) if is_name_char(c) => {
            compound.tag = Some(cur.name()?.to_ascii_lowercase());
        }
        _ => {}
    }

    while let Some(c) = cur.peek() {
        match c {
            // An element has one id, so `#a#b` can never match.
            '#' if compound.id.is_some() => {
                return Err(SelectorError::UnexpectedChar {
                    ch: '#',
                    pos: cur.offset(),
                });
            }
            '#' => {
                cur.bump();
                compound.id = Some(cur.name()?.to_string());
            }
            '.' => {
                cur.bump();
                compound.classes.push(cur.name()?.to_string());
            }
            '[' => {
                let open = cur.offset();
                cur.bump();
                compound.attrs.push(parse_attr(&mut cur, open)?);
            }
            c if c.is_whitespace() || matches!(c, '>' | '+' | '~') => {
                return Err(SelectorError::Combinator { pos: cur.offset() });
            }
            ch => {
                return Err(SelectorError::UnexpectedChar {
                    ch,
                    pos: cur.offset(),
                });
            }
        }
    }

    Ok(compound)
}

fn parse_attr(cur: &mut Cursor<'_>, open: usize) -> Result<AttrMatch, SelectorError> {
    let unterminated = SelectorError::UnterminatedAttribute { pos: open };
    let name = cur.name()?.to_ascii_lowercase();

    match cur.bump() {
        Some(']') => Ok(AttrMatch { name, value: None }),
        Some('=') => {
            let value = match cur.peek() {
                Some(quote @ ('"' | '\'')) => {
                    cur.bump();
                    let start = cur.pos;
                    loop {
                        match cur.bump() {
                            Some(c) if c == quote => break,
                            Some(_) => {}
                            None => return Err(unterminated),
                        }
                    }
                    cur.src[start..cur.pos - quote.len_utf8()].to_string()
                }
                _ => cur.name()?.to_string(),
            };
            match cur.bump() {
                Some(']') => Ok(AttrMatch {
                    name,
                    value: Some(value),
                }),
                Some(ch) => Err(SelectorError::UnexpectedChar {
                    ch,
                    pos: cur.offset() - ch.len_utf8(),
                }),
                None => Err(unterminated),
            }
        }
        Some(ch) => Err(SelectorError::UnexpectedChar {
            ch,
            pos: cur.offset() - ch.len_utf8(),
        }),
        None => Err(unterminated),
    }
}
