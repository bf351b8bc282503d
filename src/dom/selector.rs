//! CSS selector subset evaluated by the in-memory document.
//!
//! Supports selector lists of compound selectors: an optional tag name
//! followed by any number of `.class`, `#id` and attribute tests
//! (`[attr]`, `[attr="v"]`, `[attr^="v"]`). Combinators are rejected.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use std::collections::BTreeMap;

use crate::error::DomError;

/// Attribute test inside `[...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrMatch {
    Exists,
    Equals(String),
    Prefix(String),
}

/// One compound selector, e.g. `textarea[name="message"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Compound {
    pub tag: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attrs: Vec<(String, AttrMatch)>,
}

/// A comma-separated list of compound selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub alternatives: Vec<Compound>,
}

/// Element data a selector is tested against.
pub struct Candidate<'a> {
    pub tag: &'a str,
    pub classes: &'a [String],
    pub attrs: &'a BTreeMap<String, String>,
}

impl Selector {
    /// Parse a selector list.
    pub fn parse(raw: &str) -> Result<Self, DomError> {
        let fail = |reason: &str| DomError::Selector { selector: raw.to_owned(), reason: reason.to_owned() };

        let mut alternatives = Vec::new();
        for part in split_list(raw) {
            let part = part.trim();
            if part.is_empty() {
                return Err(fail("empty selector"));
            }
            if has_combinator(part) {
                return Err(fail("combinators are not supported"));
            }
            alternatives.push(parse_compound(part).map_err(|reason| fail(reason.as_str()))?);
        }
        Ok(Self { alternatives })
    }

    #[must_use]
    pub fn matches(&self, candidate: &Candidate<'_>) -> bool {
        self.alternatives.iter().any(|c| c.matches(candidate))
    }
}

impl Compound {
    #[must_use]
    pub fn matches(&self, candidate: &Candidate<'_>) -> bool {
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(candidate.tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if candidate.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| candidate.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|(name, test)| {
            let Some(value) = candidate.attrs.get(name) else {
                return false;
            };
            match test {
                AttrMatch::Exists => true,
                AttrMatch::Equals(expected) => value == expected,
                AttrMatch::Prefix(prefix) => value.starts_with(prefix.as_str()),
            }
        })
    }
}

/// Split a selector list on commas outside `[...]` and quotes.
fn split_list(raw: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0_i32;
    let mut quote: Option<char> = None;
    let mut start = 0;
    for (index, ch) in raw.char_indices() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') => depth -= 1,
            (None, ',') if depth == 0 => {
                parts.push(&raw[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    parts.push(&raw[start..]);
    parts
}

/// Whitespace outside `[...]` is a descendant combinator.
fn has_combinator(part: &str) -> bool {
    let mut depth = 0_i32;
    let mut quote: Option<char> = None;
    for ch in part.chars() {
        match (quote, ch) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '[') => depth += 1,
            (None, ']') => depth -= 1,
            (None, c) if c.is_whitespace() && depth == 0 => return true,
            (None, '>' | '+' | '~') if depth == 0 => return true,
            _ => {}
        }
    }
    false
}

fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

fn take_ident(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut out = String::new();
    while let Some(&ch) = chars.peek() {
        if !is_ident_char(ch) {
            break;
        }
        out.push(ch);
        chars.next();
    }
    out
}

fn parse_compound(part: &str) -> Result<Compound, String> {
    let mut compound = Compound::default();
    let mut chars = part.chars().peekable();

    let tag = take_ident(&mut chars);
    if !tag.is_empty() {
        compound.tag = Some(tag);
    } else if chars.peek() == Some(&'*') {
        chars.next();
    }

    while let Some(ch) = chars.next() {
        match ch {
            '.' => {
                let class = take_ident(&mut chars);
                if class.is_empty() {
                    return Err("expected class name after '.'".into());
                }
                compound.classes.push(class);
            }
            '#' => {
                let id = take_ident(&mut chars);
                if id.is_empty() {
                    return Err("expected id after '#'".into());
                }
                compound.id = Some(id);
            }
            '[' => compound.attrs.push(parse_attr(&mut chars)?),
            other => return Err(format!("unexpected character '{other}'")),
        }
    }

    Ok(compound)
}

fn parse_attr(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Result<(String, AttrMatch), String> {
    skip_spaces(chars);
    let name = take_ident(chars);
    if name.is_empty() {
        return Err("expected attribute name".into());
    }
    skip_spaces(chars);

    let prefix = match chars.next() {
        Some(']') => return Ok((name, AttrMatch::Exists)),
        Some('=') => false,
        Some('^') => {
            if chars.next() != Some('=') {
                return Err(format!("expected '^=' in [{name}...]"));
            }
            true
        }
        _ => return Err(format!("unsupported operator in [{name}...]")),
    };
    skip_spaces(chars);

    let value = match chars.peek().copied() {
        Some(q @ ('"' | '\'')) => {
            chars.next();
            let mut value = String::new();
            loop {
                match chars.next() {
                    Some(c) if c == q => break,
                    Some(c) => value.push(c),
                    None => return Err("unterminated attribute value".into()),
                }
            }
            value
        }
        _ => take_ident(chars),
    };
    skip_spaces(chars);
    if chars.next() != Some(']') {
        return Err("expected ']'".into());
    }

    let test = if prefix { AttrMatch::Prefix(value) } else { AttrMatch::Equals(value) };
    Ok((name, test))
}

fn skip_spaces(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) {
    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
}
