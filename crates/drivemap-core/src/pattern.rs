//! Compiled mapping patterns.
//!
//! Mapping files were written for PCRE, so a key may carry delimiters and
//! trailing modifiers (`/^.*@sunet\.se$/i`). Every other key is used verbatim
//! as a bare expression (`^.*@sunet\.se$`, `@sunet\.se$|@kth\.se$`).
//!
//! # Delimiters
//!
//! A key counts as delimited only when all of these hold:
//!
//! - it starts with `/ # ~ % ! + |` or an opening bracket `( [ { <`;
//! - the closing delimiter exists (the last occurrence of the same character,
//!   or the bracket closing the opening one, counting nesting and escapes);
//! - the body between the delimiters is not empty;
//! - everything after the closing delimiter is a supported modifier.
//!
//! `@` is not a delimiter: mapping keys routinely start with a literal `@`.
//! When a delimited body fails to compile but the whole key compiles as a
//! bare expression, the bare reading is used.
//!
//! # Modifiers
//!
//! | Flag | Effect                                  |
//! |------|-----------------------------------------|
//! | `i`  | case-insensitive                        |
//! | `m`  | `^`/`$` match at line boundaries        |
//! | `s`  | `.` matches newline                     |
//! | `x`  | whitespace and `#` comments ignored     |
//! | `U`  | swap greedy and lazy quantifiers        |
//! | `A`  | anchor the match at the start           |
//! | `u`  | accepted, the engine is always UTF-8    |
//! | `D`  | accepted, `$` already means end of text |

use std::fmt;

use regex::{Regex, RegexBuilder};

use crate::error::PatternError;

const SAME_DELIMITERS: &[char] = &['/', '#', '~', '%', '!', '+', '|'];
const BRACKET_DELIMITERS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}'), ('<', '>')];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Modifiers {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    swap_greed: bool,
    anchored: bool,
}

impl Modifiers {
    /// `None` when `flags` holds anything but supported modifiers.
    fn parse(flags: &str) -> Option<Self> {
        let mut modifiers = Self::default();
        for flag in flags.chars() {
            match flag {
                'i' => modifiers.case_insensitive = true,
                'm' => modifiers.multi_line = true,
                's' => modifiers.dot_matches_new_line = true,
                'x' => modifiers.ignore_whitespace = true,
                'U' => modifiers.swap_greed = true,
                'A' => modifiers.anchored = true,
                'u' | 'D' => {}
                _ => return None,
            }
        }
        Some(modifiers)
    }

    fn build(self, body: &str) -> Result<Regex, regex::Error> {
        let expression = if self.anchored {
            // A trailing `#` comment under `x` would swallow the closing paren.
            let terminator = if self.ignore_whitespace { "\n" } else { "" };
            format!(r"\A(?:{body}{terminator})")
        } else {
            body.to_string()
        };

        RegexBuilder::new(&expression)
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .swap_greed(self.swap_greed)
            .build()
    }
}

/// A mapping key compiled into a regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile a mapping key.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::Syntax`] when neither the delimited nor the
    /// bare reading of the key parses.
    pub fn compile(source: &str) -> Result<Self, PatternError> {
        let bare = || Modifiers::default().build(source);
        let compiled = match split_delimited(source) {
            Some((body, modifiers)) => modifiers
                .build(body)
                .or_else(|error| bare().map_err(|_| error)),
            None => bare(),
        };

        let regex = compiled.map_err(|error| PatternError::Syntax {
            pattern: source.to_string(),
            message: error.to_string(),
        })?;

        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// The key exactly as written in the mapping file.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Unanchored search, like `preg_match`.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Split a cleanly delimited key into its body and modifiers.
///
/// `None` means the key is a bare expression.
fn split_delimited(source: &str) -> Option<(&str, Modifiers)> {
    let first = source.chars().next()?;
    let body_start = first.len_utf8();

    let (end, closing) = if SAME_DELIMITERS.contains(&first) {
        let end = source.rfind(first).filter(|&end| end >= body_start)?;
        (end, first)
    } else {
        let &(open, close) = BRACKET_DELIMITERS.iter().find(|(open, _)| *open == first)?;
        (matching_close(source, open, close)?, close)
    };

    let body = &source[body_start..end];
    if body.is_empty() {
        return None;
    }
    let modifiers = Modifiers::parse(&source[end + closing.len_utf8()..])?;
    Some((body, modifiers))
}

/// Byte index of the bracket that closes the one opening `source`.
fn matching_close(source: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut escaped = false;
    for (index, ch) in source.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == open {
            depth += 1;
        } else if ch == close {
            depth -= 1;
            if depth == 0 {
                return Some(index);
            }
        }
    }
    None
}
