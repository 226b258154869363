//! Character-level rules for field path components.
//!
//! A component is written either bare (`profile`) or quoted with backticks
//! (`` `first.name` ``). A segment is quoted if and only if its first character is a
//! backtick, which is also the only form [`escape`] produces for non-identifiers, so
//! parsing and rendering agree on where a component begins and ends.
//!
//! Inside a quoted component the only escape sequences are `\\` and `` \` ``.
//! The reserved characters `~ * / [ ]` are rejected in every form.

use std::borrow::Cow;

use super::FieldPathError;
use crate::constants::{BACKSLASH, BACKTICK, FIELD_PATH_DELIMITER, RESERVED_CHARACTERS};

const QUOTE_BYTE: u8 = BACKTICK as u8;
const ESCAPE_BYTE: u8 = BACKSLASH as u8;

/// One token produced by [`split`], borrowed from the input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A component written without quotes.
    Bare(&'a str),
    /// The text between the backticks of a quoted component, still escaped.
    Quoted(&'a str),
}

impl Segment<'_> {
    /// Returns the literal component name this segment denotes.
    pub fn unescape(&self) -> String {
        match self {
            Segment::Bare(text) => (*text).to_string(),
            Segment::Quoted(text) => unescape(text),
        }
    }
}

/// Returns `true` if `component` contains any reserved character.
///
/// # Examples
///
/// ```rust
/// # use fieldpath::field_path::component::has_invalid_characters;
/// assert!(has_invalid_characters("a*b"));
/// assert!(has_invalid_characters("list[0]"));
/// assert!(!has_invalid_characters("first name"));
/// ```
pub fn has_invalid_characters(component: &str) -> bool {
    component.chars().any(|c| RESERVED_CHARACTERS.contains(&c))
}

/// Returns `true` if `component` matches `[A-Za-z_][A-Za-z0-9_]*`.
pub fn is_simple_identifier(component: &str) -> bool {
    let mut chars = component.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// Replaces every occurrence of `find` in `string` with `replace`.
///
/// Matches are consumed leftmost-first and never overlap, so `"aaa"` with
/// `find = "aa"` yields one replacement followed by the trailing `"a"`.
/// An empty `find` leaves the string unchanged.
pub fn replace_all(string: &str, find: &str, replace: &str) -> String {
    if find.is_empty() {
        return string.to_string();
    }

    let mut result = String::with_capacity(string.len());
    let mut rest = string;
    while let Some(index) = rest.find(find) {
        result.push_str(&rest[..index]);
        result.push_str(replace);
        rest = &rest[index + find.len()..];
    }
    result.push_str(rest);
    result
}

/// Renders a component in its canonical API form.
///
/// Simple identifiers are returned unchanged. Anything else, including the empty
/// string, is wrapped in backticks with backslashes and backticks escaped.
///
/// # Examples
///
/// ```rust
/// # use fieldpath::field_path::component::escape;
/// assert_eq!(escape("name"), "name");
/// assert_eq!(escape("first.name"), "`first.name`");
/// assert_eq!(escape("a`b"), "`a\\`b`");
/// assert_eq!(escape(""), "``");
/// ```
pub fn escape(component: &str) -> Cow<'_, str> {
    if is_simple_identifier(component) {
        return Cow::Borrowed(component);
    }

    // Backslashes first, otherwise the backslash added for a backtick gets doubled.
    let escaped = replace_all(component, "\\", "\\\\");
    let escaped = replace_all(&escaped, "`", "\\`");
    Cow::Owned(format!("{BACKTICK}{escaped}{BACKTICK}"))
}

/// Reverses [`escape`] for the text between the backticks of a quoted component.
///
/// The input must be well formed, as guaranteed by [`split`]: every backslash
/// starts a `\\` or `` \` `` pair and no backtick appears unescaped.
pub fn unescape(quoted: &str) -> String {
    let unescaped = replace_all(quoted, "\\`", "`");
    replace_all(&unescaped, "\\\\", "\\")
}

/// Splits a field path string on its unquoted delimiters.
///
/// Delimiters inside a quoted segment are literal. Leading, trailing, or doubled
/// delimiters produce an error rather than an empty component, as does a backtick
/// anywhere in a bare segment.
///
/// # Examples
///
/// ```rust
/// # use fieldpath::field_path::component::{split, Segment};
/// let segments = split("a.`b.c`.d").unwrap();
/// assert_eq!(
///     segments,
///     vec![Segment::Bare("a"), Segment::Quoted("b.c"), Segment::Bare("d")]
/// );
/// assert!(split("a..b").is_err());
/// ```
pub fn split(path: &str) -> Result<Vec<Segment<'_>>, FieldPathError> {
    if path.is_empty() {
        return Err(FieldPathError::Empty);
    }

    let mut segments = Vec::new();
    let mut start = 0;
    loop {
        let rest = &path[start..];
        let (segment, consumed) = match rest.strip_prefix(BACKTICK) {
            Some(quoted) => {
                let close = closing_quote(path, start, quoted)?;
                (Segment::Quoted(&quoted[..close]), close + 2)
            }
            None => {
                let len = rest.find(FIELD_PATH_DELIMITER).unwrap_or(rest.len());
                let bare = &rest[..len];
                if bare.is_empty() {
                    return Err(FieldPathError::EmptySegment {
                        path: path.to_string(),
                        position: start,
                    });
                }
                if let Some(offset) = bare.find(BACKTICK) {
                    return Err(FieldPathError::UnexpectedBacktick {
                        path: path.to_string(),
                        position: start + offset,
                    });
                }
                (Segment::Bare(bare), len)
            }
        };
        segments.push(segment);

        let end = start + consumed;
        match path[end..].chars().next() {
            None => return Ok(segments),
            Some(FIELD_PATH_DELIMITER) => start = end + 1,
            Some(_) => {
                return Err(FieldPathError::MissingDelimiter {
                    path: path.to_string(),
                    position: end,
                });
            }
        }
    }
}

/// Finds the byte offset of the closing backtick within `quoted`.
///
/// `start` is the offset of the opening backtick in `path`, used for error positions.
fn closing_quote(path: &str, start: usize, quoted: &str) -> Result<usize, FieldPathError> {
    let bytes = quoted.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            QUOTE_BYTE => return Ok(i),
            ESCAPE_BYTE => match bytes.get(i + 1) {
                Some(&QUOTE_BYTE) | Some(&ESCAPE_BYTE) => i += 2,
                _ => {
                    return Err(FieldPathError::InvalidEscape {
                        path: path.to_string(),
                        position: start + 1 + i,
                    });
                }
            },
            _ => i += 1,
        }
    }

    Err(FieldPathError::UnterminatedQuote {
        path: path.to_string(),
    })
}

/// Validates one caller-supplied component and returns its literal name.
///
/// A part starting with a backtick must be exactly one quoted component and is
/// unescaped. Any other part is taken literally and may not contain the delimiter.
/// Reserved characters are rejected either way.
pub fn parse_component(part: &str) -> Result<String, FieldPathError> {
    let literal = if part.starts_with(BACKTICK) {
        match split(part)?.as_slice() {
            [segment @ Segment::Quoted(_)] => segment.unescape(),
            _ => {
                return Err(FieldPathError::InvalidCharacters {
                    component: part.to_string(),
                });
            }
        }
    } else if part.contains(FIELD_PATH_DELIMITER) {
        return Err(FieldPathError::InvalidCharacters {
            component: part.to_string(),
        });
    } else {
        part.to_string()
    };

    validate(literal)
}

/// Checks a literal component name for reserved characters.
pub fn validate(component: String) -> Result<String, FieldPathError> {
    if has_invalid_characters(&component) {
        return Err(FieldPathError::InvalidCharacters { component });
    }
    Ok(component)
}
