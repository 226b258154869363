//! Field paths for addressing nested fields inside a document.
//!
//! A [`FieldPath`] is an ordered list of field names, one per nesting level. Paths
//! are built from explicit components or parsed from a dotted string, composed with
//! [`FieldPath::append`] and [`FieldPath::join`], and rendered to the single flat
//! string the remote API expects with [`FieldPath::to_api_repr`].
//!
//! # Invalid paths
//!
//! Construction never fails. A path that does not pass validation becomes an
//! *invalid* path instead, and every operation that composes an invalid path
//! produces another invalid path. Check [`FieldPath::is_valid`] (or call
//! [`FieldPath::ensure_valid`]) before handing a path to the server.
//!
//! # Usage
//!
//! ```rust
//! use fieldpath::FieldPath;
//!
//! let path = FieldPath::parse("user.`first.name`");
//! assert!(path.is_valid());
//! assert_eq!(path.components().collect::<Vec<_>>(), vec!["user", "first.name"]);
//!
//! let nested = path.append("initial");
//! assert_eq!(nested.to_api_repr(), "user.`first.name`.initial");
//!
//! assert!(!FieldPath::parse("user..name").is_valid());
//! ```

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::constants::{FIELD_PATH_DELIMITER, INVALID_FIELD_PATH_DISPLAY};

pub mod component;
pub mod errors;

pub use errors::FieldPathError;

/// Either the validated components, or the components retained for diagnostics.
#[derive(Debug, Clone)]
enum State {
    Valid(Vec<String>),
    Invalid(Vec<String>),
}

/// An ordered sequence of field names identifying a possibly nested field.
///
/// `FieldPath` is an immutable value. Equality and ordering compare components
/// element by element; all invalid paths are equal to each other and sort before
/// every valid path, so paths can be used as keys in ordered and hashed collections.
///
/// # Examples
///
/// ```rust
/// # use fieldpath::FieldPath;
/// let a = FieldPath::new(["a", "b"]);
/// let b = FieldPath::parse("a.b.c");
///
/// assert_eq!(a.to_api_repr(), "a.b");
/// assert!(a < b);
/// assert!(b.starts_with(&a));
/// assert!(FieldPath::invalid() < a);
/// ```
#[derive(Debug, Clone)]
pub struct FieldPath {
    state: State,
}

impl FieldPath {
    /// Creates a field path from its components.
    ///
    /// Each part is one field name. A part starting with a backtick is read as a
    /// quoted component and unescaped, which is the only way to store a name that
    /// contains the `.` delimiter. If any part contains reserved characters the
    /// result is invalid, but it keeps its components for diagnostics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use fieldpath::FieldPath;
    /// assert!(FieldPath::new(["user", "profile"]).is_valid());
    /// assert!(FieldPath::new(["a", "`b.c`"]).is_valid());
    /// assert!(!FieldPath::new(["a*b"]).is_valid());
    /// assert!(!FieldPath::new(["b.c"]).is_valid());
    /// ```
    pub fn new<I>(parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut components = Vec::new();
        let mut valid = true;

        for part in parts {
            let part = part.as_ref();
            match component::parse_component(part) {
                Ok(name) => components.push(name),
                Err(err) => {
                    debug!(component = part, error = %err, "Field path component failed validation");
                    valid = false;
                    components.push(part.to_string());
                }
            }
        }

        let state = if valid {
            State::Valid(components)
        } else {
            State::Invalid(components)
        };
        Self { state }
    }

    /// Returns the canonical invalid field path.
    pub fn invalid() -> Self {
        Self {
            state: State::Invalid(Vec::new()),
        }
    }

    /// Parses a dotted field path string.
    ///
    /// Returns [`FieldPath::invalid`] if the string is empty, has a leading,
    /// trailing, or doubled delimiter, contains a malformed quoted component, or
    /// contains reserved characters. Use [`FieldPath::try_parse`] to learn why.
    pub fn parse(path: &str) -> Self {
        Self::try_parse(path).unwrap_or_else(|err| {
            debug!(path, error = %err, "Rejected field path string");
            Self::invalid()
        })
    }

    /// Parses a dotted field path string, reporting why it was rejected.
    ///
    /// # Errors
    /// Returns a [`FieldPathError`] describing the first syntax or character error.
    pub fn try_parse(path: &str) -> Result<Self, FieldPathError> {
        let components = component::split(path)?
            .iter()
            .map(|segment| component::validate(segment.unescape()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            state: State::Valid(components),
        })
    }

    /// Returns a new path with the parsed `path` string appended.
    ///
    /// The suffix is parsed with the same rules as [`FieldPath::parse`]. The result
    /// is invalid if this path or the suffix is invalid.
    pub fn append(&self, path: &str) -> Self {
        if !self.is_valid() {
            return Self::invalid();
        }
        self.join(&Self::parse(path))
    }

    /// Returns a new path with the components of `other` appended.
    ///
    /// The result is invalid if either path is invalid.
    pub fn join(&self, other: &FieldPath) -> Self {
        match (&self.state, &other.state) {
            (State::Valid(head), State::Valid(tail)) => Self {
                state: State::Valid(head.iter().chain(tail).cloned().collect()),
            },
            _ => Self::invalid(),
        }
    }

    /// Renders the path as the unique string the server API expects.
    ///
    /// Components that are simple identifiers are emitted bare and everything else
    /// is backtick-quoted. An invalid path renders as the empty string.
    pub fn to_api_repr(&self) -> String {
        match &self.state {
            State::Valid(components) => {
                let mut repr = String::new();
                for (i, name) in components.iter().enumerate() {
                    if i > 0 {
                        repr.push(FIELD_PATH_DELIMITER);
                    }
                    repr.push_str(&component::escape(name));
                }
                repr
            }
            State::Invalid(_) => String::new(),
        }
    }

    /// Returns `true` if every component passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self.state, State::Valid(_))
    }

    /// Returns this path if it is valid.
    ///
    /// # Errors
    /// Returns [`FieldPathError::InvalidPath`] for an invalid path.
    pub fn ensure_valid(&self) -> Result<&Self, FieldPathError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(FieldPathError::InvalidPath)
        }
    }

    /// Returns an iterator over the literal component names.
    ///
    /// For an invalid path these are the components it was constructed from.
    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.parts().iter().map(String::as_str)
    }

    /// Returns the number of components in the path.
    pub fn len(&self) -> usize {
        self.parts().len()
    }

    /// Returns `true` if the path has no components.
    pub fn is_empty(&self) -> bool {
        self.parts().is_empty()
    }

    /// Returns the path without its last component.
    ///
    /// Returns `None` for the empty path and for invalid paths.
    pub fn parent(&self) -> Option<FieldPath> {
        match &self.state {
            State::Valid(components) => components.split_last().map(|(_, rest)| Self {
                state: State::Valid(rest.to_vec()),
            }),
            State::Invalid(_) => None,
        }
    }

    /// Returns the last component of a valid path, or `None` if empty or invalid.
    pub fn last(&self) -> Option<&str> {
        match &self.state {
            State::Valid(components) => components.last().map(String::as_str),
            State::Invalid(_) => None,
        }
    }

    /// Returns `true` if `prefix` is a leading run of this path's components.
    ///
    /// Always `false` when either path is invalid.
    pub fn starts_with(&self, prefix: &FieldPath) -> bool {
        match (&self.state, &prefix.state) {
            (State::Valid(components), State::Valid(prefix)) => components.starts_with(prefix),
            _ => false,
        }
    }

    fn parts(&self) -> &[String] {
        match &self.state {
            State::Valid(components) | State::Invalid(components) => components,
        }
    }
}

impl Default for FieldPath {
    /// The empty, valid path.
    fn default() -> Self {
        Self {
            state: State::Valid(Vec::new()),
        }
    }
}

impl PartialEq for FieldPath {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FieldPath {}

impl PartialOrd for FieldPath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FieldPath {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.state, &other.state) {
            (State::Invalid(_), State::Invalid(_)) => Ordering::Equal,
            (State::Invalid(_), State::Valid(_)) => Ordering::Less,
            (State::Valid(_), State::Invalid(_)) => Ordering::Greater,
            (State::Valid(a), State::Valid(b)) => a.cmp(b),
        }
    }
}

impl Hash for FieldPath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match &self.state {
            State::Valid(components) => {
                true.hash(state);
                components.hash(state);
            }
            State::Invalid(_) => false.hash(state),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.to_api_repr())
        } else {
            write!(f, "{INVALID_FIELD_PATH_DISPLAY}")
        }
    }
}

impl FromStr for FieldPath {
    type Err = FieldPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

/// Serializes as the API representation. Invalid paths cannot be serialized.
impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let path = self.ensure_valid().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&path.to_api_repr())
    }
}

/// Deserializes by parsing the API representation.
///
/// The empty string denotes the empty path, mirroring how it serializes.
impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = String::deserialize(deserializer)?;
        if repr.is_empty() {
            return Ok(Self::default());
        }
        Self::try_parse(&repr).map_err(serde::de::Error::custom)
    }
}

/// Constructs a [`FieldPath`] from component expressions.
///
/// Each argument is converted with `ToString` and treated as one component, exactly
/// as [`FieldPath::new`] does.
///
/// # Examples
///
/// ```rust
/// # use fieldpath::field_path;
/// let user = "user";
/// let path = field_path!(user, "profile", 3);
/// assert_eq!(path.to_api_repr(), "user.profile.`3`");
///
/// assert!(field_path!().is_empty());
/// ```
#[macro_export]
macro_rules! field_path {
    () => {
        $crate::FieldPath::default()
    };

    ($($component:expr),+ $(,)?) => {
        $crate::FieldPath::new([$(::std::string::ToString::to_string(&$component)),+])
    };
}
