//! Constants used throughout the fieldpath library.
//!
//! This module provides central definitions for the structural characters of the
//! field path syntax and the timestamp conventions used by row mutations.

/// Separator between field path components.
pub const FIELD_PATH_DELIMITER: char = '.';

/// Quote character wrapping a component that is not a simple identifier.
pub const BACKTICK: char = '`';

/// Escape character used inside a quoted component.
pub const BACKSLASH: char = '\\';

/// Characters that may never appear in a field path component, quoted or not.
pub const RESERVED_CHARACTERS: [char; 5] = ['~', '*', '/', '[', ']'];

/// Rendered in place of an invalid field path by `Display`.
pub const INVALID_FIELD_PATH_DISPLAY: &str = "(invalid field path)";

/// A timestamp range bound of zero means the range is unbounded on that side.
pub const UNBOUNDED_TIMESTAMP: i64 = 0;

/// Cell timestamps are expressed in microseconds but stored at millisecond granularity.
pub const MICROS_PER_MILLI: i64 = 1_000;
