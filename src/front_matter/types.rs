use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

use chrono::NaiveDateTime;

/// Metadata parsed from the leading block of a content file
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// Every `key: value` line except the normalized `draft` and `created`
    pub fields: BTreeMap<String, String>,

    /// True only when the header said `draft: true` (any case)
    pub draft: bool,

    /// Parsed `created` value, or the time the header was parsed
    pub created: NaiveDateTime,
}

impl Header {
    /// Look up a raw header field
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// The `title` field, if any
    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }
}

/// Ways a header block can be malformed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// The text never contains the separator
    MissingSeparator,
    /// A header line has no `:`
    MalformedLine { line: usize, text: String },
    /// `created` is not a valid date/time literal
    InvalidDate { value: String },
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::MissingSeparator => write!(f, "missing header separator"),
            HeaderError::MalformedLine { line, text } => {
                write!(f, "header line {} is not a `key: value` pair: {:?}", line, text)
            }
            HeaderError::InvalidDate { value } => {
                write!(f, "invalid `created` date/time: {:?}", value)
            }
        }
    }
}

impl Error for HeaderError {}
