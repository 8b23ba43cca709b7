use std::collections::BTreeMap;

use chrono::{Local, NaiveDateTime};

use crate::front_matter::dates::parse_timestamp;
use crate::front_matter::types::{Header, HeaderError};

/// Separator line between the header block and the body
pub const DEFAULT_SEPARATOR: &str = "---";

/// Parse the header block of `raw_text`, defaulting `created` to now
pub fn parse_header(raw_text: &str, separator: &str) -> Result<Header, HeaderError> {
    parse_header_at(raw_text, separator, Local::now().naive_local())
}

/// Parse the header block of `raw_text`, defaulting `created` to `now`.
///
/// The header block is everything before the first separator. Each of its
/// lines must be `key: value`; only the first `:` splits, so values may
/// contain colons. A repeated key keeps its last value.
pub fn parse_header_at(
    raw_text: &str,
    separator: &str,
    now: NaiveDateTime,
) -> Result<Header, HeaderError> {
    let (block, _) = raw_text
        .split_once(separator)
        .ok_or(HeaderError::MissingSeparator)?;

    let mut fields = BTreeMap::new();
    let block = block.trim();
    if !block.is_empty() {
        for (index, line) in block.lines().enumerate() {
            let (key, value) = line.split_once(':').ok_or_else(|| HeaderError::MalformedLine {
                line: index + 1,
                text: line.trim().to_string(),
            })?;
            fields.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    let draft = fields
        .remove("draft")
        .map(|value| value.to_lowercase() == "true")
        .unwrap_or(false);

    let created = match fields.remove("created") {
        Some(value) => parse_timestamp(&value).ok_or(HeaderError::InvalidDate { value })?,
        None => now,
    };

    Ok(Header { fields, draft, created })
}

/// The body of a content file: everything after the last separator, trimmed
pub fn extract_body<'a>(raw_text: &'a str, separator: &str) -> Result<&'a str, HeaderError> {
    raw_text
        .rsplit_once(separator)
        .map(|(_, body)| body.trim())
        .ok_or(HeaderError::MissingSeparator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2030, 6, 1).unwrap().and_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn test_one_entry_per_line_trimmed() {
        let text = "title:   Hello World  \nauthor: Ada\nsummary:a: b\n---\nbody";
        let header = parse_header_at(text, DEFAULT_SEPARATOR, fixed_now()).unwrap();

        assert_eq!(header.fields.len(), 3);
        assert_eq!(header.get("title"), Some("Hello World"));
        assert_eq!(header.get("author"), Some("Ada"));
        assert_eq!(header.get("summary"), Some("a: b"));
    }

    #[test]
    fn test_draft_is_case_insensitive() {
        for raw in ["true", "TRUE", "True", "tRuE"] {
            let text = format!("draft: {}\n---\nbody", raw);
            let header = parse_header_at(&text, DEFAULT_SEPARATOR, fixed_now()).unwrap();
            assert!(header.draft, "draft: {} should be a draft", raw);
            assert!(header.get("draft").is_none());
        }
    }

    #[test]
    fn test_draft_defaults_to_false() {
        let header = parse_header_at("draft: false\n---\n", DEFAULT_SEPARATOR, fixed_now()).unwrap();
        assert!(!header.draft);

        let header = parse_header_at("draft: yes\n---\n", DEFAULT_SEPARATOR, fixed_now()).unwrap();
        assert!(!header.draft);

        let header = parse_header_at("title: x\n---\n", DEFAULT_SEPARATOR, fixed_now()).unwrap();
        assert!(!header.draft);
    }

    #[test]
    fn test_created_is_parsed() {
        let header =
            parse_header_at("created: 2024-01-15\n---\n", DEFAULT_SEPARATOR, fixed_now()).unwrap();
        let midnight = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap().and_hms_opt(0, 0, 0).unwrap();
        assert_eq!(header.created, midnight);
        assert!(header.get("created").is_none());
    }

    #[test]
    fn test_created_defaults_to_now() {
        let before = Local::now().naive_local();
        let header = parse_header("title: x\n---\nbody", DEFAULT_SEPARATOR).unwrap();
        let after = Local::now().naive_local();

        assert!(header.created >= before - Duration::seconds(1));
        assert!(header.created <= after + Duration::seconds(1));
    }

    #[test]
    fn test_invalid_created_is_an_error() {
        let err = parse_header_at("created: someday\n---\n", DEFAULT_SEPARATOR, fixed_now())
            .unwrap_err();
        assert_eq!(err, HeaderError::InvalidDate { value: "someday".to_string() });
    }

    #[test]
    fn test_line_without_colon_is_an_error() {
        let err = parse_header_at("title: ok\njust words\n---\n", DEFAULT_SEPARATOR, fixed_now())
            .unwrap_err();
        assert_eq!(
            err,
            HeaderError::MalformedLine { line: 2, text: "just words".to_string() }
        );
    }

    #[test]
    fn test_missing_separator_is_an_error() {
        let err = parse_header_at("title: x\nno separator here", DEFAULT_SEPARATOR, fixed_now())
            .unwrap_err();
        assert_eq!(err, HeaderError::MissingSeparator);
    }

    #[test]
    fn test_empty_header_block() {
        let header = parse_header_at("---\nbody only", DEFAULT_SEPARATOR, fixed_now()).unwrap();
        assert!(header.fields.is_empty());
        assert!(!header.draft);
        assert_eq!(header.created, fixed_now());
    }

    #[test]
    fn test_custom_separator() {
        let header = parse_header_at("title: x\n+++\nbody", "+++", fixed_now()).unwrap();
        assert_eq!(header.title(), Some("x"));
    }

    #[test]
    fn test_repeated_key_keeps_last_value() {
        let header = parse_header_at("tag: a\ntag: b\n---\n", DEFAULT_SEPARATOR, fixed_now()).unwrap();
        assert_eq!(header.get("tag"), Some("b"));
    }

    #[test]
    fn test_extract_body_uses_last_separator() {
        let text = "title: x\n---\nintro\n---\n  closing words  \n";
        assert_eq!(extract_body(text, DEFAULT_SEPARATOR).unwrap(), "closing words");
    }

    #[test]
    fn test_extract_body_without_separator() {
        assert_eq!(
            extract_body("no header", DEFAULT_SEPARATOR).unwrap_err(),
            HeaderError::MissingSeparator
        );
    }
}
