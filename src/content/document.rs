use std::path::PathBuf;

use chrono::NaiveDateTime;

use crate::front_matter::Header;

/// A content file after parsing: header metadata plus converted body
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Path of the originating file
    pub source_path: PathBuf,

    /// File name of the originating file, e.g. `hello.md`
    pub file_name: String,

    /// Body converted to markup, header stripped
    pub content: String,

    /// Parsed header
    pub header: Header,
}

impl Document {
    pub fn is_draft(&self) -> bool {
        self.header.draft
    }

    pub fn created(&self) -> NaiveDateTime {
        self.header.created
    }

    pub fn title(&self) -> Option<&str> {
        self.header.title()
    }

    /// File name with the content extension removed, e.g. `hello`
    pub fn slug(&self, content_ext: &str) -> &str {
        strip_extension(&self.file_name, content_ext)
    }

    /// File name with the content extension swapped for `output_ext`
    pub fn output_name(&self, content_ext: &str, output_ext: &str) -> String {
        format!("{}.{}", self.slug(content_ext), output_ext)
    }
}

/// A document that has been written to the output directory
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocument {
    pub document: Document,

    /// Name of the written file, relative to the output directory
    pub output_name: String,
}

/// Strip a trailing `.ext` from `file_name`, if present
pub fn strip_extension<'a>(file_name: &'a str, ext: &str) -> &'a str {
    file_name
        .strip_suffix(ext)
        .and_then(|rest| rest.strip_suffix('.'))
        .unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front_matter::parse_header;

    fn document(file_name: &str) -> Document {
        Document {
            source_path: PathBuf::from("content").join(file_name),
            file_name: file_name.to_string(),
            content: String::new(),
            header: parse_header("title: T\n---\n", "---").unwrap(),
        }
    }

    #[test]
    fn test_output_name_swaps_extension() {
        assert_eq!(document("hello.md").output_name("md", "html"), "hello.html");
        assert_eq!(document("v1.2-notes.md").output_name("md", "html"), "v1.2-notes.html");
    }

    #[test]
    fn test_slug() {
        assert_eq!(document("hello.md").slug("md"), "hello");
        assert_eq!(document("readme.markdown").slug("md"), "readme.markdown");
    }

    #[test]
    fn test_strip_extension_needs_dot() {
        assert_eq!(strip_extension("cmd", "md"), "cmd");
        assert_eq!(strip_extension("a.md", "md"), "a");
    }
}
