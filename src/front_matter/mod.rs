pub mod dates;
pub mod parser;
pub mod types;

// Re-export the most common items for convenience
pub use dates::{format_timestamp, parse_timestamp};
pub use parser::{extract_body, parse_header, parse_header_at, DEFAULT_SEPARATOR};
pub use types::{Header, HeaderError};
