pub mod parser;
pub mod template;

pub use parser::{parse_source, ParseError, ParsedSource};
pub use template::{format_bytes, render_source};
