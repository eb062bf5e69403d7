#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

pub use crate::parser::parser::parse;

/// Byte offset into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position(pub usize);

impl Position {
    pub fn null() -> Self {
        Position(0)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span {
            start: Position(start),
            end: Position(end),
        }
    }

    /// Span covering both `self` and `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

// Spans only locate nodes for diagnostics. Two trees that differ in layout
// alone compare equal.
impl PartialEq for Span {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// Returns the 1-based line number, the text of that line (without its
/// line break) and the byte offset of `position` within the line.
///
/// A position at the end of input resolves to the end of the last line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    let pos = position.min(source.len());

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();
        let is_open_last_line = end == source.len() && !line.ends_with('\n');

        if pos < end || is_open_last_line {
            let text = line.trim_end_matches(['\n', '\r']);
            return (line_number, text.to_string(), pos - start);
        }

        start = end;
        line_number += 1;
    }

    (line_number, String::new(), 0)
}

/// Renders `error` the way the command line reports it:
///
/// ```text
/// prog.v2:3:9: error: expected `;`, found `end`
///   |
/// 3 | x := 1 end
///   | -------^
///   = help: did you miss a semicolon?
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0);
    let (_, column) = error.line_column(source);

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = format!("{}:{}:{}: error: {}\n", file, line, column, error);
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let caret_offset = line_text
        .get(..line_pos)
        .map_or(line_pos, |prefix| prefix.chars().count());
    let arrows = caret_offset.saturating_sub(removed_whitespace) + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    if let ErrorTip::Suggestion(tip) = error.get_tip() {
        out.push_str(&format!("\n{:>padding$} help: {}", "=", tip));
    }

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}

#[cfg(test)]
mod tests {
    use crate::{errors::errors::ErrorImpl, parse};

    #[test]
    fn test_get_line_at_position() {
        let source = "Hello, world!\nsecond\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 30);
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("abc", 3);
        assert_eq!((line_number, line.as_str(), line_pos), (1, "abc", 3));

        let (line_number, line, line_pos) = super::get_line_at_position("abc\n", 4);
        assert_eq!((line_number, line.as_str(), line_pos), (2, "", 0));

        let (line_number, _, line_pos) = super::get_line_at_position("", 0);
        assert_eq!((line_number, line_pos), (1, 0));
    }

    #[test]
    fn test_render_error_points_at_token() {
        let source = "method f() begin\n  x := 1 end;\n";
        let error = parse(source).unwrap_err();
        assert!(matches!(error.get_kind(), ErrorImpl::Parse(_)));

        let rendered = super::render_error(&error, source, "prog.v2");
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "prog.v2:2:10: error: expected `;`, found `end`");
        assert_eq!(lines[2], "2 | x := 1 end;");
        assert_eq!(lines[3], "  | -------^");
        assert!(lines[4].contains("help:"));
    }
}
