//! Slide body markup
//!
//! Slide content is a line-oriented block. The first characters of each line
//! decide how it is presented:
//!
//! ```text
//! # Heading
//! * Bullet point
//! | code line (leading space after the bar is dropped, the rest is kept)
//! > Highlighted call-out
//! plain body text
//! ```
//!
//! Blank lines separate paragraphs.

/// One parsed line of a slide body
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichLine<'a> {
    Heading(&'a str),
    Bullet(&'a str),
    Code(&'a str),
    Callout(&'a str),
    Text(&'a str),
    Blank,
}

/// Parse a slide body into presentation lines
///
/// Leading and trailing blank lines are dropped and runs of blank lines
/// collapse into one.
///
/// # Examples
/// ```
/// use pybrix_trainer::content::markup::{parse, RichLine};
///
/// let lines = parse("# Title\n\n| print(\"hi\")");
/// assert_eq!(lines[0], RichLine::Heading("Title"));
/// assert_eq!(lines[1], RichLine::Blank);
/// assert_eq!(lines[2], RichLine::Code("print(\"hi\")"));
/// ```
pub fn parse(block: &str) -> Vec<RichLine<'_>> {
    let mut lines: Vec<RichLine<'_>> = Vec::new();

    for raw in block.lines() {
        let line = parse_line(raw);
        if line == RichLine::Blank && matches!(lines.last(), None | Some(RichLine::Blank)) {
            continue;
        }
        lines.push(line);
    }

    if lines.last() == Some(&RichLine::Blank) {
        lines.pop();
    }

    lines
}

fn parse_line(raw: &str) -> RichLine<'_> {
    // Code keeps its own indentation, so only the marker is located on the trimmed view
    let trimmed = raw.trim_start();
    if let Some(code) = trimmed.strip_prefix('|') {
        return RichLine::Code(code.strip_prefix(' ').unwrap_or(code).trim_end());
    }

    let trimmed = trimmed.trim_end();
    if trimmed.is_empty() {
        RichLine::Blank
    } else if let Some(rest) = trimmed.strip_prefix("# ") {
        RichLine::Heading(rest.trim())
    } else if let Some(rest) = trimmed.strip_prefix("* ") {
        RichLine::Bullet(rest.trim())
    } else if let Some(rest) = trimmed.strip_prefix("> ") {
        RichLine::Callout(rest.trim())
    } else {
        RichLine::Text(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_kinds() {
        let lines = parse("# Head\n* point\n> note\nbody");
        assert_eq!(
            lines,
            vec![
                RichLine::Heading("Head"),
                RichLine::Bullet("point"),
                RichLine::Callout("note"),
                RichLine::Text("body"),
            ]
        );
    }

    #[test]
    fn test_code_keeps_indentation() {
        let lines = parse("| for i in range(5):\n|     motor.run(100)");
        assert_eq!(lines[0], RichLine::Code("for i in range(5):"));
        assert_eq!(lines[1], RichLine::Code("    motor.run(100)"));
    }

    #[test]
    fn test_empty_code_line_is_code() {
        assert_eq!(parse("| a\n|\n| b")[1], RichLine::Code(""));
    }

    #[test]
    fn test_blank_lines_collapse() {
        let lines = parse("\n\none\n\n\n\ntwo\n\n");
        assert_eq!(
            lines,
            vec![RichLine::Text("one"), RichLine::Blank, RichLine::Text("two")]
        );
    }

    #[test]
    fn test_empty_block() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  ").is_empty());
    }
}
