//! Format-coded string → [`Document`] parsing.
//!
//! One state machine handles both line-break conventions; the variant is
//! selected by a [`LineBreak`] strategy so the transition logic exists once.
//!
//! The parser is defensively total: unknown codes, dangling markers, and
//! overflow past the line bound are absorbed, never errors.

use mctext_style::{FormatCode, SECTION_SIGN, TextStyle};

use crate::document::{Document, Line, StyledChar};

/// How a line-break token is spelled in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// A literal `\n` character.
    #[default]
    Newline,
    /// The two-character `\` `n` escape sequence.
    Escaped,
}

/// Parse a format-coded string into a document of at most `max_lines` lines.
///
/// The current style is carried forward across line boundaries within one
/// call; a new line does not reset it. `max_lines == 0` is clamped to 1.
///
/// Transition rules, applied left to right:
/// - a line-break token opens a new line, or, once the document already
///   holds `max_lines` lines, drops the rest of the input (truncation is
///   whole trailing lines, never a split);
/// - `§` plus a code character updates the style: a color replaces the whole
///   style and clears every toggle, a toggle sets one flag, reset restores
///   baseline; unrecognized codes (and a trailing `§`) are dropped with no
///   state change;
/// - any other character is appended to the open line with a copy of the
///   current style.
#[must_use]
pub fn parse_format_codes(input: &str, max_lines: usize, line_break: LineBreak) -> Document {
    let max_lines = max_lines.max(1);
    let mut lines: Vec<Line> = vec![Line::new()];
    let mut style = TextStyle::BASELINE;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        let is_break = match line_break {
            LineBreak::Newline => ch == '\n',
            LineBreak::Escaped => ch == '\\' && chars.peek() == Some(&'n'),
        };
        if is_break {
            if line_break == LineBreak::Escaped {
                chars.next();
            }
            if lines.len() == max_lines {
                tracing::debug!(max_lines, "line bound reached, dropping remaining input");
                break;
            }
            lines.push(Line::new());
            continue;
        }

        if ch == SECTION_SIGN {
            match chars.next() {
                Some(code) => match FormatCode::classify(code) {
                    Some(fc) => style = style.apply(fc),
                    None => tracing::trace!(%code, "unrecognized format code dropped"),
                },
                None => tracing::trace!("dangling marker at end of input dropped"),
            }
            continue;
        }

        if let Some(line) = lines.last_mut() {
            line.push(StyledChar::new(ch, style));
        }
    }

    Document::from_lines(lines)
}
