//! The canonical structured form: styled characters, lines, documents.
//!
//! A [`Document`] is what every conversion produces or consumes. Styling is
//! stored per character; maximal same-style runs are recovered at
//! serialization time, so the model never has to merge or split spans.

use smallvec::SmallVec;

use mctext_style::TextStyle;

/// Default line bound for a document.
pub const DEFAULT_MAX_LINES: usize = 4;

/// One character with its resolved style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledChar {
    /// The literal character.
    pub ch: char,
    /// Style in effect when the character was produced.
    pub style: TextStyle,
}

impl StyledChar {
    /// Create a styled character.
    #[inline]
    #[must_use]
    pub const fn new(ch: char, style: TextStyle) -> Self {
        Self { ch, style }
    }
}

/// An ordered sequence of styled characters. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    chars: Vec<StyledChar>,
}

impl Line {
    /// Create an empty line.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Create a line from styled characters.
    #[must_use]
    pub fn from_chars(chars: impl IntoIterator<Item = StyledChar>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// The styled characters.
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[StyledChar] {
        &self.chars
    }

    /// Append a styled character.
    #[inline]
    pub fn push(&mut self, ch: StyledChar) {
        self.chars.push(ch);
    }

    /// Number of characters.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the line has no characters.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The line's text with all styling stripped.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        self.chars.iter().map(|c| c.ch).collect()
    }
}

/// A bounded, ordered collection of styled lines.
///
/// The line count is bounded by the `max_lines` passed to the parse that
/// produced it; truncation drops whole trailing lines, never part of one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: SmallVec<[Line; DEFAULT_MAX_LINES]>,
}

impl Document {
    /// Create an empty document (zero lines).
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document directly from lines.
    #[must_use]
    pub fn from_lines(lines: impl IntoIterator<Item = Line>) -> Self {
        Self {
            lines: lines.into_iter().collect(),
        }
    }

    /// The lines, in order.
    #[inline]
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Whether the document has zero lines.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Append a line.
    #[inline]
    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// The document's text with all styling stripped, lines joined by `\n`.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.to_plain_text());
        }
        out
    }
}

impl FromIterator<Line> for Document {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}
