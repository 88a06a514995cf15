//! Style flags, format-code classification, and the style record.
//!
//! [`TextStyle`] is an immutable value: every transition returns a new style,
//! so parsers thread it through a fold instead of sharing a mutable
//! accumulator across calls.

use bitflags::bitflags;

use crate::color::{BASELINE, ColorEntry, color_by_code};

bitflags! {
    /// Toggle attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD          = 1 << 0;
        const ITALIC        = 1 << 1;
        const UNDERLINE     = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const OBFUSCATED    = 1 << 4;
    }
}

/// Toggle flags paired with their code characters, in canonical emission order.
pub const TOGGLES: [(StyleFlags, char); 5] = [
    (StyleFlags::BOLD, 'l'),
    (StyleFlags::ITALIC, 'o'),
    (StyleFlags::UNDERLINE, 'n'),
    (StyleFlags::STRIKETHROUGH, 'm'),
    (StyleFlags::OBFUSCATED, 'k'),
];

/// The reset code character.
pub const RESET_CODE: char = 'r';

impl StyleFlags {
    /// Classify a code character as a toggle flag (case-insensitive).
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        TOGGLES.iter().find(|(_, c)| *c == code).map(|(f, _)| *f)
    }

    /// The code character for a single flag.
    ///
    /// Returns `None` when `self` is not exactly one flag.
    #[must_use]
    pub fn code(self) -> Option<char> {
        TOGGLES.iter().find(|(f, _)| *f == self).map(|(_, c)| *c)
    }
}

/// A classified format-code character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatCode {
    /// A color selection.
    Color(&'static ColorEntry),
    /// A single toggle.
    Toggle(StyleFlags),
    /// Full reset to baseline.
    Reset,
}

impl FormatCode {
    /// Classify a code character (case-insensitive).
    ///
    /// Returns `None` for unrecognized codes; callers drop those silently.
    #[must_use]
    pub fn classify(code: char) -> Option<Self> {
        if code.to_ascii_lowercase() == RESET_CODE {
            return Some(Self::Reset);
        }
        if let Some(flag) = StyleFlags::from_code(code) {
            return Some(Self::Toggle(flag));
        }
        color_by_code(code).map(Self::Color)
    }
}

/// The style of one character: a color plus toggle flags.
///
/// The color is never absent; baseline gray stands in for "unstyled".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextStyle {
    /// Current color (a reference into the frozen table).
    pub color: &'static ColorEntry,
    /// Active toggles.
    pub flags: StyleFlags,
}

impl TextStyle {
    /// Baseline style: default color, all toggles off.
    ///
    /// The starting state of every parse and the post-reset state.
    pub const BASELINE: Self = Self {
        color: BASELINE,
        flags: StyleFlags::empty(),
    };

    /// Select a color, clearing all active toggles.
    ///
    /// A color code always resets the toggle set; this is the only place
    /// that rule is implemented.
    #[must_use]
    pub const fn with_color(color: &'static ColorEntry) -> Self {
        Self {
            color,
            flags: StyleFlags::empty(),
        }
    }

    /// Set one toggle, leaving the color and other toggles untouched.
    #[must_use]
    pub const fn with_flag(mut self, flag: StyleFlags) -> Self {
        self.flags = self.flags.union(flag);
        self
    }

    /// Apply a classified code: the state machine's transition function.
    #[must_use]
    pub const fn apply(self, code: FormatCode) -> Self {
        match code {
            FormatCode::Color(color) => Self::with_color(color),
            FormatCode::Toggle(flag) => self.with_flag(flag),
            FormatCode::Reset => Self::BASELINE,
        }
    }

    /// Whether this is exactly the baseline style.
    #[must_use]
    pub fn is_baseline(&self) -> bool {
        *self == Self::BASELINE
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::BASELINE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::color_by_name;

    // =========================================================================
    // Flag / code mapping
    // =========================================================================

    #[test]
    fn toggle_codes_round_trip() {
        for (flag, code) in TOGGLES {
            assert_eq!(StyleFlags::from_code(code), Some(flag));
            assert_eq!(flag.code(), Some(code));
        }
    }

    #[test]
    fn toggle_lookup_is_case_insensitive() {
        assert_eq!(StyleFlags::from_code('L'), Some(StyleFlags::BOLD));
        assert_eq!(StyleFlags::from_code('K'), Some(StyleFlags::OBFUSCATED));
    }

    #[test]
    fn combined_flags_have_no_single_code() {
        let both = StyleFlags::BOLD | StyleFlags::ITALIC;
        assert_eq!(both.code(), None);
        assert_eq!(StyleFlags::empty().code(), None);
    }

    // =========================================================================
    // Classification
    // =========================================================================

    #[test]
    fn classify_covers_all_kinds() {
        assert!(matches!(FormatCode::classify('6'), Some(FormatCode::Color(c)) if c.name == "gold"));
        assert_eq!(
            FormatCode::classify('l'),
            Some(FormatCode::Toggle(StyleFlags::BOLD))
        );
        assert_eq!(FormatCode::classify('r'), Some(FormatCode::Reset));
        assert_eq!(FormatCode::classify('R'), Some(FormatCode::Reset));
        assert_eq!(FormatCode::classify('z'), None);
        assert_eq!(FormatCode::classify('§'), None);
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    #[test]
    fn color_clears_toggles() {
        let gold = color_by_name("gold").unwrap();
        let style = TextStyle::BASELINE
            .with_flag(StyleFlags::BOLD)
            .with_flag(StyleFlags::UNDERLINE)
            .apply(FormatCode::Color(gold));
        assert_eq!(style.color.name, "gold");
        assert!(style.flags.is_empty());
    }

    #[test]
    fn toggle_preserves_color_and_other_flags() {
        let red = color_by_name("red").unwrap();
        let style = TextStyle::with_color(red)
            .with_flag(StyleFlags::BOLD)
            .with_flag(StyleFlags::ITALIC);
        assert_eq!(style.color.name, "red");
        assert!(style.flags.contains(StyleFlags::BOLD | StyleFlags::ITALIC));
        assert!(!style.flags.contains(StyleFlags::OBFUSCATED));
    }

    #[test]
    fn setting_an_active_toggle_is_idempotent() {
        let style = TextStyle::BASELINE.with_flag(StyleFlags::BOLD);
        assert_eq!(style, style.with_flag(StyleFlags::BOLD));
    }

    #[test]
    fn reset_restores_baseline() {
        let aqua = color_by_name("aqua").unwrap();
        let style = TextStyle::with_color(aqua).with_flag(StyleFlags::STRIKETHROUGH);
        assert_eq!(style.apply(FormatCode::Reset), TextStyle::BASELINE);
    }

    #[test]
    fn apply_matches_direct_transitions() {
        let gold = color_by_name("gold").unwrap();
        let start = TextStyle::BASELINE.with_flag(StyleFlags::BOLD);
        assert_eq!(
            start.apply(FormatCode::Color(gold)),
            TextStyle::with_color(gold)
        );
        assert_eq!(
            start.apply(FormatCode::Toggle(StyleFlags::ITALIC)),
            start.with_flag(StyleFlags::ITALIC)
        );
    }

    #[test]
    fn baseline_predicate() {
        assert!(TextStyle::BASELINE.is_baseline());
        assert!(TextStyle::default().is_baseline());
        assert!(!TextStyle::BASELINE.with_flag(StyleFlags::BOLD).is_baseline());
        let white = color_by_name("white").unwrap();
        assert!(!TextStyle::with_color(white).is_baseline());
    }
}
