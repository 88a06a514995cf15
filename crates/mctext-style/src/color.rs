//! The sixteen standard colors and their lookups.
//!
//! The table is frozen `const` data: components receive `&'static ColorEntry`
//! references and compare them structurally. There is no lazy construction
//! and no mutation after process start.

/// Marker character that introduces a format code.
pub const SECTION_SIGN: char = '§';

/// One row of the color table.
///
/// The three fields form a bijection: every name, hex value, and code
/// character appears exactly once across [`COLORS`], so a lookup by any
/// field identifies the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorEntry {
    /// Symbolic name used in the JSON component wire format (e.g. `"gold"`).
    pub name: &'static str,
    /// Canonical `#RRGGBB` value, uppercase.
    pub hex: &'static str,
    /// Format-code character (`0`–`9`, `a`–`f`).
    pub code: char,
}

/// The 16 standard colors, in code order.
pub const COLORS: [ColorEntry; 16] = [
    ColorEntry { name: "black", hex: "#000000", code: '0' },
    ColorEntry { name: "dark_blue", hex: "#0000AA", code: '1' },
    ColorEntry { name: "dark_green", hex: "#00AA00", code: '2' },
    ColorEntry { name: "dark_aqua", hex: "#00AAAA", code: '3' },
    ColorEntry { name: "dark_red", hex: "#AA0000", code: '4' },
    ColorEntry { name: "dark_purple", hex: "#AA00AA", code: '5' },
    ColorEntry { name: "gold", hex: "#FFAA00", code: '6' },
    ColorEntry { name: "gray", hex: "#AAAAAA", code: '7' },
    ColorEntry { name: "dark_gray", hex: "#555555", code: '8' },
    ColorEntry { name: "blue", hex: "#5555FF", code: '9' },
    ColorEntry { name: "green", hex: "#55FF55", code: 'a' },
    ColorEntry { name: "aqua", hex: "#55FFFF", code: 'b' },
    ColorEntry { name: "red", hex: "#FF5555", code: 'c' },
    ColorEntry { name: "light_purple", hex: "#FF55FF", code: 'd' },
    ColorEntry { name: "yellow", hex: "#FFFF55", code: 'e' },
    ColorEntry { name: "white", hex: "#FFFFFF", code: 'f' },
];

/// The baseline color: neutral gray.
///
/// This is the style color at document start and after any reset.
pub const BASELINE: &ColorEntry = &COLORS[7];

/// Look up a color by its format-code character (case-insensitive).
///
/// Returns `None` for unrecognized codes; toggles and reset are not colors
/// and also return `None` here.
#[must_use]
pub fn color_by_code(code: char) -> Option<&'static ColorEntry> {
    let code = code.to_ascii_lowercase();
    COLORS.iter().find(|c| c.code == code)
}

/// Look up a color by its symbolic name (case-insensitive).
#[must_use]
pub fn color_by_name(name: &str) -> Option<&'static ColorEntry> {
    COLORS.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

/// Look up a color by its `#RRGGBB` value (case-insensitive).
///
/// The match is exact: no nearest-color snapping.
#[must_use]
pub fn color_by_hex(hex: &str) -> Option<&'static ColorEntry> {
    COLORS.iter().find(|c| c.hex.eq_ignore_ascii_case(hex))
}
