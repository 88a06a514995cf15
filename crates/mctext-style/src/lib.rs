#![forbid(unsafe_code)]

//! Color table, format codes, and character style model.
//!
//! `mctext-style` is the leaf crate of the engine: frozen static color data
//! plus the immutable per-character style record every other component
//! consumes. It owns the format-code alphabet (a `§` marker followed by one
//! code character) and the style-transition rules a stream of codes implies.
//!
//! # Example
//! ```
//! use mctext_style::{FormatCode, StyleFlags, TextStyle, color_by_code};
//!
//! // Codes are case-insensitive; `6` is gold.
//! let gold = color_by_code('6').unwrap();
//! assert_eq!(gold.name, "gold");
//!
//! // Selecting a color clears active toggles.
//! let bold = TextStyle::BASELINE.with_flag(StyleFlags::BOLD);
//! let styled = bold.apply(FormatCode::Color(gold));
//! assert_eq!(styled, TextStyle::with_color(gold));
//! assert!(styled.flags.is_empty());
//!
//! // `apply` is the full transition function.
//! let reset = styled.apply(FormatCode::classify('r').unwrap());
//! assert_eq!(reset, TextStyle::BASELINE);
//! ```

pub mod color;
pub mod style;

pub use color::{
    BASELINE, COLORS, ColorEntry, SECTION_SIGN, color_by_code, color_by_hex, color_by_name,
};
pub use style::{FormatCode, RESET_CODE, StyleFlags, TOGGLES, TextStyle};
