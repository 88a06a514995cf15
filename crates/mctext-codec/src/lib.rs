#![forbid(unsafe_code)]

//! Bidirectional codec for legacy format-coded text.
//!
//! The engine converts between three surfaces around one canonical form:
//! - [`parse_format_codes`]: format-coded string to [`Document`];
//! - [`to_component_tree`] / [`to_component_json`]: [`Document`] to
//!   rich-text JSON component tree, run-length merged;
//! - [`to_format_string`]: [`Document`] to minimal format-coded string;
//! - [`RichTextNode::to_format_string`]: external editor tree to the same
//!   format-code alphabet, feeding back into the parser.
//!
//! All conversions are pure, synchronous, and defensively total: malformed
//! input is absorbed, never an error. The only shared state is the frozen
//! color table in `mctext-style`.
//!
//! # Example
//! ```
//! use mctext_codec::{DEFAULT_MAX_LINES, LineBreak, parse_format_codes, to_format_string};
//!
//! let doc = parse_format_codes("§6Gold §lBold§r plain", DEFAULT_MAX_LINES, LineBreak::Newline);
//! assert_eq!(doc.to_plain_text(), "Gold Bold plain");
//!
//! // Round trip: re-parsing the encoded form yields an equal document.
//! let encoded = to_format_string(&doc);
//! assert_eq!(parse_format_codes(&encoded, DEFAULT_MAX_LINES, LineBreak::Newline), doc);
//! ```

pub mod component;
pub mod document;
pub mod encode;
pub mod parse;
pub mod rich;

pub use component::{TextComponent, to_component_json, to_component_tree};
pub use document::{DEFAULT_MAX_LINES, Document, Line, StyledChar};
pub use encode::to_format_string;
pub use parse::{LineBreak, parse_format_codes};
pub use rich::{Mark, MarkAttrs, RichTextNode};
