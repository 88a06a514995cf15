//! External rich-text editor tree → format-coded string.
//!
//! The editor hands over a node tree (text leaves carrying an ordered mark
//! list, containers carrying children). Flattening produces a string in the
//! same format-code alphabet the parser consumes, so editor content flows
//! through the rest of the pipeline unchanged.
//!
//! Color marks are resolved against the color table by **exact** hex match;
//! an unmatched color contributes no code, silently. No nearest-color
//! snapping happens here.

use serde::Deserialize;

use mctext_style::{ColorEntry, SECTION_SIGN, StyleFlags, color_by_hex};

/// A node of the external editor tree: a text leaf, a container, or both.
///
/// Deserialized leniently: every field is optional, and a node missing both
/// `text` and `content` contributes empty output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RichTextNode {
    /// Leaf text, if any.
    #[serde(default)]
    pub text: Option<String>,
    /// Ordered marks applied to the leaf text.
    #[serde(default)]
    pub marks: Vec<Mark>,
    /// Child nodes, flattened depth-first in list order.
    #[serde(default)]
    pub content: Vec<RichTextNode>,
}

/// A style mark on a text leaf.
#[derive(Debug, Clone, Deserialize)]
pub struct Mark {
    /// Mark type: `color`, `bold`, `italic`, `underline`, `strikethrough`,
    /// `obfuscated`. Unknown types are ignored.
    #[serde(rename = "type")]
    pub kind: String,
    /// Mark attributes; only `color` marks carry any.
    #[serde(default)]
    pub attrs: Option<MarkAttrs>,
}

/// Attributes of a mark.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarkAttrs {
    /// Color value: `#RGB`, `#RRGGBB`, or `rgb(r, g, b)`.
    #[serde(default)]
    pub color: Option<String>,
}

impl RichTextNode {
    /// Deserialize an editor tree from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Flatten this tree into a format-coded string.
    ///
    /// Per leaf: the color mark's code (if its value matches a table entry
    /// exactly), then each toggle mark's code in mark-list order, then the
    /// literal text. Containers concatenate children depth-first with no
    /// separator.
    #[must_use]
    pub fn to_format_string(&self) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(&self, out: &mut String) {
        if let Some(text) = &self.text {
            if let Some(mark) = self.marks.iter().find(|m| m.kind == "color") {
                match mark.resolve_color() {
                    Some(entry) => {
                        out.push(SECTION_SIGN);
                        out.push(entry.code);
                    }
                    None => tracing::trace!(attrs = ?mark.attrs, "unmatched color mark dropped"),
                }
            }
            for mark in &self.marks {
                if let Some(code) = toggle_code(&mark.kind) {
                    out.push(SECTION_SIGN);
                    out.push(code);
                }
            }
            out.push_str(text);
        }
        for child in &self.content {
            child.flatten_into(out);
        }
    }
}

impl Mark {
    /// Resolve a color mark's value against the table, exact match only.
    fn resolve_color(&self) -> Option<&'static ColorEntry> {
        let value = self.attrs.as_ref()?.color.as_deref()?;
        color_by_hex(&normalize_color(value)?)
    }
}

/// The code character for a toggle-named mark type.
fn toggle_code(kind: &str) -> Option<char> {
    let flag = match kind {
        "bold" => StyleFlags::BOLD,
        "italic" => StyleFlags::ITALIC,
        "underline" => StyleFlags::UNDERLINE,
        "strikethrough" => StyleFlags::STRIKETHROUGH,
        "obfuscated" => StyleFlags::OBFUSCATED,
        _ => return None,
    };
    flag.code()
}

/// Normalize a color value to canonical `#RRGGBB` form.
///
/// Accepts `#RGB`, `#RRGGBB`, and `rgb(r, g, b)`; anything else is `None`.
fn normalize_color(value: &str) -> Option<String> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        return normalize_hex(hex);
    }
    if let Some(inner) = value.strip_prefix("rgb(").and_then(|s| s.strip_suffix(')')) {
        return normalize_rgb_triple(inner);
    }
    None
}

fn normalize_hex(hex: &str) -> Option<String> {
    let hex = hex.trim();
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        // #rgb -> #rrggbb
        3 => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in hex.chars() {
                let c = c.to_ascii_uppercase();
                out.push(c);
                out.push(c);
            }
            Some(out)
        }
        6 => Some(format!("#{}", hex.to_ascii_uppercase())),
        _ => None,
    }
}

fn normalize_rgb_triple(inner: &str) -> Option<String> {
    let mut channels = inner.split(',');
    let r: u8 = channels.next()?.trim().parse().ok()?;
    let g: u8 = channels.next()?.trim().parse().ok()?;
    let b: u8 = channels.next()?.trim().parse().ok()?;
    if channels.next().is_some() {
        return None;
    }
    Some(format!("#{r:02X}{g:02X}{b:02X}"))
}
