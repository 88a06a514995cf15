//! [`Document`] → rich-text JSON component tree.
//!
//! The wire shape is the target protocol's rich-text component: a root with
//! empty text and an `extra` list of runs. Style fields appear only when
//! "on" (absence means inherit-default, never "explicitly off"), and the
//! wire names (`underlined`, `strikethrough`) intentionally differ from the
//! internal flag names.

use serde::Serialize;

use mctext_style::{BASELINE, StyleFlags, TextStyle};

use crate::document::{Document, Line};

/// One node of the rich-text component tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TextComponent {
    /// Literal text of this run (always present, possibly empty).
    pub text: String,
    /// Color name, omitted when baseline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underlined: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscated: Option<bool>,
    /// Child runs; present on the root only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra: Option<Vec<TextComponent>>,
}

impl TextComponent {
    /// An unstyled run.
    #[must_use]
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A run carrying a style.
    ///
    /// Baseline color and unset toggles are omitted rather than written as
    /// explicit defaults.
    #[must_use]
    fn run(text: String, style: TextStyle) -> Self {
        let on = |flag: StyleFlags| style.flags.contains(flag).then_some(true);
        Self {
            text,
            color: (style.color != BASELINE).then(|| style.color.name.to_string()),
            bold: on(StyleFlags::BOLD),
            italic: on(StyleFlags::ITALIC),
            underlined: on(StyleFlags::UNDERLINE),
            strikethrough: on(StyleFlags::STRIKETHROUGH),
            obfuscated: on(StyleFlags::OBFUSCATED),
            extra: None,
        }
    }
}

/// Serialize a document as a component tree.
///
/// Each line becomes its maximal same-style runs; an empty line becomes one
/// empty-text run so its position survives; one `{"text": "\n"}` run sits
/// between consecutive lines, never after the last.
#[must_use]
pub fn to_component_tree(doc: &Document) -> TextComponent {
    let mut extra = Vec::new();
    for (i, line) in doc.lines().iter().enumerate() {
        if i > 0 {
            extra.push(TextComponent::plain("\n"));
        }
        push_line_runs(line, &mut extra);
    }
    TextComponent {
        text: String::new(),
        extra: Some(extra),
        ..TextComponent::default()
    }
}

/// Serialize a document as component-tree JSON.
///
/// Convenience for collaborators that embed the tree verbatim as a string
/// field in larger records.
#[must_use]
pub fn to_component_json(doc: &Document) -> String {
    serde_json::to_string(&to_component_tree(doc)).unwrap_or_else(|_| "{}".to_string())
}

fn push_line_runs(line: &Line, out: &mut Vec<TextComponent>) {
    let mut chars = line.chars().iter();
    let Some(first) = chars.next() else {
        out.push(TextComponent::plain(""));
        return;
    };

    let mut run_style = first.style;
    let mut run_text = String::from(first.ch);
    for sc in chars {
        if sc.style != run_style {
            out.push(TextComponent::run(std::mem::take(&mut run_text), run_style));
            run_style = sc.style;
        }
        run_text.push(sc.ch);
    }
    out.push(TextComponent::run(run_text, run_style));
}
