//! [`Document`] → minimal format-coded string.
//!
//! The encoder diffs each character's style against an accumulator and emits
//! only the codes that change state. Unlike parsing, which carries style
//! across line boundaries, the accumulator here resets to *empty* at the
//! start of every line, so a line's first character always spells out its
//! color (and any active toggles) and re-parses identically no matter what
//! the previous line ended with.

use mctext_style::{SECTION_SIGN, StyleFlags, TOGGLES, TextStyle};

use crate::document::Document;

/// Encode a document as a format-coded string with one `\n` between lines.
///
/// Per character: a color code is emitted when the color differs from the
/// accumulator, or when an active toggle has to turn off (re-asserting the
/// color is the only way to clear toggles short of a reset, and the encoder
/// never emits a reset); toggle codes are emitted on off-to-on transitions
/// only. The result re-parses to an equal document.
#[must_use]
pub fn to_format_string(doc: &Document) -> String {
    let mut out = String::new();
    for (i, line) in doc.lines().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut prev: Option<TextStyle> = None;
        for sc in line.chars() {
            let style = sc.style;
            let acc = match prev {
                None => {
                    // Empty accumulator: the first character always emits
                    // its color code, baseline included.
                    push_code(&mut out, style.color.code);
                    StyleFlags::empty()
                }
                Some(p) => {
                    // A color code clears toggles on re-parse, so it is also
                    // required when the previous character had a toggle this
                    // one lacks.
                    if p.color != style.color || !style.flags.contains(p.flags) {
                        push_code(&mut out, style.color.code);
                        StyleFlags::empty()
                    } else {
                        p.flags
                    }
                }
            };
            for (flag, code) in TOGGLES {
                if style.flags.contains(flag) && !acc.contains(flag) {
                    push_code(&mut out, code);
                }
            }
            out.push(sc.ch);
            prev = Some(style);
        }
    }
    out
}

fn push_code(out: &mut String, code: char) {
    out.push(SECTION_SIGN);
    out.push(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DEFAULT_MAX_LINES, Line, StyledChar};
    use crate::parse::{LineBreak, parse_format_codes};
    use mctext_style::color_by_name;

    fn parse(input: &str) -> Document {
        parse_format_codes(input, DEFAULT_MAX_LINES, LineBreak::Newline)
    }

    fn styled(text: &str, style: TextStyle) -> Vec<StyledChar> {
        text.chars().map(|ch| StyledChar::new(ch, style)).collect()
    }

    // =========================================================================
    // Emission rules
    // =========================================================================

    #[test]
    fn first_character_emits_its_color() {
        let doc = Document::from_lines([Line::from_chars(styled("hi", TextStyle::BASELINE))]);
        assert_eq!(to_format_string(&doc), "§7hi");
    }

    #[test]
    fn unchanged_style_emits_no_further_codes() {
        let gold = color_by_name("gold").unwrap();
        let doc = Document::from_lines([Line::from_chars(styled(
            "abc",
            TextStyle::with_color(gold),
        ))]);
        assert_eq!(to_format_string(&doc), "§6abc");
    }

    #[test]
    fn toggle_emits_once_on_transition() {
        let gold = color_by_name("gold").unwrap();
        let plain = TextStyle::with_color(gold);
        let bold = plain.with_flag(StyleFlags::BOLD);
        let mut chars = styled("ab", plain);
        chars.extend(styled("cd", bold));
        let doc = Document::from_lines([Line::from_chars(chars)]);
        assert_eq!(to_format_string(&doc), "§6ab§lcd");
    }

    #[test]
    fn color_change_reemits_surviving_toggles() {
        let gold = color_by_name("gold").unwrap();
        let red = color_by_name("red").unwrap();
        let mut chars = styled("a", TextStyle::with_color(gold).with_flag(StyleFlags::BOLD));
        chars.extend(styled(
            "b",
            TextStyle::with_color(red).with_flag(StyleFlags::BOLD),
        ));
        let doc = Document::from_lines([Line::from_chars(chars)]);
        // The color code clears bold on re-parse, so bold re-emits after it.
        assert_eq!(to_format_string(&doc), "§6§la§c§lb");
    }

    #[test]
    fn toggle_loss_reasserts_color_not_reset() {
        let gold = color_by_name("gold").unwrap();
        let mut chars = styled("a", TextStyle::with_color(gold).with_flag(StyleFlags::BOLD));
        chars.extend(styled("b", TextStyle::with_color(gold)));
        let doc = Document::from_lines([Line::from_chars(chars)]);
        let encoded = to_format_string(&doc);
        assert_eq!(encoded, "§6§la§6b");
        assert!(!encoded.contains('r'));
    }

    #[test]
    fn lines_joined_with_single_newline_no_trailing() {
        let doc = Document::from_lines([
            Line::from_chars(styled("a", TextStyle::BASELINE)),
            Line::from_chars(styled("b", TextStyle::BASELINE)),
        ]);
        let encoded = to_format_string(&doc);
        assert_eq!(encoded, "§7a\n§7b");
        assert!(!encoded.ends_with('\n'));
    }

    #[test]
    fn empty_document_encodes_to_empty_string() {
        assert_eq!(to_format_string(&Document::new()), "");
    }

    #[test]
    fn empty_lines_encode_to_bare_newlines() {
        let doc = Document::from_lines([Line::new(), Line::new(), Line::new()]);
        assert_eq!(to_format_string(&doc), "\n\n");
    }

    // =========================================================================
    // Round trips
    // =========================================================================

    #[test]
    fn round_trip_concrete_scenario() {
        let doc = parse("§6Gold §lBold§r plain");
        let encoded = to_format_string(&doc);
        assert_eq!(parse(&encoded), doc);
    }

    #[test]
    fn round_trip_carried_style_then_baseline_line() {
        // Line 1 ends gold; line 2 is baseline. The encoder must spell out
        // line 2's baseline color or re-parsing would carry gold into it.
        let doc = parse("§6A\n§7B");
        let encoded = to_format_string(&doc);
        assert_eq!(parse(&encoded), doc);
    }

    #[test]
    fn round_trip_color_reselection() {
        let doc = parse("§6§lA§6B");
        let encoded = to_format_string(&doc);
        assert_eq!(parse(&encoded), doc);
    }

    #[test]
    fn round_trip_multi_line_accumulated_toggles() {
        let doc = parse("§l§o§ka\n§cb\nc§r§nd");
        let encoded = to_format_string(&doc);
        assert_eq!(parse(&encoded), doc);
    }

    #[test]
    fn encoding_is_stable_under_reencoding() {
        // encode(parse(encode(D))) == encode(D): the encoder's output is a
        // fixed point of the pipeline.
        let doc = parse("§6Gold §lBold§r plain\n§knoise");
        let once = to_format_string(&doc);
        let twice = to_format_string(&parse(&once));
        assert_eq!(once, twice);
    }
}
