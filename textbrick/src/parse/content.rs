//! Extracting shown text from content streams.

use nom::{branch, bytes, character, combinator, multi, sequence};
use nom_tracable::tracable_parser;

use super::{object::literal_string, Span, TbParseResult};
use crate::pdf::PdfString;

const SHOW_TEXT: &[u8] = b"Tj";

fn is_token_end(chr: u8) -> bool {
    chr.is_ascii_whitespace() || chr == b'('
}

/// Collect the operands of every `Tj` operator in order of appearance.
///
/// Other operators and their operands are skipped.
#[tracable_parser]
pub fn shown_text(input: Span) -> TbParseResult<Vec<PdfString>> {
    let (remainder, shown) = multi::many0(sequence::preceded(
        character::complete::multispace0,
        branch::alt((
            combinator::map(sequence::terminated(literal_string, bytes::complete::tag(SHOW_TEXT)), Some),
            combinator::map(literal_string, |_| None),
            combinator::map(bytes::complete::take_till1(is_token_end), |_| None),
        )),
    ))(input)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    Ok((remainder, shown.into_iter().flatten().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::span;

    #[test]
    fn test_shown_text() {
        let content = b"BT\n/F1 11 Tf\n14 TL\n50 800 Td\n(Hello \\(world\\)) Tj\nT* (Second line) Tj\nET";
        let (rest, shown) = shown_text(span(content)).expect("valid content");
        assert!(rest.fragment().is_empty());
        assert_eq!(
            shown,
            vec![PdfString::from("Hello (world)"), PdfString::from("Second line")]
        );
    }

    #[test]
    fn test_empty_text_operand() {
        let (_, shown) = shown_text(span(b"BT\n() Tj\nET")).expect("valid content");
        assert_eq!(shown, vec![PdfString::from("")]);
    }

    #[test]
    fn test_string_without_show_operator() {
        let (_, shown) = shown_text(span(b"(ignored) Tx (kept) Tj")).expect("valid content");
        assert_eq!(shown, vec![PdfString::from("kept")]);
    }
}
