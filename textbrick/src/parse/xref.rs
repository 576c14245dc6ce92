use nom::{branch, bytes, character, combinator, multi};
use nom_tracable::tracable_parser;

use super::{
    backward_search,
    error::{TbParseError, TbParseErrorKind},
    to_usize, Span, TbParseResult,
};
use crate::pdf::{
    trailer::{EOF_MARKER, STARTXREF},
    xref::{FREE_MARKER, USED_MARKER, XREF},
    FreeObject, UsedObject, XrefEntry,
};

#[tracable_parser]
pub fn startxref_tail(input: Span) -> TbParseResult<usize> {
    let (remainder, (trailing, _)) = backward_search(STARTXREF.len() + 2048, bytes::complete::tag(STARTXREF))(input)?;
    let (trailing, _) = character::complete::multispace0(trailing)?;
    let (_, xref_pos) = character::complete::u64(trailing)?;
    let xref_pos: usize = xref_pos
        .try_into()
        .map_err(|_| nom::Err::Error(TbParseError::new(input, TbParseErrorKind::StartxrefInvalid)))?;

    Ok((remainder, xref_pos))
}

/// Find the `%%EOF` marker at the end of the input.
///
/// Only a trailing line ending may follow the marker.
#[tracable_parser]
pub fn eof_marker_tail(input: Span) -> TbParseResult<()> {
    let (remainder, (trailing, _)) = backward_search(EOF_MARKER.len() + 2, bytes::complete::tag(EOF_MARKER))(input)?;
    let (trailing, _) = character::complete::multispace0(trailing)?;
    if !trailing.fragment().is_empty() {
        log::warn!("Unexpected bytes after end of file marker: {:?}", trailing.fragment());
    }

    Ok((remainder, ()))
}

#[tracable_parser]
fn xref_entry(input: Span) -> TbParseResult<(u64, u32, bool)> {
    let (remainder, offset) = character::complete::u64(input)?;
    let (remainder, _) = character::complete::space1(remainder)?;
    let (remainder, gen) = character::complete::u32(remainder)?;
    let (remainder, _) = character::complete::space1(remainder)?;
    let (remainder, used) = branch::alt((
        combinator::value(true, bytes::complete::tag(USED_MARKER)),
        combinator::value(false, bytes::complete::tag(FREE_MARKER)),
    ))(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    Ok((remainder, (offset, gen, used)))
}

#[tracable_parser]
fn xref_subsection(input: Span) -> TbParseResult<Vec<XrefEntry>> {
    let (remainder, first) = character::complete::u64(input)?;
    let (remainder, _) = character::complete::space1(remainder)?;
    let (remainder, count) = character::complete::u64(remainder)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let first = to_usize(input, first, TbParseErrorKind::XrefInvalid)?;
    let count = to_usize(input, count, TbParseErrorKind::XrefInvalid)?;

    let (remainder, raw_entries) = multi::count(xref_entry, count)(remainder)?;

    let mut entries = Vec::with_capacity(raw_entries.len());
    for (i, (offset, generation, used)) in raw_entries.into_iter().enumerate() {
        let number = first + i;
        let offset = to_usize(input, offset, TbParseErrorKind::XrefInvalid)?;
        entries.push(if used {
            XrefEntry::Used(UsedObject {
                number,
                byte_offset: offset,
                generation,
            })
        } else {
            XrefEntry::Free(FreeObject {
                number,
                generation,
                next_free: offset,
            })
        });
    }

    Ok((remainder, entries))
}

/// Parse an `xref` keyword followed by one or more subsections.
#[tracable_parser]
pub fn xref_table(input: Span) -> TbParseResult<Vec<XrefEntry>> {
    let (remainder, _) = character::complete::multispace0(input)?;
    let (remainder, _) = bytes::complete::tag(XREF)(remainder)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, subsections) = multi::many1(xref_subsection)(remainder)?;

    Ok((remainder, subsections.into_iter().flatten().collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::span;

    #[test]
    fn test_startxref_tail() {
        let res = startxref_tail(span(b"         startxref\n2132"));
        assert!(matches!(res, Ok((_, 2132))));

        let res = startxref_tail(span(b"         startxref\n555\n%%EOF\n"));
        assert!(matches!(res, Ok((_, 555))));
    }

    #[test]
    fn test_invalid_startxref_tail() {
        // too big
        let res = startxref_tail(span(b"         startxref\n9999999999999999999999999999999"));
        assert!(matches!(res, Err(nom::Err::Error(_))));
    }

    #[test]
    fn test_eof_marker_tail() {
        let res = eof_marker_tail(span(b"startxref\n9\n%%EOF\n"));
        let (before, _) = res.expect("marker is present");
        assert_eq!(*before.fragment(), &b"startxref\n9\n"[..]);

        assert!(eof_marker_tail(span(b"startxref\n9\n")).is_err());
    }

    #[test]
    fn test_xref_table() {
        let input = concat!(
            "xref\n",
            "0 3\n",
            "0000000000 65535 f \n",
            "0000000009 00000 n \n",
            "0000000058 00000 n \n",
            "trailer\n"
        );
        let (rest, entries) = xref_table(span(input.as_bytes())).expect("valid table");
        assert_eq!(*rest.fragment(), &b"trailer\n"[..]);
        assert_eq!(
            entries,
            vec![
                XrefEntry::Free(FreeObject {
                    number: 0,
                    generation: 65535,
                    next_free: 0
                }),
                XrefEntry::Used(UsedObject {
                    number: 1,
                    byte_offset: 9,
                    generation: 0
                }),
                XrefEntry::Used(UsedObject {
                    number: 2,
                    byte_offset: 58,
                    generation: 0
                }),
            ]
        );
    }

    #[test]
    fn test_xref_table_with_two_subsections() {
        let input = concat!(
            "xref\n",
            "0 1\n",
            "0000000000 65535 f \n",
            "4 1\n",
            "0000000120 00000 n \n",
        );
        let (_, entries) = xref_table(span(input.as_bytes())).expect("valid table");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].number(), 4);
    }

    #[test]
    fn test_xref_table_short_subsection() {
        let input = concat!("xref\n", "0 2\n", "0000000000 65535 f \n", "trailer\n");
        assert!(xref_table(span(input.as_bytes())).is_err());
    }
}
