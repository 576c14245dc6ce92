//! Reading back documents produced by the encoder.
//!
//! The reader understands the subset of PDF the encoder writes: a header, a
//! single section of indirect objects, a plain cross-reference table and a
//! trailer.

use fnv::FnvHashMap;
use nom::{bytes, character, IResult, InputTake};
use nom_locate::LocatedSpan;
use nom_tracable::{tracable_parser, TracableInfo};

use crate::pdf::{RawDocument, Xref, XrefEntry};

use self::error::{TbParseError, TbParseErrorKind};
pub use self::{
    object::indirect_object,
    trailer::trailer,
    xref::{eof_marker_tail, startxref_tail, xref_table},
};

pub mod content;
pub mod error;
pub mod object;
pub mod trailer;
pub mod xref;

const HEADER_PREFIX: &[u8] = b"%PDF-";

pub type Span<'a> = LocatedSpan<&'a [u8], TracableInfo>;
pub type TbParseResult<'a, O> = IResult<Span<'a>, O, TbParseError<Span<'a>>>;

/// Wrap `input` into a span with forward and backward tracing enabled.
pub fn span(input: &[u8]) -> Span<'_> {
    let info = TracableInfo::new().forward(true).backward(true);
    LocatedSpan::new_extra(input, info)
}

/// Convert a parsed number into an index, failing with `kind` if it doesn't
/// fit.
pub(crate) fn to_usize<'a>(input: Span<'a>, value: u64, kind: TbParseErrorKind) -> Result<usize, nom::Err<TbParseError<Span<'a>>>> {
    usize::try_from(value).map_err(|_| nom::Err::Failure(TbParseError::new(input, kind)))
}

/// Try `parser` at every position of the last `limit` bytes, starting at the
/// end.
///
/// On success returns the input in front of the match together with the
/// parser's remainder and output.
pub(crate) fn backward_search<'a, O, P>(
    limit: usize,
    mut parser: P,
) -> impl FnMut(Span<'a>) -> TbParseResult<'a, (Span<'a>, O)>
where
    P: nom::Parser<Span<'a>, O, TbParseError<Span<'a>>>,
{
    move |input: Span<'a>| {
        let len = input.fragment().len();
        for start in (len.saturating_sub(limit)..len).rev() {
            let (tail, head) = input.take_split(start);
            if let Ok((trailing, out)) = parser.parse(tail) {
                return Ok((head, (trailing, out)));
            }
        }
        Err(nom::Err::Error(TbParseError::new(
            input,
            TbParseErrorKind::BackwardSearchNotFound,
        )))
    }
}

/// Skip the first `offset` bytes of `input`.
pub(crate) fn seek<'a>(input: Span<'a>, offset: usize, kind: TbParseErrorKind) -> TbParseResult<'a, ()> {
    if offset > input.fragment().len() {
        return Err(nom::Err::Failure(TbParseError::new(input, kind)));
    }
    let (remainder, _) = input.take_split(offset);
    Ok((remainder, ()))
}

#[tracable_parser]
pub fn header(input: Span) -> TbParseResult<(u8, u8)> {
    let (remainder, _) = bytes::complete::tag(HEADER_PREFIX)(input)?;
    let (remainder, major) = character::complete::u8(remainder)?;
    let (remainder, _) = character::complete::char('.')(remainder)?;
    let (remainder, minor) = character::complete::u8(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    Ok((remainder, (major, minor)))
}

/// Parse a complete document.
///
/// Every object listed as used in the cross-reference table is parsed at its
/// recorded offset; the object found there has to carry the number the table
/// assigns to it.
pub fn parse_complete(input: Span) -> TbParseResult<RawDocument> {
    let (_, version) = header(input)?;

    let (before_eof, _) = eof_marker_tail(input)?;
    let (_, startxref) = startxref_tail(before_eof)?;

    let (xref_input, _) = seek(input, startxref, TbParseErrorKind::StartxrefInvalid)?;
    let (remainder, entries) = xref_table(xref_input)?;
    let (_, trailer) = trailer(remainder)?;
    let xref = Xref::from(entries);

    let mut objects = FnvHashMap::default();
    for entry in xref.used_objects() {
        let (object_input, _) = seek(input, entry.byte_offset, TbParseErrorKind::XrefInvalid)?;
        let (_, object) = indirect_object(object_input)?;
        if object.index != entry.number || object.generation != entry.generation {
            log::warn!(
                "xref points to object {} at offset {}, found object {}",
                entry.number,
                entry.byte_offset,
                object.index
            );
            return Err(nom::Err::Failure(TbParseError::new(
                object_input,
                TbParseErrorKind::XrefOffsetMismatch,
            )));
        }
        if objects.insert(object.index, object).is_some() {
            log::warn!("object {} is listed twice in the xref table", entry.number);
        }
    }

    let free = xref
        .entries()
        .iter()
        .filter(|e| matches!(e, XrefEntry::Free(_)))
        .count();
    log::debug!(
        "read PDF {}.{} with {} objects and {} free entries",
        version.0,
        version.1,
        objects.len(),
        free
    );

    let (rest, _) = input.take_split(input.fragment().len());
    Ok((
        rest,
        RawDocument {
            version,
            objects,
            xref,
            trailer,
            startxref,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version() {
        let res = header(span(b"%PDF-1.4\n1 0 obj"));
        assert!(matches!(res, Ok((_, (1, 4)))));
        if let Ok((rest, _)) = res {
            assert_eq!(*rest.fragment(), &b"1 0 obj"[..]);
        }
    }

    #[test]
    fn test_invalid_header() {
        assert!(header(span(b"%PS-1.4\n")).is_err());
    }

    #[test]
    fn test_backward_search() {
        let input = span(b"abc startxref 12 xyz");
        let res = backward_search(64, bytes::complete::tag(&b"startxref"[..]))(input);
        let (head, (trailing, _)) = res.expect("startxref is present");
        assert_eq!(*head.fragment(), &b"abc "[..]);
        assert_eq!(*trailing.fragment(), &b" 12 xyz"[..]);
    }

    #[test]
    fn test_backward_search_respects_limit() {
        let input = span(b"startxref 0123456789");
        let res = backward_search(5, bytes::complete::tag(&b"startxref"[..]))(input);
        assert!(matches!(res, Err(nom::Err::Error(_))));
    }

    #[test]
    fn test_seek_past_end() {
        let res = seek(span(b"abc"), 4, TbParseErrorKind::StartxrefInvalid);
        assert!(matches!(res, Err(nom::Err::Failure(_))));
    }
}
