use nom::{branch, bytes, character, combinator, multi, sequence, InputTake};
use nom_tracable::tracable_parser;

use super::{
    error::{TbParseError, TbParseErrorKind},
    to_usize, Span, TbParseResult,
};
use crate::pdf::{
    document::K_LENGTH, Array, Bytes, Dictionary, IndirectObject, Name, Object, PdfString, Reference, Stream,
};

const START_OBJECT: &[u8] = b"obj";
const END_OBJECT: &[u8] = b"endobj";
const START_STREAM: &[u8] = b"stream";
const END_STREAM: &[u8] = b"endstream";
const START_DICTIONARY: &[u8] = b"<<";
const END_DICTIONARY: &[u8] = b">>";
const REFERENCE_MARKER: char = 'R';

pub(crate) fn is_delimiter(chr: u8) -> bool {
    matches!(chr, b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%')
}

pub(crate) fn is_regular(chr: u8) -> bool {
    !is_delimiter(chr) && !chr.is_ascii_whitespace()
}

/// Consume all whitespace. If input doesn't start with a whitespace, the next
/// char has to be a delimiter or the input has to end.
fn require_termination(input: Span) -> TbParseResult<()> {
    let (remainder, whitespace) = character::complete::multispace0(input)?;
    if whitespace.fragment().is_empty() && !remainder.fragment().is_empty() {
        bytes::complete::take_while_m_n(1, 1, is_delimiter)(remainder)?;
    }
    Ok((remainder, ()))
}

fn octal_escape(bytes: &[u8]) -> (u8, usize) {
    let digits = bytes
        .iter()
        .take(3)
        .take_while(|c| (b'0'..=b'7').contains(*c))
        .count();
    // high-order overflow is ignored
    let value = bytes[..digits]
        .iter()
        .fold(0u16, |acc, d| acc * 8 + u16::from(d - b'0'));
    (value as u8, digits)
}

/// Parse a literal string and resolve its escape sequences.
///
/// Balanced parentheses inside the string are kept as they are. An end of
/// line (`\r`, `\r\n` or `\n`) is read as a single `\n`.
#[tracable_parser]
pub fn literal_string(input: Span) -> TbParseResult<PdfString> {
    let (content, _) = character::complete::char('(')(input)?;
    let bytes = *content.fragment();

    let mut out = Vec::new();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => {
                i += 1;
                match bytes.get(i).copied() {
                    Some(b'n') => out.push(b'\n'),
                    Some(b'r') => out.push(b'\r'),
                    Some(b't') => out.push(b'\t'),
                    Some(b'b') => out.push(0x08),
                    Some(b'f') => out.push(0x0c),
                    Some(b'0'..=b'7') => {
                        let (value, digits) = octal_escape(&bytes[i..]);
                        out.push(value);
                        i += digits - 1;
                    }
                    // line continuation
                    Some(b'\r') => {
                        if bytes.get(i + 1) == Some(&b'\n') {
                            i += 1;
                        }
                    }
                    Some(b'\n') => {}
                    // `\(`, `\)`, `\\` and unknown escapes yield the char itself
                    Some(c) => out.push(c),
                    None => break,
                }
            }
            b'\r' => {
                out.push(b'\n');
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
            }
            b'(' => {
                depth += 1;
                out.push(b'(');
            }
            b')' if depth == 0 => {
                let (remainder, _) = content.take_split(i + 1);
                let (remainder, _) = character::complete::multispace0(remainder)?;
                return Ok((remainder, out.into()));
            }
            b')' => {
                depth -= 1;
                out.push(b')');
            }
            c => out.push(c),
        }
        i += 1;
    }

    Err(nom::Err::Failure(TbParseError::new(
        input,
        TbParseErrorKind::UnterminatedString,
    )))
}

/// Resolve `#xx` escapes. A `#` that isn't followed by two hex digits is kept.
fn decode_name(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'#' {
            if let Some(Ok(decoded)) = raw.get(i + 1..i + 3).map(hex::decode) {
                out.extend_from_slice(&decoded);
                i += 3;
                continue;
            }
        }
        out.push(raw[i]);
        i += 1;
    }
    out
}

#[tracable_parser]
pub fn name(input: Span) -> TbParseResult<Name> {
    let (remainder, _) = character::complete::char('/')(input)?;
    let (remainder, name) = bytes::complete::take_while(is_regular)(remainder)?;
    let (remainder, _) = require_termination(remainder)?;

    Ok((remainder, Name::new(decode_name(name.fragment()))))
}

#[tracable_parser]
pub fn integer(input: Span) -> TbParseResult<i64> {
    sequence::terminated(character::complete::i64, require_termination)(input)
}

#[tracable_parser]
pub fn reference(input: Span) -> TbParseResult<Reference> {
    let (remainder, index) = character::complete::u64(input)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, generation) = character::complete::u32(remainder)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, _) = character::complete::char(REFERENCE_MARKER)(remainder)?;
    let (remainder, _) = require_termination(remainder)?;

    let index = to_usize(input, index, TbParseErrorKind::Nom(nom::error::ErrorKind::Digit))?;
    Ok((remainder, Reference { index, generation }))
}

/// Containers (arrays and dictionaries) that may be nested in one object.
pub const MAX_NESTING: usize = 64;

/// Fail once `depth` containers are already open around `input`.
fn check_nesting(input: Span, depth: usize) -> TbParseResult<()> {
    if depth >= MAX_NESTING {
        return Err(nom::Err::Failure(TbParseError::new(
            input,
            TbParseErrorKind::NestingTooDeep,
        )));
    }
    Ok((input, ()))
}

fn nested_array(input: Span, depth: usize) -> TbParseResult<Array> {
    let (remainder, _) = character::complete::char('[')(input)?;
    let (remainder, _) = check_nesting(remainder, depth)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, array) = multi::fold_many0(
        |i| nested_object(i, depth + 1),
        Array::new,
        |mut acc, obj| {
            acc.push(obj);
            acc
        },
    )(remainder)?;
    let (remainder, _) = sequence::terminated(character::complete::char(']'), require_termination)(remainder)?;

    Ok((remainder, array))
}

fn dictionary_entry(input: Span, depth: usize) -> TbParseResult<(Name, Object)> {
    let (remainder, name) = name(input)?;
    let (remainder, obj) = nested_object(remainder, depth)?;

    Ok((remainder, (name, obj)))
}

fn nested_dictionary(input: Span, depth: usize) -> TbParseResult<Dictionary> {
    let (remainder, _) = bytes::complete::tag(START_DICTIONARY)(input)?;
    let (remainder, _) = check_nesting(remainder, depth)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, dict) = multi::fold_many0(
        |i| dictionary_entry(i, depth + 1),
        Dictionary::new,
        |mut acc, (name, obj)| {
            if acc.insert(name, obj).is_some() {
                log::warn!("Duplicate dictionary key, keeping the last value");
            }
            acc
        },
    )(remainder)?;
    let (remainder, _) =
        sequence::terminated(bytes::complete::tag(END_DICTIONARY), require_termination)(remainder)?;

    Ok((remainder, dict))
}

/// `depth` counts the containers open around `input`.
fn nested_object(input: Span, depth: usize) -> TbParseResult<Object> {
    branch::alt((
        combinator::map(|i| nested_dictionary(i, depth), Object::Dictionary),
        combinator::map(|i| nested_array(i, depth), Object::Array),
        combinator::map(literal_string, Object::String),
        combinator::map(reference, Object::Reference),
        combinator::map(integer, Object::Integer),
        combinator::map(name, Object::Name),
    ))(input)
}

#[tracable_parser]
pub fn array(input: Span) -> TbParseResult<Array> {
    nested_array(input, 0)
}

#[tracable_parser]
pub fn dictionary(input: Span) -> TbParseResult<Dictionary> {
    nested_dictionary(input, 0)
}

/// Parse any direct object the encoder writes.
///
/// At most [`MAX_NESTING`] arrays and dictionaries may be nested.
#[tracable_parser]
pub fn object(input: Span) -> TbParseResult<Object> {
    nested_object(input, 0)
}

/// Read the stream data that follows `dictionary`.
///
/// `Length` has to be a direct, non negative integer and `endstream` has to
/// follow right after that many bytes.
fn stream_data<'a>(input: Span<'a>, dictionary: &Dictionary) -> TbParseResult<'a, Bytes> {
    let length_error = || nom::Err::Failure(TbParseError::new(input, TbParseErrorKind::StreamLength));

    let length = dictionary
        .get(K_LENGTH)
        .and_then(Object::integer)
        .and_then(|l| usize::try_from(l).ok())
        .ok_or_else(length_error)?;

    let (remainder, _) = character::complete::line_ending(input)?;
    let (remainder, data) =
        bytes::complete::take::<_, _, TbParseError<Span>>(length)(remainder).map_err(|_| length_error())?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, _) =
        bytes::complete::tag::<_, _, TbParseError<Span>>(END_STREAM)(remainder).map_err(|_| length_error())?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    Ok((remainder, Bytes::from(data.fragment().to_vec())))
}

/// Parse `N G obj`, the object, an optional stream body and `endobj`.
#[tracable_parser]
pub fn indirect_object(input: Span) -> TbParseResult<IndirectObject> {
    let (remainder, index) = character::complete::u64(input)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, generation) = character::complete::u32(remainder)?;
    let (remainder, _) = character::complete::multispace1(remainder)?;
    let (remainder, _) = bytes::complete::tag(START_OBJECT)(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, obj) = object(remainder)?;

    let (remainder, obj) = match obj {
        Object::Dictionary(dictionary) => {
            match bytes::complete::tag::<_, _, TbParseError<Span>>(START_STREAM)(remainder) {
                Ok((after_keyword, _)) => {
                    let (after_data, data) = stream_data(after_keyword, &dictionary)?;
                    (after_data, Object::Stream(Stream { dictionary, data }))
                }
                Err(_) => (remainder, Object::Dictionary(dictionary)),
            }
        }
        obj => (remainder, obj),
    };

    let (remainder, _) = bytes::complete::tag(END_OBJECT)(remainder)?;
    let (remainder, _) = require_termination(remainder)?;

    let index = to_usize(input, index, TbParseErrorKind::Nom(nom::error::ErrorKind::Digit))?;
    Ok((
        remainder,
        IndirectObject {
            index,
            generation,
            object: obj,
        },
    ))
}
