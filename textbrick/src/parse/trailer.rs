use nom::{bytes, character};
use nom_tracable::tracable_parser;

use super::{error::TbParseError, object::dictionary, Span, TbParseResult};
use crate::pdf::{trailer::TRAILER, Trailer};

/// Parse the `trailer` keyword and its dictionary.
#[tracable_parser]
pub fn trailer(input: Span) -> TbParseResult<Trailer> {
    let (remainder, _) = character::complete::multispace0(input)?;
    let (remainder, _) = bytes::complete::tag(TRAILER)(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;
    let (remainder, dict) = dictionary(remainder)?;
    let (remainder, _) = character::complete::multispace0(remainder)?;

    let trailer = Trailer::try_from(dict).map_err(|err| nom::Err::Failure(TbParseError::new(input, err.into())))?;

    Ok((remainder, trailer))
}
