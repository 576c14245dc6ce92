use nom::error::{ErrorKind, ParseError};

use crate::pdf::TrailerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TbParseErrorKind {
    InvalidTrailer(TrailerError),
    StartxrefInvalid,
    BackwardSearchNotFound,
    XrefInvalid,
    /// The object at an xref offset has another number.
    XrefOffsetMismatch,
    UnterminatedString,
    /// Missing, indirect or negative stream `Length`.
    StreamLength,
    /// Arrays and dictionaries nested deeper than the reader allows.
    NestingTooDeep,
    Incomplete,
    Nom(ErrorKind),
}

impl From<TrailerError> for TbParseErrorKind {
    fn from(err: TrailerError) -> Self {
        TbParseErrorKind::InvalidTrailer(err)
    }
}

impl std::fmt::Display for TbParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TbParseErrorKind::InvalidTrailer(err) => write!(f, "invalid trailer: {:?}", err),
            TbParseErrorKind::StartxrefInvalid => write!(f, "startxref points outside of the file"),
            TbParseErrorKind::BackwardSearchNotFound => write!(f, "end of file markers not found"),
            TbParseErrorKind::XrefInvalid => write!(f, "invalid cross-reference table"),
            TbParseErrorKind::XrefOffsetMismatch => write!(f, "cross-reference offset points to the wrong object"),
            TbParseErrorKind::UnterminatedString => write!(f, "unterminated string"),
            TbParseErrorKind::StreamLength => write!(f, "invalid stream length"),
            TbParseErrorKind::NestingTooDeep => write!(f, "objects nested too deeply"),
            TbParseErrorKind::Incomplete => write!(f, "unexpected end of input"),
            TbParseErrorKind::Nom(kind) => write!(f, "syntax error ({:?})", kind),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TbParseError<I> {
    pub input: I,
    pub kind: TbParseErrorKind,
    pub from: Option<Box<Self>>,
}

impl<I> TbParseError<I> {
    pub fn new(input: I, kind: TbParseErrorKind) -> Self {
        Self {
            input,
            kind,
            from: None,
        }
    }
}

impl<I> ParseError<I> for TbParseError<I> {
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Self {
            input,
            kind: TbParseErrorKind::Nom(kind),
            from: None,
        }
    }

    fn append(input: I, kind: ErrorKind, other: Self) -> Self {
        Self {
            input,
            kind: TbParseErrorKind::Nom(kind),
            from: Some(other.into()),
        }
    }
}
