use crate::{
    layout::ConfigError,
    parse::error::{TbParseError, TbParseErrorKind},
    pdf::raw::DocumentError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TbError {
    Parse(TbParseErrorKind),
    Io(std::io::ErrorKind),
    Config(ConfigError),
    Document(DocumentError),
    Compression,
}

impl<I> From<nom::Err<TbParseError<I>>> for TbError {
    fn from(err: nom::Err<TbParseError<I>>) -> Self {
        match err {
            nom::Err::Incomplete(_) => TbError::Parse(TbParseErrorKind::Incomplete),
            nom::Err::Error(e) | nom::Err::Failure(e) => TbError::Parse(e.kind),
        }
    }
}

impl From<std::io::Error> for TbError {
    fn from(err: std::io::Error) -> Self {
        TbError::Io(err.kind())
    }
}

impl From<ConfigError> for TbError {
    fn from(err: ConfigError) -> Self {
        TbError::Config(err)
    }
}

impl From<DocumentError> for TbError {
    fn from(err: DocumentError) -> Self {
        TbError::Document(err)
    }
}

impl std::fmt::Display for TbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TbError::Parse(kind) => write!(f, "failed to parse PDF: {}", kind),
            TbError::Io(kind) => write!(f, "I/O error: {:?}", kind),
            TbError::Config(err) => write!(f, "invalid layout: {}", err),
            TbError::Document(err) => write!(f, "invalid document structure: {}", err),
            TbError::Compression => write!(f, "failed to decompress stream data"),
        }
    }
}

impl std::error::Error for TbError {}
