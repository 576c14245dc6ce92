use super::{Dictionary, Object, Reference};

pub const TRAILER: &[u8] = b"trailer";
pub const STARTXREF: &[u8] = b"startxref";
pub const EOF_MARKER: &[u8] = b"%%EOF";

pub const K_SIZE: &[u8] = b"Size";
pub const K_PREVIOUS: &[u8] = b"Prev";
pub const K_ROOT: &[u8] = b"Root";
pub const K_INFO: &[u8] = b"Info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrailerError {
    InvalidSize,
    MissingSize,
    InvalidRoot,
    MissingRoot,
    InvalidPrevious,
    InvalidInfo,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trailer {
    /// Highest object number used in the PDF document plus one.
    pub size: usize,

    /// Byte offset to the previous PDF section
    pub previous: Option<usize>,

    /// Reference to the root object.
    pub root: Reference,

    /// Information for this document.
    pub info: Option<Reference>,
}

impl Trailer {
    pub fn new(size: usize, root: Reference) -> Self {
        Self {
            size,
            previous: None,
            root,
            info: None,
        }
    }
}

impl From<Trailer> for Dictionary {
    fn from(trailer: Trailer) -> Self {
        let mut dict = Dictionary::new();
        dict.insert(K_SIZE.into(), Object::from(trailer.size));
        if let Some(prev) = trailer.previous {
            dict.insert(K_PREVIOUS.into(), Object::from(prev));
        }

        dict.insert(K_ROOT.into(), Object::Reference(trailer.root));

        if let Some(info) = trailer.info {
            dict.insert(K_INFO.into(), Object::Reference(info));
        }

        dict
    }
}

impl TryFrom<Dictionary> for Trailer {
    type Error = TrailerError;

    fn try_from(dict: Dictionary) -> Result<Self, Self::Error> {
        Ok(Trailer {
            size: dict
                .get(K_SIZE)
                .ok_or(TrailerError::MissingSize)?
                .integer()
                .ok_or(TrailerError::InvalidSize)?
                .try_into()
                .map_err(|_| TrailerError::InvalidSize)?,

            previous: dict
                .get(K_PREVIOUS)
                .map(|o| o.integer().ok_or(TrailerError::InvalidPrevious))
                .transpose()?
                .map(TryInto::try_into)
                .transpose()
                .map_err(|_| TrailerError::InvalidPrevious)?,

            root: dict
                .get(K_ROOT)
                .ok_or(TrailerError::MissingRoot)?
                .reference()
                .cloned()
                .ok_or(TrailerError::InvalidRoot)?,

            info: dict
                .get(K_INFO)
                .map(|o| o.reference().ok_or(TrailerError::InvalidInfo))
                .transpose()?
                .cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::Name;

    #[test]
    fn dictionary_round_trip() {
        let trailer = Trailer::new(8, Reference::new(1));
        let dict = Dictionary::from(trailer.clone());
        assert_eq!(dict.get(K_SIZE), Some(&Object::Integer(8)));
        assert_eq!(Trailer::try_from(dict), Ok(trailer));
    }

    #[test]
    fn missing_root() {
        let dict = Dictionary::from([(Name::from(K_SIZE), Object::Integer(3))]);
        assert_eq!(Trailer::try_from(dict), Err(TrailerError::MissingRoot));
    }

    #[test]
    fn negative_size() {
        let dict = Dictionary::from([
            (Name::from(K_SIZE), Object::Integer(-1)),
            (Name::from(K_ROOT), Object::from(Reference::new(1))),
        ]);
        assert_eq!(Trailer::try_from(dict), Err(TrailerError::InvalidSize));
    }

    #[test]
    fn root_must_be_reference() {
        let dict = Dictionary::from([
            (Name::from(K_SIZE), Object::Integer(3)),
            (Name::from(K_ROOT), Object::Integer(1)),
        ]);
        assert_eq!(Trailer::try_from(dict), Err(TrailerError::InvalidRoot));
    }
}
