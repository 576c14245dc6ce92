use super::{dict_types, ObjectNumbering, K_PAGES, K_TYPE};
use crate::pdf::{Dictionary, Name, Object, Reference};

/// The document catalog, pointing at the page tree.
pub fn catalog(numbering: &ObjectNumbering) -> Dictionary {
    Dictionary::from([
        (Name::from(K_TYPE), Object::from(Name::from(dict_types::CATALOG))),
        (Name::from(K_PAGES), Object::from(Reference::new(numbering.pages()))),
    ])
}
