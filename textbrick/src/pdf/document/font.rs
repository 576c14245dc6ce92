use super::{dict_types, K_BASE_FONT, K_SUBTYPE, K_TYPE};
use crate::{
    layout::Layout,
    pdf::{Dictionary, Name, Object},
};

const TYPE1: &[u8] = b"Type1";

/// The single standard font shared by all pages.
pub fn font(layout: &Layout) -> Dictionary {
    Dictionary::from([
        (Name::from(K_TYPE), Object::from(Name::from(dict_types::FONT))),
        (Name::from(K_SUBTYPE), Object::from(Name::from(TYPE1))),
        (Name::from(K_BASE_FONT), Object::from(Name::from_str(layout.font.trim()))),
    ])
}
