use std::{fmt::Display, ops::Deref};

pub use self::{
    object::{Array, IndirectObject, Name, PdfString, Reference, Stream},
    raw::{DocumentError, RawDocument},
    trailer::{Trailer, TrailerError},
    xref::{FreeObject, UsedObject, Xref, XrefEntry},
};

pub mod document;
pub mod object;
pub mod raw;
pub mod trailer;
pub mod xref;

/// Version written into the header of every produced document.
pub const PDF_VERSION: (u8, u8) = (1, 4);

/// A complete, single-section document that is ready to be serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfSection {
    pub(crate) version: (u8, u8),
    /// Objects in ascending number order.
    pub(crate) objects: Vec<IndirectObject>,
    pub(crate) root: Reference,
}

impl PdfSection {
    pub fn new(version: (u8, u8), mut objects: Vec<IndirectObject>, root: Reference) -> Self {
        objects.sort_by_key(|o| o.index);
        Self {
            version,
            objects,
            root,
        }
    }

    pub fn objects(&self) -> &[IndirectObject] {
        &self.objects
    }

    pub fn root(&self) -> &Reference {
        &self.root
    }

    /// Highest object number plus one, the `Size` of the trailer.
    pub fn size(&self) -> usize {
        self.objects.last().map(|o| o.index + 1).unwrap_or(1)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Object {
    String(PdfString),
    Integer(i64),
    Name(Name),
    Array(Array),
    Dictionary(Dictionary),
    Stream(Stream),
    Reference(Reference),
}

impl Object {
    pub fn integer(&self) -> Option<i64> {
        if let Object::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    pub fn name(&self) -> Option<&Name> {
        if let Object::Name(n) = self {
            Some(n)
        } else {
            None
        }
    }

    pub fn string(&self) -> Option<&PdfString> {
        if let Object::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn array(&self) -> Option<&Array> {
        if let Object::Array(a) = self {
            Some(a)
        } else {
            None
        }
    }

    pub fn dictionary(&self) -> Option<&Dictionary> {
        match self {
            Object::Dictionary(d) => Some(d),
            Object::Stream(s) => Some(&s.dictionary),
            _ => None,
        }
    }

    pub fn stream(&self) -> Option<&Stream> {
        if let Object::Stream(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn reference(&self) -> Option<&Reference> {
        if let Object::Reference(r) = self {
            Some(r)
        } else {
            None
        }
    }
}

impl Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Object::String(obj) => obj.fmt(f),
            Object::Integer(obj) => obj.fmt(f),
            Object::Name(obj) => write!(f, "/{}", obj),
            Object::Array(obj) => obj.fmt(f),
            Object::Dictionary(obj) => obj.fmt(f),
            Object::Stream(obj) => write!(f, "{} stream[{} bytes]", obj.dictionary, obj.data.len()),
            Object::Reference(obj) => obj.fmt(f),
        }
    }
}

impl From<i64> for Object {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<u32> for Object {
    fn from(v: u32) -> Self {
        Self::Integer(v.into())
    }
}

impl From<usize> for Object {
    fn from(v: usize) -> Self {
        // object numbers and byte lengths never come close to i64::MAX
        Self::Integer(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<PdfString> for Object {
    fn from(v: PdfString) -> Self {
        Self::String(v)
    }
}

impl From<Name> for Object {
    fn from(n: Name) -> Self {
        Self::Name(n)
    }
}

impl From<Vec<Object>> for Object {
    fn from(a: Vec<Object>) -> Self {
        Self::Array(a.into())
    }
}

impl From<Array> for Object {
    fn from(a: Array) -> Self {
        Self::Array(a)
    }
}

impl From<Dictionary> for Object {
    fn from(d: Dictionary) -> Self {
        Self::Dictionary(d)
    }
}

impl From<Stream> for Object {
    fn from(s: Stream) -> Self {
        Self::Stream(s)
    }
}

impl From<Reference> for Object {
    fn from(r: Reference) -> Self {
        Self::Reference(r)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bytes(Vec<u8>);

impl From<Vec<u8>> for Bytes {
    fn from(v: Vec<u8>) -> Self {
        Bytes(v)
    }
}

impl Deref for Bytes {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Bytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let limited_length = self.len().min(15);
        write!(f, "{}", &String::from_utf8_lossy(&self.0[..limited_length]))
    }
}

/// Dictionary that keeps its keys in insertion order.
///
/// Serialized output has to be reproducible, so a hash map is not an option.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary(Vec<(Name, Object)>);

impl Dictionary {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert `value` under `key`, replacing and returning a previous value.
    pub fn insert(&mut self, key: Name, value: Object) -> Option<Object> {
        if let Some((_, old)) = self.0.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(old, value));
        }
        self.0.push((key, value));
        None
    }

    pub fn get(&self, key: &[u8]) -> Option<&Object> {
        self.0.iter().find(|(k, _)| &k[..] == key).map(|(_, v)| v)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Name, Object)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(Name, Object); N]> for Dictionary {
    fn from(entries: [(Name, Object); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl FromIterator<(Name, Object)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (Name, Object)>>(iter: T) -> Self {
        let mut dict = Dictionary::new();
        for (k, v) in iter {
            dict.insert(k, v);
        }
        dict
    }
}

impl std::fmt::Display for Dictionary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<<")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "/{} {}", key, value)?;
        }
        write!(f, ">>")
    }
}
