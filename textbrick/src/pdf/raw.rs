use std::io::Read;

use fnv::FnvHashMap;
use flate2::read::ZlibDecoder;

use super::{
    document::{dict_types, FLATE_DECODE, K_CONTENTS, K_FILTER, K_KIDS, K_PAGES, K_TYPE},
    Dictionary, IndirectObject, Object, PdfString, Reference, Trailer, Xref,
};
use crate::{
    error::TbError,
    parse::{content::shown_text, span},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The trailer root is not a catalog dictionary.
    MissingCatalog,
    MissingPages,
    MissingPage(usize),
    MissingContents(usize),
    UnsupportedFilter(Vec<u8>),
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentError::MissingCatalog => write!(f, "document catalog not found"),
            DocumentError::MissingPages => write!(f, "page tree not found"),
            DocumentError::MissingPage(i) => write!(f, "page {} not found", i),
            DocumentError::MissingContents(i) => write!(f, "page {} has no content stream", i),
            DocumentError::UnsupportedFilter(name) => {
                write!(f, "unsupported stream filter /{}", String::from_utf8_lossy(name))
            }
        }
    }
}

/// A document as read from its bytes.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub(crate) version: (u8, u8),
    pub(crate) objects: FnvHashMap<usize, IndirectObject>,
    pub(crate) xref: Xref,
    pub(crate) trailer: Trailer,
    pub(crate) startxref: usize,
}

fn has_type(dict: &Dictionary, type_name: &[u8]) -> bool {
    dict.get(K_TYPE)
        .and_then(Object::name)
        .map(|n| &n[..] == type_name)
        .unwrap_or(false)
}

impl RawDocument {
    pub fn version(&self) -> (u8, u8) {
        self.version
    }

    pub fn xref(&self) -> &Xref {
        &self.xref
    }

    pub fn trailer(&self) -> &Trailer {
        &self.trailer
    }

    /// Byte offset of the cross-reference table.
    pub fn startxref(&self) -> usize {
        self.startxref
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn object(&self, index: usize) -> Option<&IndirectObject> {
        self.objects.get(&index)
    }

    /// Resolve `reference`; the generation has to match as well.
    pub fn dereference(&self, reference: &Reference) -> Option<&Object> {
        self.objects
            .get(&reference.index)
            .filter(|o| o.generation == reference.generation)
            .map(IndirectObject::object)
    }

    fn dictionary_at(&self, reference: Option<&Reference>) -> Option<&Dictionary> {
        reference
            .and_then(|r| self.dereference(r))
            .and_then(Object::dictionary)
    }

    pub fn catalog(&self) -> Result<&Dictionary, DocumentError> {
        self.dictionary_at(Some(&self.trailer.root))
            .filter(|d| has_type(d, dict_types::CATALOG))
            .ok_or(DocumentError::MissingCatalog)
    }

    pub fn page_tree(&self) -> Result<&Dictionary, DocumentError> {
        let catalog = self.catalog()?;
        self.dictionary_at(catalog.get(K_PAGES).and_then(Object::reference))
            .filter(|d| has_type(d, dict_types::PAGES))
            .ok_or(DocumentError::MissingPages)
    }

    /// References to every page, in order.
    ///
    /// Only flat page trees are supported, which is what the encoder writes.
    pub fn page_references(&self) -> Result<Vec<&Reference>, DocumentError> {
        let kids = self
            .page_tree()?
            .get(K_KIDS)
            .and_then(Object::array)
            .ok_or(DocumentError::MissingPages)?;

        kids.iter()
            .enumerate()
            .map(|(i, kid)| kid.reference().ok_or(DocumentError::MissingPage(i)))
            .collect()
    }

    pub fn page_count(&self) -> Result<usize, DocumentError> {
        self.page_references().map(|pages| pages.len())
    }

    /// Every string shown on page `index`, unescaped.
    pub fn page_text(&self, index: usize) -> Result<Vec<PdfString>, TbError> {
        let pages = self.page_references()?;
        let page = self
            .dictionary_at(pages.get(index).copied())
            .filter(|d| has_type(d, dict_types::PAGE))
            .ok_or(DocumentError::MissingPage(index))?;

        let stream = page
            .get(K_CONTENTS)
            .and_then(Object::reference)
            .and_then(|r| self.dereference(r))
            .and_then(Object::stream)
            .ok_or(DocumentError::MissingContents(index))?;

        let data = match stream.dictionary.get(K_FILTER).map(Object::name) {
            None => stream.data.to_vec(),
            Some(Some(filter)) if &filter[..] == FLATE_DECODE => inflate(&stream.data)?,
            Some(filter) => {
                let name = filter.map(|n| n.to_vec()).unwrap_or_default();
                return Err(DocumentError::UnsupportedFilter(name).into());
            }
        };

        let (_, shown) = shown_text(span(&data))?;
        log::trace!("page {} shows {} strings", index, shown.len());
        Ok(shown)
    }

    /// Text of every page, one entry per shown string.
    pub fn text(&self) -> Result<Vec<Vec<PdfString>>, TbError> {
        (0..self.page_count()?).map(|i| self.page_text(i)).collect()
    }
}

fn inflate(data: &[u8]) -> Result<Vec<u8>, TbError> {
    let mut out = Vec::new();
    ZlibDecoder::new(data)
        .read_to_end(&mut out)
        .map_err(|_| TbError::Compression)?;
    Ok(out)
}
