//! Assembly of the object graph for a paginated text document.
//!
//! The numbering is fixed: the catalog, the page tree and the shared font come
//! first, followed by one page object and one content stream per page.

pub use self::numbering::ObjectNumbering;

use crate::{
    layout::Layout,
    pdf::{IndirectObject, PdfSection, Reference, PDF_VERSION},
    text::Page,
};

pub mod catalog;
pub mod content;
pub mod font;
mod numbering;
pub mod pages;

/// Dictionary type names
pub(crate) mod dict_types {
    pub const CATALOG: &[u8] = b"Catalog";
    pub const PAGES: &[u8] = b"Pages";
    pub const PAGE: &[u8] = b"Page";
    pub const FONT: &[u8] = b"Font";
}

pub(crate) const K_TYPE: &[u8] = b"Type";
pub(crate) const K_SUBTYPE: &[u8] = b"Subtype";
pub(crate) const K_PARENT: &[u8] = b"Parent";
pub(crate) const K_KIDS: &[u8] = b"Kids";
pub(crate) const K_COUNT: &[u8] = b"Count";
pub(crate) const K_PAGES: &[u8] = b"Pages";
pub(crate) const K_MEDIA_BOX: &[u8] = b"MediaBox";
pub(crate) const K_RESOURCES: &[u8] = b"Resources";
pub(crate) const K_FONT: &[u8] = b"Font";
pub(crate) const K_BASE_FONT: &[u8] = b"BaseFont";
pub(crate) const K_CONTENTS: &[u8] = b"Contents";
pub(crate) const K_LENGTH: &[u8] = b"Length";
pub(crate) const K_FILTER: &[u8] = b"Filter";

/// Resource name of the single font every page uses.
pub(crate) const FONT_RESOURCE: &[u8] = b"F1";
pub(crate) const FLATE_DECODE: &[u8] = b"FlateDecode";

/// Build every object of the document for `pages`.
///
/// An empty `pages` slice is rendered as one blank page.
pub fn build(pages: &[Page], layout: &Layout) -> PdfSection {
    let blank;
    let pages = if pages.is_empty() {
        log::debug!("no pages given, rendering a blank page");
        blank = [Page::blank()];
        &blank[..]
    } else {
        pages
    };

    let numbering = ObjectNumbering::new(pages.len());
    log::trace!("build {} objects for {} pages", numbering.object_count(), pages.len());

    let mut objects = Vec::with_capacity(numbering.object_count());
    objects.push(IndirectObject::new(numbering.catalog(), catalog::catalog(&numbering)));
    objects.push(IndirectObject::new(numbering.pages(), pages::page_tree(&numbering)));
    objects.push(IndirectObject::new(numbering.font(), font::font(layout)));

    for (index, page) in pages.iter().enumerate() {
        objects.push(IndirectObject::new(
            numbering.page(index),
            pages::page(&numbering, index, layout),
        ));
        objects.push(IndirectObject::new(
            numbering.content(index),
            content::content_stream(page, layout),
        ));
    }

    PdfSection::new(PDF_VERSION, objects, Reference::new(numbering.catalog()))
}
