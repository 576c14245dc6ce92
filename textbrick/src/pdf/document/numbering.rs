/// Object numbers of a document with a given page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectNumbering {
    page_count: usize,
}

impl ObjectNumbering {
    /// Objects that exist once per document.
    const SHARED_OBJECTS: usize = 3;
    /// Objects that exist once per page (page and content stream).
    const OBJECTS_PER_PAGE: usize = 2;

    pub fn new(page_count: usize) -> Self {
        Self { page_count }
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn catalog(&self) -> usize {
        1
    }

    pub fn pages(&self) -> usize {
        2
    }

    pub fn font(&self) -> usize {
        3
    }

    /// Page object of the page with zero based `index`.
    pub fn page(&self, index: usize) -> usize {
        Self::SHARED_OBJECTS + 1 + Self::OBJECTS_PER_PAGE * index
    }

    /// Content stream of the page with zero based `index`.
    pub fn content(&self, index: usize) -> usize {
        self.page(index) + 1
    }

    /// Number of objects, which is also the highest object number.
    pub fn object_count(&self) -> usize {
        Self::SHARED_OBJECTS + Self::OBJECTS_PER_PAGE * self.page_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page() {
        let n = ObjectNumbering::new(1);
        assert_eq!((n.catalog(), n.pages(), n.font()), (1, 2, 3));
        assert_eq!((n.page(0), n.content(0)), (4, 5));
        assert_eq!(n.object_count(), 5);
    }

    #[test]
    fn later_pages() {
        let n = ObjectNumbering::new(4);
        assert_eq!((n.page(3), n.content(3)), (10, 11));
        assert_eq!(n.object_count(), 11);
    }
}
