use std::ops::Deref;

/// Byte string, written as a literal `( )` string.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct PdfString(Vec<u8>);

impl From<Vec<u8>> for PdfString {
    fn from(v: Vec<u8>) -> Self {
        PdfString(v)
    }
}

impl From<&str> for PdfString {
    fn from(v: &str) -> Self {
        PdfString(v.as_bytes().to_vec())
    }
}

impl Deref for PdfString {
    type Target = Vec<u8>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PdfString")
            .field(&String::from_utf8_lossy(&self.0[..]))
            .finish()
    }
}

impl std::fmt::Display for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({})", &String::from_utf8_lossy(&self.0[..]))
    }
}
