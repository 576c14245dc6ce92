//! File names for handing a rendered document to a user.

const SEPARATOR: char = '-';
const EXTENSION: &str = ".pdf";

/// Lowercase `name` and collapse every run of characters other than ASCII
/// letters and digits into a single `-`.
///
/// Returns `fallback` if nothing is left.
pub fn sanitize(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push(SEPARATOR);
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if out.is_empty() {
        log::debug!("{:?} has no usable characters, using {:?}", name, fallback);
        fallback.to_owned()
    } else {
        out
    }
}

pub fn pdf_file_name(title: &str, fallback: &str) -> String {
    sanitize(title, fallback) + EXTENSION
}
