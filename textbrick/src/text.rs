//! Turning free-form text into pages of printable lines.
//!
//! The pipeline is `normalize` -> `wrap` -> `paginate`. Every step is total:
//! any input string produces at least one page.

pub use self::{
    line::{Line, Page},
    normalize::normalize,
    paginate::paginate,
    wrap::wrap,
};

use crate::layout::Layout;

mod line;
mod normalize;
mod paginate;
mod wrap;

/// Informational findings collected while laying out text.
///
/// None of these stop the encoder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The input had no printable word, the document holds a single empty
    /// line.
    DegenerateInputPage,
    /// A single word is wider than the line budget and was kept on its own
    /// line.
    OversizedWord {
        /// Index of the line in the wrapped output.
        line: usize,
        /// Length of the line in bytes.
        length: usize,
    },
}

/// Pages and notices produced from one input text.
#[derive(Debug, Clone, PartialEq)]
pub struct LaidOut {
    pub pages: Vec<Page>,
    pub line_count: usize,
    pub notices: Vec<Notice>,
}

/// Run the whole text pipeline for `text`.
///
/// Input without any non-whitespace character (before normalization) always
/// results in one page with one empty line, no matter how many line breaks it
/// contains.
pub fn lay_out(text: &str, layout: &Layout) -> LaidOut {
    let mut notices = Vec::new();

    let lines = if text.trim().is_empty() {
        log::debug!("blank input, rendering a single empty line");
        notices.push(Notice::DegenerateInputPage);
        Vec::new()
    } else {
        wrap(&normalize(text), layout.max_chars_per_line)
    };

    for (index, line) in lines.iter().enumerate() {
        if line.len() > layout.max_chars_per_line {
            log::debug!(
                "line {} holds a single word of {} bytes, wider than {}",
                index,
                line.len(),
                layout.max_chars_per_line
            );
            notices.push(Notice::OversizedWord {
                line: index,
                length: line.len(),
            });
        }
    }

    let line_count = lines.len().max(1);
    let pages = paginate(lines, layout.max_lines_per_page);
    log::debug!("laid out {} lines on {} pages", line_count, pages.len());

    LaidOut {
        pages,
        line_count,
        notices,
    }
}
