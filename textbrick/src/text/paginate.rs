use super::{Line, Page};

/// Split `lines` into pages of at most `max_lines_per_page` lines.
///
/// There is always at least one page; an empty input gives a single page with
/// one empty line. A limit of `0` is treated as `1`.
pub fn paginate(lines: Vec<Line>, max_lines_per_page: usize) -> Vec<Page> {
    if lines.is_empty() {
        return vec![Page::blank()];
    }

    let per_page = max_lines_per_page.max(1);
    let mut pages = Vec::with_capacity(lines.len() / per_page + 1);
    let mut lines = lines.into_iter().peekable();
    while lines.peek().is_some() {
        pages.push(Page::from(lines.by_ref().take(per_page).collect::<Vec<_>>()));
    }

    pages
}
