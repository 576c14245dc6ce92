/// Placeholder for every character the built-in font encoding can't show.
pub const PLACEHOLDER: char = '?';

fn is_printable(c: char) -> bool {
    (' '..='~').contains(&c)
}

/// Strip carriage returns and replace everything outside printable ASCII
/// (except `\n`) with [`PLACEHOLDER`].
///
/// One placeholder is emitted per `char`, not per UTF-8 byte.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&c| c != '\r')
        .map(|c| if c == '\n' || is_printable(c) { c } else { PLACEHOLDER })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn carriage_returns_are_dropped() {
        assert_eq!(normalize("one\r\ntwo\r"), "one\ntwo");
    }

    #[test]
    fn non_ascii_becomes_placeholder() {
        assert_eq!(normalize("caf\u{e9} \u{1F600}!"), "caf? ?!");
    }

    #[test]
    fn control_characters_become_placeholder() {
        assert_eq!(normalize("a\tb\u{7f}c\u{0}"), "a?b?c?");
    }

    #[test]
    fn output_is_printable_ascii_or_newline() {
        let out = normalize("Grüße\n\u{2028}\u{feff}\u{1b}[0m ~");
        assert!(out.bytes().all(|b| b == b'\n' || (0x20..=0x7e).contains(&b)));
        assert_eq!(out.lines().count(), 2);
    }
}
