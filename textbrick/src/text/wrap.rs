use super::Line;

/// Greedy word wrapping.
///
/// Each `\n` starts a new paragraph. A paragraph without any word becomes one
/// empty line. Words wider than `max_chars_per_line` are never split, they
/// end up on a line of their own.
pub fn wrap(text: &str, max_chars_per_line: usize) -> Vec<Line> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut words = paragraph.split_whitespace();
        let mut current = match words.next() {
            Some(first) => first.to_owned(),
            None => {
                lines.push(Line::empty());
                continue;
            }
        };

        for word in words {
            if current.len() + 1 + word.len() <= max_chars_per_line {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(Line::from(std::mem::replace(&mut current, word.to_owned())));
            }
        }
        lines.push(Line::from(current));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(Line::as_str).collect()
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        assert_eq!(strs(&wrap("", 95)), vec![""]);
    }

    #[test]
    fn blank_paragraphs_are_preserved() {
        assert_eq!(strs(&wrap("a\n\n   \nb", 95)), vec!["a", "", "", "b"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(
            strs(&wrap("aaa bbb ccc ddd", 7)),
            vec!["aaa bbb", "ccc ddd"]
        );
    }

    #[test]
    fn exact_fit_stays_on_line() {
        assert_eq!(strs(&wrap("abcd efgh", 9)), vec!["abcd efgh"]);
        assert_eq!(strs(&wrap("abcd efgh", 8)), vec!["abcd", "efgh"]);
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        assert_eq!(strs(&wrap("  one    two  ", 95)), vec!["one two"]);
    }

    #[test]
    fn oversized_word_gets_own_line() {
        let long = "y".repeat(20);
        let text = format!("ab {} cd", long);
        assert_eq!(strs(&wrap(&text, 10)), vec!["ab", long.as_str(), "cd"]);
    }

    #[test]
    fn oversized_first_word() {
        let long = "z".repeat(15);
        assert_eq!(strs(&wrap(&long, 10)), vec![long.as_str()]);
    }

    #[test]
    fn long_paragraph_is_deterministic() {
        let paragraph = vec!["lorem"; 600].join(" ");
        let first = wrap(&paragraph, 95);
        let second = wrap(&paragraph, 95);
        assert_eq!(first, second);
        // 16 words of 5 chars plus 15 spaces fill a line exactly.
        assert!(first.iter().all(|l| l.len() <= 95));
        assert_eq!(first[0].len(), 95);
        assert_eq!(first.len(), 38);
    }
}
