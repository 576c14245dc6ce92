use std::ops::Deref;

/// A single wrapped output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line(String);

impl Line {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Line {
    fn from(s: String) -> Self {
        Line(s)
    }
}

impl From<&str> for Line {
    fn from(s: &str) -> Self {
        Line(s.to_owned())
    }
}

impl Deref for Line {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered slice of lines that is rendered onto one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page(Vec<Line>);

impl Page {
    /// A page holding exactly one empty line.
    pub fn blank() -> Self {
        Page(vec![Line::empty()])
    }

    pub fn lines(&self) -> &[Line] {
        &self.0
    }
}

impl From<Vec<Line>> for Page {
    fn from(lines: Vec<Line>) -> Self {
        Page(lines)
    }
}

impl Deref for Page {
    type Target = [Line];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
