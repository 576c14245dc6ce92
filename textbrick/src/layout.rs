//! Fixed layout settings of the generated documents.

/// Page geometry, font and wrapping limits used by the encoder.
///
/// All lengths are in default user space units (1/72 inch). The origin is the
/// baseline of the first line, measured from the bottom left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub max_chars_per_line: usize,
    pub max_lines_per_page: usize,
    pub page_width: u32,
    pub page_height: u32,
    /// Base font name of one of the standard 14 fonts.
    pub font: String,
    pub font_size: u32,
    /// Vertical advance between two lines.
    pub leading: u32,
    pub origin_x: u32,
    pub origin_y: u32,
    /// Compress content streams with `FlateDecode`.
    pub compress: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            max_chars_per_line: 95,
            max_lines_per_page: 52,
            page_width: 595,
            page_height: 842,
            font: String::from("Helvetica"),
            font_size: 11,
            leading: 14,
            origin_x: 50,
            origin_y: 800,
            compress: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroLineWidth,
    ZeroPageLines,
    ZeroPageSize,
    ZeroFontSize,
    EmptyFontName,
    OriginOutsidePage,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            ConfigError::ZeroLineWidth => "max characters per line must be positive",
            ConfigError::ZeroPageLines => "max lines per page must be positive",
            ConfigError::ZeroPageSize => "page width and height must be positive",
            ConfigError::ZeroFontSize => "font size must be positive",
            ConfigError::EmptyFontName => "font name must not be empty",
            ConfigError::OriginOutsidePage => "text origin lies outside the page",
        };
        f.write_str(msg)
    }
}

impl Layout {
    /// Reject settings that can't produce a readable page.
    ///
    /// The encoder itself never needs this, it clamps where it has to.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chars_per_line == 0 {
            return Err(ConfigError::ZeroLineWidth);
        }
        if self.max_lines_per_page == 0 {
            return Err(ConfigError::ZeroPageLines);
        }
        if self.page_width == 0 || self.page_height == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.font_size == 0 {
            return Err(ConfigError::ZeroFontSize);
        }
        if self.font.trim().is_empty() {
            return Err(ConfigError::EmptyFontName);
        }
        if self.origin_x >= self.page_width || self.origin_y >= self.page_height {
            return Err(ConfigError::OriginOutsidePage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Layout::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_invalid_settings() {
        let cases = [
            (
                Layout {
                    max_chars_per_line: 0,
                    ..Layout::default()
                },
                ConfigError::ZeroLineWidth,
            ),
            (
                Layout {
                    max_lines_per_page: 0,
                    ..Layout::default()
                },
                ConfigError::ZeroPageLines,
            ),
            (
                Layout {
                    page_height: 0,
                    ..Layout::default()
                },
                ConfigError::ZeroPageSize,
            ),
            (
                Layout {
                    font_size: 0,
                    ..Layout::default()
                },
                ConfigError::ZeroFontSize,
            ),
            (
                Layout {
                    font: String::from("  "),
                    ..Layout::default()
                },
                ConfigError::EmptyFontName,
            ),
            (
                Layout {
                    origin_y: 900,
                    ..Layout::default()
                },
                ConfigError::OriginOutsidePage,
            ),
        ];

        for (layout, expected) in cases {
            assert_eq!(layout.validate(), Err(expected));
        }
    }

    #[test]
    fn alternate_page_size() {
        let letter = Layout {
            page_width: 612,
            page_height: 792,
            origin_y: 750,
            ..Layout::default()
        };
        assert_eq!(letter.validate(), Ok(()));
    }
}
