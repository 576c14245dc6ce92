use crate::{
    pdf::PdfString,
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

/// Bytes that get a preceding backslash inside a literal string.
fn needs_escape(c: u8) -> bool {
    matches!(c, b'\\' | b'(' | b')')
}

impl Encoder<PdfString> for SimpleEncoder {
    fn encoded_len(str: &PdfString) -> usize {
        let escaped = str.iter().filter(|&&c| needs_escape(c)).count();

        // we need two additional bytes for the opening and closing paranthesis
        str.len() + escaped + 2
    }

    /// Every backslash and parenthesis is escaped, balanced or not. Escaping is
    /// done in a single pass over the input, so the backslashes added here are
    /// never escaped again.
    fn write_to(str: &PdfString, writer: &mut dyn Writer) {
        writer.write(b"(");

        let mut last_written_index = 0;
        for (index, &char) in str.iter().enumerate() {
            if needs_escape(char) {
                writer.write(&str[last_written_index..index]);
                writer.write(br"\");
                last_written_index = index;
            }
        }
        writer.write(&str[last_written_index..]);
        writer.write(b")");
    }
}
