use crate::{pdf::Array, writer::Encoder};

use crate::simple_encode::SimpleEncoder;

impl Encoder<Array> for SimpleEncoder {
    fn encoded_len(array: &Array) -> usize {
        // 1 Byte each for opening and closing bracket
        let mut size = 2;

        // bytes for all contained objects
        for item in array.iter() {
            size += Self::encoded_len(item);
        }

        // 1 delimiter between 2 objects
        size += array.len().saturating_sub(1);

        size
    }

    fn write_to(array: &Array, writer: &mut dyn crate::writer::Writer) {
        writer.write(b"[");
        for (i, item) in array.iter().enumerate() {
            if i != 0 {
                writer.write(b" ");
            }
            Self::write_to(item, writer);
        }
        writer.write(b"]");
    }
}
