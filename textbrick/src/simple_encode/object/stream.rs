use crate::{
    pdf::{document::K_LENGTH, Name, Object, Stream},
    writer::Encoder,
};

use crate::simple_encode::SimpleEncoder;

const START_STREAM: &[u8] = b"\nstream\n";
const END_STREAM: &[u8] = b"\nendstream";

impl Encoder<Stream> for SimpleEncoder {
    fn write_to(s: &Stream, writer: &mut dyn crate::writer::Writer) {
        // the length always has to match the data that is written
        let mut updated_dict = s.dictionary.clone();
        updated_dict.insert(Name::from(K_LENGTH), Object::from(s.data.len()));
        Self::write_to(&updated_dict, writer);
        writer.write(START_STREAM);
        writer.write(&s.data);
        writer.write(END_STREAM);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::Dictionary;

    #[test]
    fn length_is_set() {
        let s = Stream {
            dictionary: Dictionary::new(),
            data: b"BT ET".to_vec().into(),
        };
        let mut out = Vec::new();
        SimpleEncoder::write_to(&s, &mut out);
        assert_eq!(out, b"<</Length 5>>\nstream\nBT ET\nendstream".to_vec());
    }

    #[test]
    fn stale_length_is_replaced() {
        let s = Stream {
            dictionary: Dictionary::from([(Name::from(K_LENGTH), Object::Integer(99))]),
            data: b"abc".to_vec().into(),
        };
        let mut out = Vec::new();
        SimpleEncoder::write_to(&s, &mut out);
        assert_eq!(out, b"<</Length 3>>\nstream\nabc\nendstream".to_vec());
        assert_eq!(SimpleEncoder::encoded_len(&s), out.len());
    }
}
