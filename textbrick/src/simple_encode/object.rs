use crate::{
    pdf::Object,
    writer::{Encoder, Writer},
};

use super::SimpleEncoder;

pub(crate) mod array;
pub(crate) mod dictionary;
pub(crate) mod indirect;
pub(crate) mod name;
pub(crate) mod stream;
pub(crate) mod string;

impl Encoder<Object> for SimpleEncoder {
    fn write_to(obj: &Object, writer: &mut dyn Writer) {
        match obj {
            Object::String(str) => Self::write_to(str, writer),
            Object::Integer(i) => writer.write(i.to_string().as_bytes()),
            Object::Name(n) => Self::write_to(n, writer),
            Object::Array(a) => Self::write_to(a, writer),
            Object::Dictionary(d) => Self::write_to(d, writer),
            Object::Stream(s) => Self::write_to(s, writer),
            Object::Reference(r) => {
                writer.write(r.index.to_string().as_bytes());
                writer.write(b" ");
                writer.write(r.generation.to_string().as_bytes());
                writer.write(b" R");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pdf::Reference;

    #[test]
    fn integer() {
        let mut out = Vec::new();
        SimpleEncoder::write_to(&Object::Integer(-42), &mut out);
        assert_eq!(out, b"-42");
    }

    #[test]
    fn reference() {
        let obj = Object::from(Reference::new(12));
        let mut out = Vec::new();
        SimpleEncoder::write_to(&obj, &mut out);
        assert_eq!(out, b"12 0 R");
        assert_eq!(SimpleEncoder::encoded_len(&obj), out.len());
    }
}
