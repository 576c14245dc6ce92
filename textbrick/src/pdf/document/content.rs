use flate2::{write::ZlibEncoder, Compression};

use super::{FLATE_DECODE, FONT_RESOURCE, K_FILTER, K_LENGTH};
use crate::{
    layout::Layout,
    pdf::{Dictionary, Name, Object, PdfString, Stream},
    simple_encode::SimpleEncoder,
    text::Page,
    writer::{Encoder, Writer},
};

/// Text showing instructions for all lines of `page`.
///
/// The first line is shown at the origin, each following line moves down by
/// one leading (`T*`) before it is shown.
pub fn instructions(page: &Page, layout: &Layout) -> Vec<u8> {
    let mut out = Vec::new();
    out.write(b"BT\n");
    out.write(b"/");
    out.write(FONT_RESOURCE);
    out.write(format!(" {} Tf\n", layout.font_size).as_bytes());
    out.write(format!("{} TL\n", layout.leading).as_bytes());
    out.write(format!("{} {} Td\n", layout.origin_x, layout.origin_y).as_bytes());

    for (index, line) in page.iter().enumerate() {
        if index != 0 {
            out.write(b"T* ");
        }
        SimpleEncoder::write_to(&PdfString::from(line.as_str()), &mut out);
        out.write(b" Tj\n");
    }

    out.write(b"ET");
    out
}

/// The content stream object of `page`.
///
/// `Length` is filled in when the stream is written.
pub fn content_stream(page: &Page, layout: &Layout) -> Stream {
    let data = instructions(page, layout);
    let mut dictionary = Dictionary::new();

    if layout.compress {
        match deflate(&data) {
            Ok(compressed) => {
                log::trace!("compressed content stream {} -> {} bytes", data.len(), compressed.len());
                dictionary.insert(Name::from(K_LENGTH), Object::from(compressed.len()));
                dictionary.insert(Name::from(K_FILTER), Object::from(Name::from(FLATE_DECODE)));
                return Stream {
                    dictionary,
                    data: compressed.into(),
                };
            }
            Err(err) => log::warn!("could not compress content stream, writing it plain: {}", err),
        }
    }

    dictionary.insert(Name::from(K_LENGTH), Object::from(data.len()));
    Stream {
        dictionary,
        data: data.into(),
    }
}

fn deflate(data: &[u8]) -> std::io::Result<Vec<u8>> {
    use std::io::Write;

    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}
