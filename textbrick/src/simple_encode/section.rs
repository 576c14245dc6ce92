use crate::{
    pdf::{
        trailer::{EOF_MARKER, STARTXREF, TRAILER},
        xref::{UsedObject, XrefEntry, XREF},
        Dictionary, PdfSection, Trailer, Xref,
    },
    simple_encode::SimpleEncoder,
    writer::{Encoder, Writer},
};

impl Encoder<PdfSection> for SimpleEncoder {
    /// Objects are serialized first, then their offsets are computed in a
    /// single forward pass over the serialized bytes. Offsets are relative to
    /// the start of `writer`.
    fn write_to(sec: &PdfSection, writer: &mut dyn Writer) {
        log::trace!("write PDF Section");

        writer.write(format!("%PDF-{}.{}\n", sec.version.0, sec.version.1).as_bytes());

        let serialized: Vec<(usize, Vec<u8>)> = sec
            .objects
            .iter()
            .map(|obj| {
                let mut bytes = Vec::new();
                Self::write_to(obj, &mut bytes);
                (obj.index, bytes)
            })
            .collect();

        let mut cursor = writer.position();
        let mut used = Vec::with_capacity(serialized.len());
        for (number, bytes) in serialized.iter() {
            used.push(UsedObject {
                number: *number,
                byte_offset: cursor,
                generation: 0,
            });
            cursor += bytes.len();
        }

        for (number, bytes) in serialized.iter() {
            log::trace!("write object {} ({} bytes)", number, bytes.len());
            writer.write(bytes);
        }

        let start_xref = writer.position();
        debug_assert_eq!(start_xref, cursor);
        let xref = Xref::with_used(used);
        Self::write_to(&xref, writer);

        Self::write_to(&Trailer::new(xref.len(), sec.root.clone()), writer);

        writer.write(STARTXREF);
        writer.write(b"\n");
        writer.write(start_xref.to_string().as_bytes());
        writer.write(b"\n");
        writer.write(EOF_MARKER);
        writer.write(b"\n");
    }
}

/// Every entry is exactly 20 bytes long, including the two byte line end.
fn encode_xref_entry(entry: &XrefEntry, writer: &mut dyn Writer) {
    let line = match entry {
        XrefEntry::Free(entry) => format!("{:010} {:05} f \n", entry.next_free, entry.generation),
        XrefEntry::Used(entry) => format!("{:010} {:05} n \n", entry.byte_offset, entry.generation),
    };
    writer.write(line.as_bytes());
}

impl Encoder<Xref> for SimpleEncoder {
    fn write_to(o: &Xref, writer: &mut dyn Writer) {
        log::trace!("write XRef with {} entries", o.len());

        writer.write(XREF);
        writer.write(b"\n");
        writer.write(format!("0 {}\n", o.len()).as_bytes());
        for entry in o.entries() {
            encode_xref_entry(entry, writer);
        }
    }
}

impl Encoder<Trailer> for SimpleEncoder {
    fn write_to(trailer: &Trailer, writer: &mut dyn Writer) {
        log::trace!("write Trailer");

        let trailer_dict: Dictionary = trailer.clone().into();
        writer.write(TRAILER);
        writer.write(b"\n");
        Self::write_to(&trailer_dict, writer);
        writer.write(b"\n");
    }
}
