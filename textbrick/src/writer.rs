/// Append-only byte sink that knows how much it has written.
pub trait Writer {
    fn write(&mut self, buf: &[u8]);

    /// Number of bytes written so far.
    fn position(&self) -> usize;
}

impl Writer for Vec<u8> {
    fn write(&mut self, buf: &[u8]) {
        self.extend_from_slice(buf);
    }

    fn position(&self) -> usize {
        self.len()
    }
}

/// A writer that only counts bytes.
#[derive(Debug, Default)]
pub struct CountingWriter(usize);

impl Writer for CountingWriter {
    fn write(&mut self, buf: &[u8]) {
        self.0 += buf.len();
    }

    fn position(&self) -> usize {
        self.0
    }
}

pub trait Encoder<T> {
    /// Number of bytes `write_to` produces for `o`.
    fn encoded_len(o: &T) -> usize {
        let mut counter = CountingWriter::default();
        Self::write_to(o, &mut counter);
        counter.position()
    }

    fn write_to(o: &T, writer: &mut dyn Writer);
}
