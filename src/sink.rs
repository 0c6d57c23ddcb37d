use std::io::{self, Write};

/// Destination for serialized text.
///
/// The serializer batches output internally and hands each batch to the
/// sink as one contiguous run of characters; a sink has no flush
/// obligation of its own. Errors are opaque to the serializer and
/// propagate to the `serialize` caller unchanged.
pub trait Sink {
    fn write(&mut self, text: &str) -> io::Result<()>;
}

/// Collects output in memory. Never fails.
impl Sink for String {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a [`Sink`], encoding the character
/// stream as UTF-8 on the way out.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    inner: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Consumes the adapter and returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Sink for WriterSink<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_all(text.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_sink_accumulates() {
        let mut out = String::new();
        out.write("abc").unwrap();
        out.write("").unwrap();
        out.write("def").unwrap();
        assert_eq!(out, "abcdef");
    }

    #[test]
    fn writer_sink_encodes_utf8() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write("π ≈ 3").unwrap();
        assert_eq!(sink.into_inner(), "π ≈ 3".as_bytes());
    }
}
