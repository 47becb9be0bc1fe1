//! Newline-delimited JSON sink.

use std::io::Write;

use ofac_model::Record;
use sha2::{Digest, Sha256};

use crate::error::{Result, TransformError};

/// Writes one record per line and hashes every byte it writes.
///
/// Each record is serialized into memory first and written with a single
/// `write_all`, so a serialization failure never leaves a partial line.
pub struct JsonlWriter<W: Write> {
    sink: W,
    hasher: Sha256,
    line: Vec<u8>,
    lines: usize,
}

impl<W: Write> JsonlWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            hasher: Sha256::new(),
            line: Vec::with_capacity(4096),
            lines: 0,
        }
    }

    pub fn write_record(&mut self, record: &Record) -> Result<()> {
        self.line.clear();
        serde_json::to_writer(&mut self.line, record).map_err(|source| {
            TransformError::Serialize {
                record_id: record.record_id().to_string(),
                source,
            }
        })?;
        self.line.push(b'\n');
        self.sink.write_all(&self.line)?;
        self.hasher.update(&self.line);
        self.lines += 1;
        Ok(())
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    /// Flush the sink and return it with the hex digest of the output.
    pub fn finish(mut self) -> Result<(W, String)> {
        self.sink.flush()?;
        Ok((self.sink, hex::encode(self.hasher.finalize())))
    }
}

#[cfg(test)]
mod tests {
    use ofac_model::{Feature, RecordBuilder};

    use super::*;

    #[test]
    fn writes_compact_lines_and_hashes_them() {
        let mut builder = RecordBuilder::new("OFAC_ADVANCED", "36");
        builder.push_feature(Feature::new().with("NAME_FULL", "Société Générale"));
        builder.set_if_absent("IS_PRIMARY", true);

        let mut writer = JsonlWriter::new(Vec::new());
        writer.write_record(&builder.build()).unwrap();
        assert_eq!(writer.lines(), 1);
        let (bytes, digest) = writer.finish().unwrap();

        let text = String::from_utf8(bytes.clone()).unwrap();
        assert_eq!(
            text,
            "{\"DATA_SOURCE\":\"OFAC_ADVANCED\",\"RECORD_ID\":\"36\",\"FEATURES\":[{\"NAME_FULL\":\"Société Générale\"}],\"IS_PRIMARY\":true}\n"
        );
        assert_eq!(digest, hex::encode(Sha256::digest(&bytes)));
    }

    #[test]
    fn empty_output_has_the_empty_digest() {
        let (_, digest) = JsonlWriter::new(Vec::new()).finish().unwrap();
        assert_eq!(
            digest,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }
}
