//! JSON line-delimited logging for frame statistics.
//!
//! One JSON object per line, written to any `io::Write` sink. The engine
//! itself never logs; callers decide when a frame is worth recording.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

/// Per-frame statistics snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct FrameRecord {
    pub frame: u64,
    pub k: usize,
    pub num_classes: usize,
    pub point_count: usize,
    pub cell_size: u32,
    pub painted_cells: usize,
}

/// Line-delimited JSON writer.
///
/// # Example
///
/// ```
/// use knn_canvas_core::{JsonLogger, Session, SessionConfig};
///
/// let mut session = Session::new(SessionConfig::default());
/// let raster = session.render_frame();
///
/// let mut logger = JsonLogger::new(Vec::new());
/// logger.log(&session.frame_record(&raster)).unwrap();
/// ```
pub struct JsonLogger<W: Write> {
    writer: W,
}

impl JsonLogger<BufWriter<File>> {
    /// Open a log file, truncating any previous contents.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> JsonLogger<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Serialize one record as a single JSON line.
    pub fn log<T: Serialize>(&mut self, record: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    /// Give the sink back, e.g. to inspect an in-memory buffer in tests.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_are_one_json_object_per_line() {
        let mut logger = JsonLogger::new(Vec::new());
        for frame in 1..=3u64 {
            let record = FrameRecord {
                frame,
                k: 3,
                num_classes: 2,
                point_count: 4,
                cell_size: 5,
                painted_cells: 19200,
            };
            logger.log(&record).unwrap();
        }

        let output = String::from_utf8(logger.into_inner()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["frame"], 1);
        assert_eq!(first["k"], 3);
        assert_eq!(first["painted_cells"], 19200);
    }
}
