use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::{SinkError, TableSink};
use crate::table::Table;

/// Writes each table to `<dir>/<name>.jsonl`, one JSON object per row
pub struct JsonLinesSink {
    output_dir: PathBuf,
}

impl JsonLinesSink {
    /// Create the sink, creating `output_dir` if needed
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self, SinkError> {
        std::fs::create_dir_all(&output_dir)?;
        Ok(JsonLinesSink {
            output_dir: output_dir.as_ref().to_path_buf(),
        })
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.jsonl", name))
    }
}

impl TableSink for JsonLinesSink {
    fn write(&mut self, table: &Table, name: &str) -> Result<(), SinkError> {
        // File::create truncates, which gives full-replace semantics
        let mut writer = BufWriter::new(File::create(self.path_for(name))?);
        for row in table.rows() {
            let json = serde_json::to_string(&table.row_object(row))?;
            writeln!(writer, "{}", json)?;
        }
        writer.flush()?;
        Ok(())
    }
}
