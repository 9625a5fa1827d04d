//! JSON file sink for the output tables.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use serde::Serialize;
use vidtrend_core::{Table, TableSink};

/// Writes each table to `<dir>/<table>.json` as a pretty-printed array,
/// replacing any previous file. The directory is created on first write.
#[derive(Debug, Clone)]
pub(crate) struct JsonTableSink {
    dir: PathBuf,
}

impl JsonTableSink {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub(crate) fn path_for(&self, table: Table) -> PathBuf {
        self.dir.join(format!("{}.json", table.name()))
    }
}

impl TableSink for JsonTableSink {
    type Error = io::Error;

    fn write_table<R: Serialize>(&mut self, table: Table, rows: &[R]) -> Result<(), Self::Error> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path_for(table);
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(&mut writer, rows)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        tracing::debug!(table = %table, rows = rows.len(), path = %path.display(), "table written");
        Ok(())
    }
}
