use anyhow::{Context, Result};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use super::CardTable;

/// Write `table` to `out_path` as one Parquet file.
///
/// The file is assembled under a temporary name next to `out_path` and then
/// renamed over it, so a failed write leaves any previous output in place.
pub fn write_parquet(table: &CardTable, out_path: &Path, props: WriterProperties) -> Result<()> {
    let batch = table.to_record_batch()?;

    let dir = match out_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("creating temporary file in {:?}", dir))?;
    debug!(tmp = %tmp.path().display(), "writing card table");

    let mut writer = ArrowWriter::try_new(tmp.reopen()?, batch.schema(), Some(props))
        .context("creating Arrow writer for card table")?;
    writer.write(&batch).context("writing card batch")?;
    writer.close().context("closing card table writer")?;

    tmp.persist(out_path)
        .with_context(|| format!("renaming temporary file onto {:?}", out_path))?;
    Ok(())
}
