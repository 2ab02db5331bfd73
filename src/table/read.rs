use anyhow::{anyhow, Context, Result};
use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::{fs::File, path::Path};

use super::COLUMNS;
use crate::card::TableRow;

/// Load a card table written by [`super::write_parquet`] back into rows.
pub fn read_parquet(path: &Path) -> Result<Vec<TableRow>> {
    let file = File::open(path).with_context(|| format!("opening {:?}", path))?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .with_context(|| format!("reading parquet metadata of {:?}", path))?
        .build()?;

    let mut rows = Vec::new();
    for batch in reader {
        let batch = batch.context("decoding card batch")?;
        append_rows(&batch, &mut rows)?;
    }
    Ok(rows)
}

fn append_rows(batch: &RecordBatch, rows: &mut Vec<TableRow>) -> Result<()> {
    let game = string_column(batch, COLUMNS[0])?;
    let expansion = string_column(batch, COLUMNS[1])?;
    let id = string_column(batch, COLUMNS[2])?;
    let text = string_column(batch, COLUMNS[3])?;

    let opt = |arr: &StringArray, i: usize| (!arr.is_null(i)).then(|| arr.value(i).to_string());
    for i in 0..batch.num_rows() {
        rows.push(TableRow {
            game_name: game.value(i).to_string(),
            expansion: opt(expansion, i),
            id: opt(id, i),
            text: text.value(i).to_string(),
        });
    }
    Ok(())
}

fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray> {
    batch
        .column_by_name(name)
        .ok_or_else(|| anyhow!("missing column `{}`", name))?
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| anyhow!("column `{}` is not Utf8", name))
}
