pub mod read;
pub mod write;

pub use read::read_parquet;
pub use write::write_parquet;

use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, StringArray},
    datatypes::{DataType, Field, Schema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

use crate::card::TableRow;

pub const COLUMNS: [&str; 4] = ["game_name", "expansion", "id", "text"];

/// Fixed schema of the card table. No index column.
pub fn card_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new(COLUMNS[0], DataType::Utf8, false),
        Field::new(COLUMNS[1], DataType::Utf8, true),
        Field::new(COLUMNS[2], DataType::Utf8, true),
        Field::new(COLUMNS[3], DataType::Utf8, false),
    ]))
}

/// Ordered rows, appended once per input record.
#[derive(Debug, Default, Clone)]
pub struct CardTable {
    rows: Vec<TableRow>,
}

impl CardTable {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            rows: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Column-wise copy of the rows as a single batch.
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let game: StringArray = self.rows.iter().map(|r| Some(r.game_name.as_str())).collect();
        let expansion: StringArray = self.rows.iter().map(|r| r.expansion.as_deref()).collect();
        let id: StringArray = self.rows.iter().map(|r| r.id.as_deref()).collect();
        let text: StringArray = self.rows.iter().map(|r| Some(r.text.as_str())).collect();

        RecordBatch::try_new(
            card_schema(),
            vec![
                Arc::new(game) as ArrayRef,
                Arc::new(expansion) as ArrayRef,
                Arc::new(id) as ArrayRef,
                Arc::new(text) as ArrayRef,
            ],
        )
        .context("building card record batch")
    }
}

impl FromIterator<TableRow> for CardTable {
    fn from_iter<I: IntoIterator<Item = TableRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::Array;

    fn row(id: &str) -> TableRow {
        TableRow {
            game_name: "Arkham Horror".into(),
            expansion: Some("Core Set".into()),
            id: Some(id.into()),
            text: format!("Game Name : Arkham Horror, code : {}", id),
        }
    }

    #[test]
    fn batch_has_four_named_columns() -> Result<()> {
        let table: CardTable = vec![row("01001"), row("01002")].into_iter().collect();
        let batch = table.to_record_batch()?;
        assert_eq!(batch.num_columns(), 4);
        assert_eq!(batch.num_rows(), 2);
        let names: Vec<&str> = batch
            .schema_ref()
            .fields()
            .iter()
            .map(|f| f.name().as_str())
            .collect();
        assert_eq!(names, COLUMNS);
        Ok(())
    }

    #[test]
    fn null_columns_stay_null() -> Result<()> {
        let mut r = row("01001");
        r.expansion = None;
        let mut table = CardTable::default();
        table.push(r);
        let batch = table.to_record_batch()?;
        assert!(batch.column(1).is_null(0));
        assert!(!batch.column(2).is_null(0));
        Ok(())
    }

    #[test]
    fn empty_table_still_has_schema() -> Result<()> {
        let batch = CardTable::default().to_record_batch()?;
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 4);
        Ok(())
    }
}
