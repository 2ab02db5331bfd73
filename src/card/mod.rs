pub mod record;
pub mod text;

pub use record::{load_cards, parse_cards, CardRecord};
pub use text::{clean_value, compose_text, is_excluded, render_value, EXCLUDED_KEYS};

use serde_json::Value;

use crate::error::{BuildError, Result};

/// One output row, derived from exactly one [`CardRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub game_name: String,
    /// `pack_name` of the card; `None` when the export holds a JSON null.
    pub expansion: Option<String>,
    /// `code` of the card; `None` when the export holds a JSON null.
    pub id: Option<String>,
    pub text: String,
}

impl TableRow {
    /// Build the row for the `index`-th record. Fails if `pack_name` or
    /// `code` is absent.
    pub fn from_record(game_name: &str, index: usize, record: &CardRecord) -> Result<Self> {
        let expansion = required(record, index, "pack_name")?;
        let id = required(record, index, "code")?;
        Ok(Self {
            game_name: game_name.to_string(),
            expansion,
            id,
            text: compose_text(game_name, record),
        })
    }
}

fn required(record: &CardRecord, index: usize, field: &'static str) -> Result<Option<String>> {
    match record.get(field) {
        None => Err(BuildError::MissingField { index, field }),
        Some(Value::Null) => Ok(None),
        Some(v) => Ok(Some(render_value(v))),
    }
}
