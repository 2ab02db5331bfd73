use std::time::Instant;
use tracing::{debug, info, instrument};

use crate::card::{load_cards, CardRecord, TableRow};
use crate::config::{Config, PROGRESS_EVERY};
use crate::error::{BuildError, Result};
use crate::table::{write_parquet, CardTable};

/// Turn loaded records into the in-memory table, one row per record, in order.
pub fn build_table(game_name: &str, cards: &[CardRecord]) -> Result<CardTable> {
    let total = cards.len();
    let mut table = CardTable::with_capacity(total);
    for (idx, card) in cards.iter().enumerate() {
        let row = TableRow::from_record(game_name, idx, card)?;
        debug!(idx, id = ?row.id, "card flattened");
        table.push(row);
        if (idx + 1) % PROGRESS_EVERY == 0 {
            info!("{}/{} cards", idx + 1, total);
        }
    }
    Ok(table)
}

/// Read the card export, flatten every card and write the Parquet table.
///
/// Nothing is written unless every record converts.
#[instrument(level = "info", skip(config), fields(input = %config.input_path.display(), output = %config.output_path.display()))]
pub fn build_and_write(config: &Config) -> Result<CardTable> {
    let start = Instant::now();

    let cards = load_cards(&config.input_path)?;
    info!(cards = cards.len(), "loaded card export");

    let table = build_table(&config.game_name, &cards)?;

    write_parquet(&table, &config.output_path, config.writer_properties()).map_err(|source| {
        BuildError::OutputWriteFailure {
            path: config.output_path.clone(),
            source,
        }
    })?;

    info!(rows = table.len(), elapsed = ?start.elapsed(), "wrote card table");
    Ok(table)
}
