use anyhow::{Context, Result};
use arkham_cards::config::OUTPUT_PARQUET;
use arkham_cards::table::read_parquet;
use parquet::file::reader::{FileReader, SerializedFileReader};
use std::{env, fs::File, path::PathBuf};

const PREVIEW_ROWS: usize = 5;

/// Print schema, size and the first few rows of a card table.
/// Usage: inspect_cards [PARQUET_FILE]
fn main() -> Result<()> {
    let path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(OUTPUT_PARQUET));

    let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
    let reader = SerializedFileReader::new(file)?;
    let meta = reader.metadata();
    let file_meta = meta.file_metadata();

    println!("=== Card table: {} ===", path.display());
    println!("Created by:     {}", file_meta.created_by().unwrap_or("<unknown>"));
    println!("Total rows:     {}", file_meta.num_rows());
    println!("Row groups:     {}", meta.num_row_groups());
    println!("Size on disk:   {} bytes", std::fs::metadata(&path)?.len());
    println!();

    println!("=== Columns ===");
    for col in file_meta.schema_descr().columns() {
        println!("- {:<12} | {:?}", col.name(), col.physical_type());
    }
    if let Some(rg) = (meta.num_row_groups() > 0).then(|| meta.row_group(0)) {
        println!("Compression:    {:?}", rg.column(0).compression());
    }
    println!();

    println!("=== First {} rows ===", PREVIEW_ROWS);
    for row in read_parquet(&path)?.iter().take(PREVIEW_ROWS) {
        println!(
            "[{} / {}] {}",
            row.expansion.as_deref().unwrap_or("<null>"),
            row.id.as_deref().unwrap_or("<null>"),
            row.text
        );
    }
    Ok(())
}
