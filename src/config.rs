use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::path::PathBuf;

/// Where the card export is read from, relative to the working directory.
pub const INPUT_JSON: &str = "data_extract/all_cards.json";

/// Where the card table is written, relative to the working directory.
pub const OUTPUT_PARQUET: &str = "arkham_horror_card_data.parquet";

pub const GAME_NAME: &str = "Arkham Horror";

/// Emit a progress line every this many records.
pub const PROGRESS_EVERY: usize = 500;

/// Settings for one conversion run.
#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub game_name: String,
    pub compression: Compression,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(INPUT_JSON),
            output_path: PathBuf::from(OUTPUT_PARQUET),
            game_name: GAME_NAME.to_string(),
            compression: Compression::SNAPPY,
        }
    }
}

impl Config {
    /// Same constants, different files. Used by tests and library callers.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input.into(),
            output_path: output.into(),
            ..Self::default()
        }
    }

    pub fn writer_properties(&self) -> WriterProperties {
        WriterProperties::builder()
            .set_compression(self.compression)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_uses_fixed_paths() {
        let cfg = Config::default();
        assert_eq!(cfg.input_path, PathBuf::from("data_extract/all_cards.json"));
        assert_eq!(
            cfg.output_path,
            PathBuf::from("arkham_horror_card_data.parquet")
        );
        assert_eq!(cfg.game_name, "Arkham Horror");
        assert_eq!(cfg.compression, Compression::SNAPPY);
    }

    #[test]
    fn with_paths_keeps_other_settings() {
        let cfg = Config::with_paths("a.json", "b.parquet");
        assert_eq!(cfg.input_path, PathBuf::from("a.json"));
        assert_eq!(cfg.output_path, PathBuf::from("b.parquet"));
        assert_eq!(cfg.game_name, GAME_NAME);
    }
}
