use serde::Deserialize;
use serde_json::{Map, Value};
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use tracing::debug;

use crate::error::{BuildError, Result};

/// One card from the export: free-form keys, kept in document order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct CardRecord(Map<String, Value>);

impl CardRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// Read the whole export at `path` and parse it as an array of card objects.
pub fn load_cards<P: AsRef<Path>>(path: P) -> Result<Vec<CardRecord>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| BuildError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut buf = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut buf)
        .map_err(|source| BuildError::InputNotFound {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), bytes = buf.len(), "read card export");

    parse_cards(&buf).map_err(|reason| BuildError::InputMalformed {
        path: path.to_path_buf(),
        reason,
    })
}

/// Parse a JSON document that must be an array of objects. Bytes that are
/// not UTF-8 are a syntax error like any other.
pub fn parse_cards(json: impl AsRef<[u8]>) -> std::result::Result<Vec<CardRecord>, String> {
    let doc: Value = serde_json::from_slice(json.as_ref()).map_err(|e| e.to_string())?;
    let items = match doc {
        Value::Array(items) => items,
        other => {
            return Err(format!(
                "expected a top-level array, found {}",
                kind_name(&other)
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| {
            CardRecord::deserialize(item).map_err(|e| format!("element #{}: {}", idx, e))
        })
        .collect()
}

fn kind_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn keeps_document_key_order() -> Result<()> {
        let cards = parse_cards(r#"[{"zeta":1,"code":"01001","alpha":2}]"#)
            .map_err(anyhow::Error::msg)?;
        let keys: Vec<&str> = cards[0].fields().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "code", "alpha"]);
        Ok(())
    }

    #[test]
    fn parsed_fields_match_the_document() -> Result<()> {
        let cards = parse_cards(r#"[{"code":"01001","pack_name":"Core Set","xp":0}]"#)
            .map_err(anyhow::Error::msg)?;
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].get("pack_name"), Some(&Value::from("Core Set")));
        assert_eq!(cards[0].get("xp").and_then(Value::as_i64), Some(0));
        assert_eq!(cards[0].get("missing"), None);
        Ok(())
    }

    #[test]
    fn rejects_non_array_top_level() {
        let err = parse_cards(r#"{"code":"01001"}"#).unwrap_err();
        assert!(err.contains("top-level array"), "{}", err);
    }

    #[test]
    fn rejects_non_object_element() {
        let err = parse_cards(r#"[{"code":"01001"}, 42]"#).unwrap_err();
        assert!(err.contains("element #1"), "{}", err);
        assert!(err.contains("expected a map"), "{}", err);
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(parse_cards("[{\"code\": ").is_err());
    }

    #[test]
    fn missing_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_cards(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, BuildError::InputNotFound { .. }));
    }

    #[test]
    fn invalid_utf8_is_input_malformed() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(b"[{\"code\":\"\xff\xfe\"}]")?;
        let err = load_cards(tmp.path()).unwrap_err();
        assert!(
            matches!(err, BuildError::InputMalformed { .. }),
            "unexpected error: {}",
            err
        );
        Ok(())
    }

    #[test]
    fn load_from_disk() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(br#"[{"code":"01001"},{"code":"01002"}]"#)?;
        let cards = load_cards(tmp.path())?;
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].get("code"), Some(&Value::from("01002")));
        Ok(())
    }
}
