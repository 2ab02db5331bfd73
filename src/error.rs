use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("cannot read input {path:?}: {source}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed input {path:?}: {reason}")]
    InputMalformed { path: PathBuf, reason: String },

    #[error("record #{index} has no `{field}` key")]
    MissingField { index: usize, field: &'static str },

    #[error("cannot write output {path:?}: {source}")]
    OutputWriteFailure {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, BuildError>;
