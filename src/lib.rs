pub mod build;
pub mod card;
pub mod config;
pub mod error;
pub mod table;

pub use build::{build_and_write, build_table};
pub use config::Config;
pub use error::BuildError;
