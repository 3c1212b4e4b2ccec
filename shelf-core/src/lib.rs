mod config;
mod container;
pub mod dialect;
mod field;
pub mod template;

pub use config::Config;
pub use container::{Container, IntoIter};
pub use dialect::DialectKind;
pub use field::Field;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Parsing(#[from] sqlparser::parser::ParserError),
    #[error("Config: {0}")]
    Config(String),
    #[error("Unexpected input after field '{0}'")]
    TrailingInput(String),
    #[error("Data '{0}' doesn't exist")]
    MissingData(String),
    #[error("Data '{0}' is not a collection")]
    NotACollection(String),
    #[error("Failed to write template output")]
    Write(#[from] std::fmt::Error),
    #[error("'{0}' is currently unsupported")]
    Unsupported(String),
}
