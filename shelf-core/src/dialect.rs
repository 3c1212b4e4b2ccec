use serde::Deserialize;
use sqlparser::dialect::{
    AnsiDialect, Dialect, GenericDialect, PostgreSqlDialect, SQLiteDialect,
};

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DialectKind {
    #[default]
    Generic,
    Ansi,
    Sqlite,
    Postgres,
}

impl DialectKind {
    /// The sqlparser dialect used to validate fields for this kind.
    pub fn parser_dialect(&self) -> Box<dyn Dialect> {
        match self {
            DialectKind::Generic => Box::new(GenericDialect {}),
            DialectKind::Ansi => Box::new(AnsiDialect {}),
            DialectKind::Sqlite => Box::new(SQLiteDialect {}),
            DialectKind::Postgres => Box::new(PostgreSqlDialect {}),
        }
    }
}
