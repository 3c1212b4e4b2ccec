use std::fmt::Display;

use itertools::Itertools;
use sqlparser::{ast::SelectItem, parser::Parser, tokenizer::Token};
use tracing::debug;

use crate::{Container, Error, dialect::DialectKind};

/// A single entry of a SQL select list, such as `name` or `COUNT(*)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Field {
    expression: String,
}

impl Field {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }

    /// A field that returns the count of all rows.
    pub fn count() -> Self {
        Self::new("COUNT(*)")
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Parses this field as one select list item in the given dialect.
    /// Aliases (`id AS x`) and wildcards are accepted.
    pub fn parse(&self, dialect: DialectKind) -> Result<SelectItem, Error> {
        let parser_dialect = dialect.parser_dialect();
        let mut parser = Parser::new(&*parser_dialect).try_with_sql(&self.expression)?;
        let item = parser.parse_select_item()?;

        // Trailing input means the fragment held more than one item.
        let trailing = parser.peek_token();
        if trailing.token != Token::EOF {
            return Err(Error::TrailingInput(self.expression.clone()));
        }

        debug!(field = %self.expression, ?dialect, "Parsed Field");
        Ok(item)
    }

    /// Joins the fields into a comma separated select list.
    pub fn select_list(fields: &Container<Field>) -> String {
        fields.iter().join(", ")
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}
