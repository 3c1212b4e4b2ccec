use std::fmt::Display;

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Container;

/// A value that can be handed to a template.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Data {
    Boolean(bool),
    Integer(i64),
    Text(String),
    List(Container<Data>),
}

impl Data {
    pub fn as_list(&self) -> Option<&Container<Data>> {
        match self {
            Data::List(list) => Some(list),
            _ => None,
        }
    }
}

impl Display for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Data::Boolean(b) => write!(f, "{b}"),
            Data::Integer(i) => write!(f, "{i}"),
            Data::Text(text) => write!(f, "{text}"),
            Data::List(list) => write!(f, "{list}"),
        }
    }
}

impl From<bool> for Data {
    fn from(value: bool) -> Self {
        Data::Boolean(value)
    }
}

impl From<i64> for Data {
    fn from(value: i64) -> Self {
        Data::Integer(value)
    }
}

impl From<&str> for Data {
    fn from(value: &str) -> Self {
        Data::Text(value.to_string())
    }
}

impl From<String> for Data {
    fn from(value: String) -> Self {
        Data::Text(value)
    }
}

impl<T: Into<Data>> From<Vec<T>> for Data {
    fn from(value: Vec<T>) -> Self {
        Data::List(value.into_iter().map(Into::into).collect())
    }
}

impl From<Container<Data>> for Data {
    fn from(value: Container<Data>) -> Self {
        Data::List(value)
    }
}

#[cfg(feature = "json")]
impl TryFrom<serde_json::Value> for Data {
    type Error = crate::Error;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value;

        match value {
            Value::Bool(b) => Ok(Data::Boolean(b)),
            Value::Number(n) => n
                .as_i64()
                .map(Data::Integer)
                .ok_or_else(|| crate::Error::Unsupported(format!("number {n}"))),
            Value::String(s) => Ok(Data::Text(s)),
            Value::Array(values) => values
                .into_iter()
                .map(Data::try_from)
                .collect::<Result<Container<_>, _>>()
                .map(Data::List),
            Value::Null => Err(crate::Error::Unsupported("null".to_string())),
            Value::Object(_) => Err(crate::Error::Unsupported("object".to_string())),
        }
    }
}

/// Named values available while rendering a template.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    data: IndexMap<String, Data>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Data>) {
        self.data.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Data> {
        self.data.get(name)
    }

    /// A copy of this context with one more (or one replaced) binding.
    pub fn with(&self, name: impl Into<String>, value: impl Into<Data>) -> Self {
        let mut context = self.clone();
        context.set(name, value);
        context
    }
}
