/// A single cell of a fetched row.
#[derive(Debug, Clone, PartialEq, Eq, Default, derive_more::From, derive_more::Display)]
pub enum Value {
    #[default]
    #[display("null")]
    Null,
    #[display("{_0}")]
    Text(String),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<Option<String>> for Value {
    fn from(value: Option<String>) -> Self {
        value.map_or(Value::Null, Value::Text)
    }
}
