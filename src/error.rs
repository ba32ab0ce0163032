#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No statement available")]
    NoStatement,

    #[error("Row {row} has {found} values but the result has {expected} columns")]
    RowShape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigLoad(#[from] confique::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
