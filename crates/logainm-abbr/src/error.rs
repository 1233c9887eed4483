use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("empty key in {table} table")]
    EmptyKey { table: &'static str },
    #[error("mutation cluster {cluster:?} is {got} characters, expected {want}")]
    ClusterLength {
        cluster: String,
        got: usize,
        want: usize,
    },
    #[error("table parse error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TableError>;
