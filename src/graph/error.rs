//! Store layer error types
//!
//! Transport-independent failures of the graph store.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GraphError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("query execution failed: {0}")]
    Query(String),

    #[error("transaction failed: {0}")]
    Transaction(String),

    #[error("malformed record: {0}")]
    MalformedRecord(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

// Driver errors are flattened to strings so callers stay decoupled from the
// driver's error surface.
impl From<neo4rs::Error> for GraphError {
    fn from(err: neo4rs::Error) -> Self {
        GraphError::Query(err.to_string())
    }
}

impl From<neo4rs::DeError> for GraphError {
    fn from(err: neo4rs::DeError) -> Self {
        GraphError::MalformedRecord(err.to_string())
    }
}
