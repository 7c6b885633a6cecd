#[derive(Debug)]
pub enum StoreError {
    /// The persisted value exists but is not a valid serialized sequence.
    Parse(String),
    /// The storage backend failed to read or write.
    Storage(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Parse(msg) => {
                write!(f, "Malformed persisted data: {}", msg)
            }
            StoreError::Storage(msg) => {
                write!(f, "Storage failure: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        if err.is_io_error() {
            StoreError::Storage(err.to_string())
        } else {
            StoreError::Parse(err.to_string())
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
