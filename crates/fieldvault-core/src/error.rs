use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    #[error("Tool '{tool}' execution failed: {source}")]
    ToolFailed {
        tool: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Helper for creating configuration errors
    ///
    /// # Example
    /// ```
    /// use fieldvault_core::Error;
    /// let err = Error::config_error("Invalid storage backend");
    /// ```
    pub fn config_error(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Helper for creating storage errors
    pub fn storage_error(msg: impl Into<String>) -> Self {
        Error::Storage(msg.into())
    }

    /// Helper for creating schema errors
    pub fn schema_error(msg: impl Into<String>) -> Self {
        Error::Schema(msg.into())
    }
}
