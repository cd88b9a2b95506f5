use thiserror::Error;

/// Problem with the shape of a package identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("empty package name")]
    EmptyName,

    #[error("package name '{0}' contains whitespace")]
    Whitespace(String),

    #[error("attribute path has no segments")]
    EmptyPath,
}

#[derive(Error, Debug)]
pub enum DepError {
    #[error("Catalog integrity error: {0}")]
    CatalogIntegrity(String),

    #[error("Malformed identifier: {0}")]
    Shape(#[from] ShapeError),

    #[error("Malformed example for '{name}': {source}")]
    AdapterShape {
        name: String,
        #[source]
        source: ShapeError,
    },

    #[error("Unknown dependency option: {0}")]
    UnknownOption(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DepError {
    /// Attach the owning option name to a shape error from the adapter.
    pub fn for_option(self, name: &str) -> Self {
        match self {
            DepError::Shape(source) => DepError::AdapterShape {
                name: name.to_string(),
                source,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, DepError>;
