use std::path::PathBuf;

/// Errors surfaced by the settings layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A stored record exists but does not decode as the requested type.
    #[error("setting {name:?}: {source}")]
    Codec {
        name: String,
        #[source]
        source: flatrecord::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported settings file version {found} in {}", path.display())]
    UnsupportedVersion { path: PathBuf, found: u32 },
}

impl CoreError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| CoreError::Io { path, source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>) -> impl FnOnce(serde_json::Error) -> Self {
        let path = path.into();
        move |source| CoreError::Json { path, source }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
