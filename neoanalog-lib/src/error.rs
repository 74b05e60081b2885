use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("stylesheet not found at {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize headless map: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid file pattern `{pattern}`: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("project root {} is not a directory", .0.display())]
    BadRoot(PathBuf),

    #[error("failed to list project files: {0}")]
    Scan(#[from] glob::GlobError),
}

impl Error {
    /// Map a failed read of `path`, keeping "does not exist" distinct.
    pub(crate) fn from_read(path: PathBuf, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            Error::SourceNotFound(path)
        } else {
            Error::Read { path, source }
        }
    }
}
