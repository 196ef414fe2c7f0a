//! Error types for loopview
//!
//! Centralized error handling using thiserror. Only the repository boundary
//! produces errors; commit parsing degrades to defaults instead.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can occur while loading loop history
#[derive(Debug, Error)]
pub enum ViewerError {
    /// Path does not contain a git working tree
    #[error("Not a git repository: {}", .0.display())]
    NotARepository(PathBuf),

    /// Relative path tried to escape the working directory
    #[error("Invalid repository path: {0}")]
    PathRejected(String),

    /// Branch or hash that git would read as an option
    #[error("Invalid revision: {0}")]
    InvalidRevision(String),

    /// Requested iteration label does not exist in the run
    #[error("Iteration \"{0}\" not found")]
    IterationNotFound(String),

    /// git invocation failed or produced unusable output
    #[error("Git error: {0}")]
    Git(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ViewerError {
    /// Returns true if the error was caused by the caller's input rather than the backend
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ViewerError::NotARepository(_) | ViewerError::PathRejected(_) | ViewerError::InvalidRevision(_)
        )
    }
}

/// Result type alias for loopview operations
pub type Result<T> = std::result::Result<T, ViewerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_a_repository_error() {
        let err = ViewerError::NotARepository(PathBuf::from("/tmp/nowhere"));
        assert_eq!(err.to_string(), "Not a git repository: /tmp/nowhere");
    }

    #[test]
    fn test_path_rejected_error() {
        let err = ViewerError::PathRejected("path traversal not allowed".to_string());
        assert_eq!(err.to_string(), "Invalid repository path: path traversal not allowed");
    }

    #[test]
    fn test_iteration_not_found_error() {
        let err = ViewerError::IterationNotFound("4.2".to_string());
        assert_eq!(err.to_string(), "Iteration \"4.2\" not found");
    }

    #[test]
    fn test_git_error() {
        let err = ViewerError::Git("fatal: bad revision 'nope'".to_string());
        assert_eq!(err.to_string(), "Git error: fatal: bad revision 'nope'");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(ViewerError::NotARepository(PathBuf::from(".")).is_client_error());
        assert!(ViewerError::PathRejected("x".to_string()).is_client_error());
        assert!(ViewerError::InvalidRevision("-x".to_string()).is_client_error());
        assert!(!ViewerError::IterationNotFound("1".to_string()).is_client_error());
        assert!(!ViewerError::Git("boom".to_string()).is_client_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "git not found");
        let err: ViewerError = io_err.into();
        assert!(matches!(err, ViewerError::Io(_)));
        assert!(err.to_string().contains("git not found"));
    }
}
