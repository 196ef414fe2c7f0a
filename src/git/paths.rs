//! Repository path and revision checks applied before git is invoked.

use std::path::{Component, Path, PathBuf};

use crate::error::{Result, ViewerError};

/// Resolve a user-supplied repository path.
///
/// Relative paths may not contain `..`; the result is absolute.
pub fn validate_repo_path(repo_path: &str) -> Result<PathBuf> {
    if repo_path.trim().is_empty() {
        return Err(ViewerError::PathRejected("empty path".to_string()));
    }

    let path = Path::new(repo_path);
    if !path.is_absolute() && path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ViewerError::PathRejected("path traversal not allowed".to_string()));
    }

    Ok(std::path::absolute(path)?)
}

/// Fail unless `repo` has a `.git` entry (directory, or file for worktrees).
pub async fn ensure_git_repo(repo: &Path) -> Result<()> {
    let git_dir = repo.join(".git");
    match tokio::fs::try_exists(&git_dir).await {
        Ok(true) => Ok(()),
        _ => Err(ViewerError::NotARepository(repo.to_path_buf())),
    }
}

/// Reject branch names and hashes that git would parse as an option.
pub fn validate_revision(revision: &str) -> Result<()> {
    if revision.is_empty() || revision.starts_with('-') || revision.contains('\0') {
        return Err(ViewerError::InvalidRevision(revision.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_relative_traversal_rejected() {
        let err = validate_repo_path("../other/repo").unwrap_err();
        assert!(matches!(err, ViewerError::PathRejected(_)));
        assert!(validate_repo_path("repos/../../etc").is_err());
    }

    #[test]
    fn test_absolute_path_with_dotdot_allowed() {
        let resolved = validate_repo_path("/srv/repos/../repo").unwrap();
        assert!(resolved.is_absolute());
    }

    #[test]
    fn test_relative_path_made_absolute() {
        let resolved = validate_repo_path("some/repo").unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("some/repo"));
    }

    #[test]
    fn test_dots_inside_names_allowed() {
        assert!(validate_repo_path("my..repo").is_ok());
    }

    #[test]
    fn test_empty_path_rejected() {
        assert!(matches!(validate_repo_path("  "), Err(ViewerError::PathRejected(_))));
    }

    #[test]
    fn test_validate_revision() {
        assert!(validate_revision("ai-loop/demo").is_ok());
        assert!(validate_revision("a1b2c3d").is_ok());
        assert!(matches!(validate_revision("--output=x"), Err(ViewerError::InvalidRevision(_))));
        assert!(validate_revision("").is_err());
    }

    #[tokio::test]
    async fn test_ensure_git_repo() {
        let temp = TempDir::new().unwrap();
        let err = ensure_git_repo(temp.path()).await.unwrap_err();
        assert!(matches!(err, ViewerError::NotARepository(_)));

        std::fs::create_dir(temp.path().join(".git")).unwrap();
        assert!(ensure_git_repo(temp.path()).await.is_ok());
    }

    #[tokio::test]
    async fn test_ensure_git_repo_accepts_worktree_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(".git"), "gitdir: /elsewhere/.git/worktrees/x\n").unwrap();
        assert!(ensure_git_repo(temp.path()).await.is_ok());
    }
}
