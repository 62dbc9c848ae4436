//! Version-control access: tracked files and the remote identity.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use git2::{ErrorCode, Repository};
use thiserror::Error;

/// URL prefixes that identify a GitHub remote.
pub const REMOTE_PREFIXES: &[&str] = &[
    "git@github.com:",
    "ssh://git@github.com/",
    "https://github.com/",
    "http://github.com/",
    "https://www.github.com/",
    "git://github.com/",
];

#[derive(Debug, Error)]
pub enum VcsError {
    #[error("not inside a git repository: {path}")]
    NotARepository { path: PathBuf },
    #[error("git repository at {path} has no working tree")]
    BareRepository { path: PathBuf },
    #[error("remote '{0}' not found")]
    RemoteNotFound(String),
    #[error("remote '{0}' has no URL")]
    RemoteWithoutUrl(String),
    #[error("unrecognized remote URL '{0}' (expected a GitHub URL like https://github.com/org/repo.git)")]
    UnrecognizedUrl(String),
    #[error(transparent)]
    Git(#[from] git2::Error),
}

/// The `organization/repo` pair that issues are filed against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteIdentity {
    pub organization: String,
    pub repo_name: String,
}

impl RemoteIdentity {
    /// Parse a remote URL such as `git@github.com:acme/widgets.git`.
    pub fn parse(url: &str) -> Result<Self, VcsError> {
        let unrecognized = || VcsError::UnrecognizedUrl(url.to_string());

        let rest = REMOTE_PREFIXES
            .iter()
            .find_map(|prefix| url.trim().strip_prefix(prefix))
            .ok_or_else(unrecognized)?;

        let rest = rest.trim_end_matches('/');
        let rest = rest.strip_suffix(".git").unwrap_or(rest);
        let (organization, repo_name) = rest.split_once('/').ok_or_else(unrecognized)?;

        if organization.is_empty() || repo_name.is_empty() || repo_name.contains('/') {
            return Err(unrecognized());
        }

        Ok(Self {
            organization: organization.to_string(),
            repo_name: repo_name.to_string(),
        })
    }
}

impl fmt::Display for RemoteIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.organization, self.repo_name)
    }
}

/// What the scanner needs from version control.
pub trait Vcs {
    /// Root of the working tree.
    fn root(&self) -> &Path;
    /// Tracked file paths, relative to [`Vcs::root`].
    fn tracked_files(&self) -> Result<Vec<PathBuf>, VcsError>;
    /// URL of the remote called `name`.
    fn remote_url(&self, name: &str) -> Result<String, VcsError>;

    /// Organization and repository of the remote called `name`.
    fn remote_identity(&self, name: &str) -> Result<RemoteIdentity, VcsError> {
        RemoteIdentity::parse(&self.remote_url(name)?)
    }
}

pub struct GitRepository {
    repo: Repository,
    root: PathBuf,
}

impl GitRepository {
    /// Open the repository containing `path`.
    pub fn discover(path: &Path) -> Result<Self, VcsError> {
        let repo = Repository::discover(path).map_err(|_| VcsError::NotARepository {
            path: path.to_path_buf(),
        })?;
        let root = repo
            .workdir()
            .ok_or_else(|| VcsError::BareRepository {
                path: repo.path().to_path_buf(),
            })?
            .to_path_buf();
        Ok(Self { repo, root })
    }
}

impl Vcs for GitRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn tracked_files(&self) -> Result<Vec<PathBuf>, VcsError> {
        let index = self.repo.index()?;
        let files = index
            .iter()
            .filter_map(|entry| {
                std::str::from_utf8(&entry.path)
                    .ok()
                    .map(PathBuf::from)
            })
            .collect();
        Ok(files)
    }

    fn remote_url(&self, name: &str) -> Result<String, VcsError> {
        let remote = self.repo.find_remote(name).map_err(|err| match err.code() {
            ErrorCode::NotFound | ErrorCode::InvalidSpec => {
                VcsError::RemoteNotFound(name.to_string())
            }
            _ => VcsError::Git(err),
        })?;
        remote
            .url()
            .map(str::to_string)
            .ok_or_else(|| VcsError::RemoteWithoutUrl(name.to_string()))
    }
}
