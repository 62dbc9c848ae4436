use std::{path::Path, time::Duration};

use anyhow::{Context, Result};
use log::debug;

use crate::{
    cache::IssueCache,
    config::{Config, load_config},
    core::IssueRecord,
    credentials::CredentialSources,
    reporter::{Outcome, Reporter},
    tracker::{GitHubTracker, IssueTracker},
    vcs::{GitRepository, RemoteIdentity, Vcs},
};

/// A working tree and its configuration.
pub struct Workspace {
    pub vcs: Box<dyn Vcs>,
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub config_from_file: bool,
}

impl Workspace {
    /// Open the git working tree containing `path` and load its configuration.
    pub fn open(path: &Path) -> Result<Self> {
        let vcs = GitRepository::discover(path)?;
        let config_result = load_config(path)?;
        debug!("Working tree root: {}", vcs.root().display());

        Ok(Self {
            vcs: Box::new(vcs),
            config: config_result.config,
            config_from_file: config_result.from_file,
        })
    }

    pub fn new(vcs: Box<dyn Vcs>, config: Config) -> Self {
        Self {
            vcs,
            config,
            config_from_file: false,
        }
    }

    pub fn root(&self) -> &Path {
        self.vcs.root()
    }

    /// Load the issue cache named by the configuration.
    pub fn load_cache(&self) -> IssueCache {
        IssueCache::load(self.config.cache_path(self.root()).as_deref())
    }

    /// Identity of the configured default remote.
    pub fn remote_identity(&self) -> Result<RemoteIdentity> {
        let remote = &self.config.default_remote;
        self.vcs
            .remote_identity(remote)
            .with_context(|| format!("Cannot determine where to file issues (remote '{}')", remote))
    }
}

/// Everything needed to file issues, resolved once per run.
pub struct Session {
    pub identity: RemoteIdentity,
    reporter: Reporter<Box<dyn IssueTracker>>,
}

impl Session {
    /// Build a session that files issues on the workspace's GitHub remote.
    ///
    /// Fails before any network activity if the remote identity or the
    /// credentials cannot be determined.
    pub fn open(workspace: &Workspace, sources: &CredentialSources) -> Result<Self> {
        let config = &workspace.config;
        let identity = workspace.remote_identity()?;

        let host = reqwest::Url::parse(&config.api_url)
            .with_context(|| format!("Invalid 'apiUrl': \"{}\"", config.api_url))?
            .host_str()
            .map(str::to_string);
        let credentials = sources.resolve(host.as_deref())?;

        let tracker = GitHubTracker::new(
            &config.api_url,
            credentials,
            Duration::from_secs(config.timeout_secs),
        )
        .context("Failed to create HTTP client")?;

        debug!("Filing issues on {}", identity);
        Ok(Self::new(identity, Box::new(tracker), workspace.load_cache()))
    }

    pub fn new(identity: RemoteIdentity, tracker: Box<dyn IssueTracker>, cache: IssueCache) -> Self {
        Self {
            identity,
            reporter: Reporter::new(tracker, cache),
        }
    }

    pub fn report(&mut self, issue: &IssueRecord) -> Outcome {
        self.reporter.report(&self.identity, issue)
    }

    pub fn cache(&self) -> &IssueCache {
        self.reporter.cache()
    }
}
