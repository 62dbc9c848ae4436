//! Tracker credentials.
//!
//! Looked up, in order, from explicit username/password, a token in the
//! environment, and a netrc file. Nothing here is ever written to disk.

use std::{
    env, fmt, fs,
    path::PathBuf,
};

use log::debug;
use thiserror::Error;

/// Overrides the netrc location (defaults to `~/.netrc`).
pub const NETRC_ENV: &str = "FIXIT_NETRC";

/// Environment variables holding a bearer token, checked in order.
pub const TOKEN_ENVS: &[&str] = &["FIXIT_TOKEN", "GITHUB_TOKEN"];

/// netrc machine names tried before the tracker's own host name.
const NETRC_MACHINES: &[&str] = &["github", "github.com"];

#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic { username: String, password: String },
    Token(String),
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Credentials::Token(_) => f.debug_tuple("Token").field(&"<redacted>").finish(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("--username and --password must be given together")]
    IncompleteOverride,
    #[error("failed to read netrc file {path}: {source}")]
    Netrc {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(
        "no credentials found: pass --username/--password, set FIXIT_TOKEN or GITHUB_TOKEN, \
         or add a 'github' machine to your netrc file"
    )]
    NotFound,
}

/// Everything credentials may be resolved from.
#[derive(Debug, Default, Clone)]
pub struct CredentialSources {
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
    pub netrc_path: Option<PathBuf>,
}

impl CredentialSources {
    /// Explicit username/password plus whatever the environment provides.
    pub fn from_env(username: Option<String>, password: Option<String>) -> Self {
        let token = TOKEN_ENVS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .find(|value| !value.trim().is_empty());
        let netrc_path = env::var_os(NETRC_ENV)
            .map(PathBuf::from)
            .or_else(default_netrc_path);

        Self {
            username,
            password,
            token,
            netrc_path,
        }
    }

    /// Resolve credentials for the tracker at `host`.
    pub fn resolve(&self, host: Option<&str>) -> Result<Credentials, CredentialError> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => {
                debug!("Using credentials from the command line");
                return Ok(Credentials::Basic {
                    username: username.clone(),
                    password: password.clone(),
                });
            }
            (None, None) => {}
            _ => return Err(CredentialError::IncompleteOverride),
        }

        if let Some(token) = &self.token {
            debug!("Using token from the environment");
            return Ok(Credentials::Token(token.trim().to_string()));
        }

        if let Some(path) = &self.netrc_path
            && path.exists()
        {
            let content = fs::read_to_string(path).map_err(|source| CredentialError::Netrc {
                path: path.clone(),
                source,
            })?;
            let netrc = Netrc::parse(&content);
            let mut machines: Vec<&str> = NETRC_MACHINES.to_vec();
            machines.extend(host);
            if let Some(credentials) = netrc.lookup(machines) {
                debug!("Using credentials from {}", path.display());
                return Ok(credentials);
            }
        }

        Err(CredentialError::NotFound)
    }
}

/// `~/.netrc` in the user's home directory.
fn default_netrc_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".netrc"))
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct NetrcEntry {
    login: Option<String>,
    password: Option<String>,
}

impl NetrcEntry {
    fn credentials(&self) -> Option<Credentials> {
        Some(Credentials::Basic {
            username: self.login.clone()?,
            password: self.password.clone()?,
        })
    }
}

/// The subset of the netrc format needed here: `machine`, `default`,
/// `login` and `password`. `macdef` bodies are skipped.
#[derive(Debug, Default)]
struct Netrc {
    machines: Vec<(String, NetrcEntry)>,
    default: Option<NetrcEntry>,
}

impl Netrc {
    fn parse(content: &str) -> Self {
        let mut netrc = Netrc::default();
        let mut tokens = tokenize(content).into_iter();
        // Index into `machines`, or `None` for the `default` entry.
        let mut current: Option<Option<usize>> = None;

        while let Some(token) = tokens.next() {
            match token.as_str() {
                "machine" => {
                    let Some(name) = tokens.next() else { break };
                    netrc.machines.push((name, NetrcEntry::default()));
                    current = Some(Some(netrc.machines.len() - 1));
                }
                "default" => {
                    netrc.default = Some(NetrcEntry::default());
                    current = Some(None);
                }
                "login" | "password" | "account" => {
                    let Some(value) = tokens.next() else { break };
                    let entry = match current {
                        Some(Some(idx)) => &mut netrc.machines[idx].1,
                        Some(None) => netrc.default.get_or_insert_with(NetrcEntry::default),
                        None => continue,
                    };
                    match token.as_str() {
                        "login" => entry.login = Some(value),
                        "password" => entry.password = Some(value),
                        _ => {}
                    }
                }
                _ => {}
            }
        }

        netrc
    }

    /// Credentials of the first machine in `names` that has them, falling
    /// back to the `default` entry.
    fn lookup<'a>(&self, names: impl IntoIterator<Item = &'a str>) -> Option<Credentials> {
        names
            .into_iter()
            .find_map(|name| {
                self.machines
                    .iter()
                    .find(|(machine, _)| machine == name)
                    .and_then(|(_, entry)| entry.credentials())
            })
            .or_else(|| self.default.as_ref().and_then(NetrcEntry::credentials))
    }
}

fn tokenize(content: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut in_macdef = false;

    for line in content.lines() {
        if in_macdef {
            in_macdef = !line.trim().is_empty();
            continue;
        }
        if line.trim_start().starts_with('#') {
            continue;
        }

        let mut words = line.split_whitespace();
        while let Some(word) = words.next() {
            if word == "macdef" {
                // The macro name ends the line; its body runs to the next blank line.
                in_macdef = true;
                break;
            }
            tokens.push(word.to_string());
        }
    }

    tokens
}
