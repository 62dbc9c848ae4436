use std::time::Duration;

use log::debug;
use reqwest::{
    StatusCode,
    blocking::{Client, RequestBuilder},
    header::{ACCEPT, USER_AGENT},
};
use serde::Deserialize;

use super::{CreatedIssue, IssueTracker, TrackerError};
use crate::{core::IssueRecord, credentials::Credentials, vcs::RemoteIdentity};

const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Longest response excerpt kept in a rejection message.
const MAX_MESSAGE_LEN: usize = 200;

/// Files issues through the GitHub REST API.
pub struct GitHubTracker {
    client: Client,
    api_url: String,
    credentials: Credentials,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GitHubTracker {
    pub fn new(
        api_url: &str,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    /// `POST` endpoint for new issues on `identity`.
    pub fn issues_url(&self, identity: &RemoteIdentity) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.api_url, identity.organization, identity.repo_name
        )
    }

    fn authenticate(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.credentials {
            Credentials::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            Credentials::Token(token) => request.bearer_auth(token),
        }
    }
}

impl IssueTracker for GitHubTracker {
    fn create_issue(
        &self,
        identity: &RemoteIdentity,
        issue: &IssueRecord,
    ) -> Result<CreatedIssue, TrackerError> {
        let url = self.issues_url(identity);
        debug!("POST {} \"{}\"", url, issue.title);

        let request = self
            .client
            .post(&url)
            .header(USER_AGENT, concat!("fixit/", env!("CARGO_PKG_VERSION")))
            .header(ACCEPT, GITHUB_ACCEPT)
            .json(issue);
        let response = self
            .authenticate(request)
            .send()
            .map_err(|err| TrackerError::Network(err.to_string()))?;

        let status = response.status();
        let text = response.text().unwrap_or_default();

        if status != StatusCode::CREATED {
            return Err(TrackerError::Rejected {
                status: status.as_u16(),
                message: rejection_message(status, &text),
            });
        }

        Ok(serde_json::from_str(&text).unwrap_or_default())
    }
}

fn rejection_message(status: StatusCode, text: &str) -> String {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(text) {
        return body.message;
    }

    let text = text.trim();
    if text.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown error")
            .to_string();
    }
    text.chars().take(MAX_MESSAGE_LEN).collect()
}
