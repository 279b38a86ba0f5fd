//! GitHub issue/PR reference lookup.
//!
//! Queries shaped like `#123` or `nt#123` are treated as references into the
//! pytgcalls GitHub organization: `#n` checks both the pytgcalls and ntgcalls
//! repositories, `nt#n` only ntgcalls. Lookup failures yield no results; they
//! are never surfaced to the user as errors.

use serde::Deserialize;
use std::fmt;
use tracing::warn;

const REPOS: [&str; 2] = ["pytgcalls", "ntgcalls"];

/// A parsed reference query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefQuery {
    pub number: u64,
    /// True for `nt#n`: restrict the lookup to the ntgcalls repository.
    pub ntgcalls_only: bool,
}

/// Parses `#n` / `nt#n` (case-insensitive). Anything else is not a reference.
pub fn parse_ref(query: &str) -> Option<RefQuery> {
    let q = query.trim().to_ascii_lowercase();
    let (ntgcalls_only, digits) = if let Some(rest) = q.strip_prefix("nt#") {
        (true, rest)
    } else if let Some(rest) = q.strip_prefix('#') {
        (false, rest)
    } else {
        return None;
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let number = digits.parse().ok()?;
    Some(RefQuery {
        number,
        ntgcalls_only,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Issue,
    PullRequest,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueKind::Issue => f.write_str("Issue"),
            IssueKind::PullRequest => f.write_str("PR"),
        }
    }
}

/// A resolved issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRef {
    pub repo: String,
    pub number: u64,
    pub title: String,
    pub url: String,
    pub state: String,
    pub kind: IssueKind,
}

#[derive(Deserialize)]
struct IssuePayload {
    title: String,
    html_url: String,
    state: String,
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
}

/// Thin GitHub API client for issue lookups.
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    /// Creates a client against the given API base URL (the real API in
    /// production, a mock server in tests).
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("docbot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolves a reference against the repositories it names. Repositories
    /// that fail or have no such issue are skipped.
    pub async fn resolve(&self, reference: RefQuery) -> Vec<IssueRef> {
        let repos: &[&str] = if reference.ntgcalls_only {
            &REPOS[1..]
        } else {
            &REPOS
        };

        let mut out = Vec::new();
        for repo in repos {
            match self.fetch_issue(repo, reference.number).await {
                Ok(Some(issue)) => out.push(issue),
                Ok(None) => {}
                Err(e) => {
                    warn!(repo, number = reference.number, error = %e, "GitHub lookup failed");
                }
            }
        }
        out
    }

    async fn fetch_issue(&self, repo: &str, number: u64) -> anyhow::Result<Option<IssueRef>> {
        let url = format!(
            "{}/repos/pytgcalls/{}/issues/{}",
            self.base_url, repo, number
        );
        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        let payload: IssuePayload = response.json().await?;
        let kind = if payload.pull_request.is_some() {
            IssueKind::PullRequest
        } else {
            IssueKind::Issue
        };
        Ok(Some(IssueRef {
            repo: repo.to_string(),
            number,
            title: payload.title,
            url: payload.html_url,
            state: payload.state,
            kind,
        }))
    }
}
