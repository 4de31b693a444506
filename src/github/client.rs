use super::error::SearchError;
use super::query::build_search_query;
use super::repo_cache::{RepoCache, RepoMeta};
use crate::schemas::{ErrorWire, Issue, RepositoryWire, SearchIssuesWire, ViewerWire};
use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, warn};

/// Items per search page. Both the client and the controller rely on it.
pub const PAGE_SIZE: u32 = 30;

/// GitHub search only exposes the first 1000 matches of any query.
pub const MAX_REACHABLE_RESULTS: u64 = 1000;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const REQUEST_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub items: Vec<Issue>,
    pub total_count: u64,
}

/// Remote issue search plus the identity check that gates it.
///
/// Implementations may be called from several threads at once and give no
/// ordering guarantee between overlapping calls.
pub trait SearchBackend: Send + Sync {
    fn search(
        &self,
        language: Option<&str>,
        text: Option<&str>,
        page: u32,
    ) -> Result<SearchPage, SearchError>;

    /// Login of the user the credentials belong to.
    fn authenticate(&self) -> Result<String, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub enrich: bool,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            enrich: true,
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

pub struct GitHubClient {
    http: Client,
    config: ClientConfig,
    repo_cache: RepoCache,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("goodfirst/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            config,
            repo_cache: RepoCache::default(),
        })
    }

    pub fn has_token(&self) -> bool {
        self.config.token.is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.api_url.trim_end_matches('/'))
    }

    fn get(&self, url: &str) -> RequestBuilder {
        let request = self
            .http
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28");
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn read_body(response: Response) -> Result<String, SearchError> {
        let status = response.status();
        let body = response.text()?;

        if status.is_success() {
            return Ok(body);
        }

        let message = serde_json::from_str::<ErrorWire>(&body)
            .ok()
            .and_then(ErrorWire::into_message)
            .unwrap_or_else(|| format!("GitHub API responded with {status}"));

        if status == StatusCode::UNAUTHORIZED {
            Err(SearchError::Unauthorized(message))
        } else {
            Err(SearchError::Service(message))
        }
    }

    fn fetch_repository(&self, repository_url: &str) -> Result<RepoMeta, SearchError> {
        let response = self.get(repository_url).send()?;
        let body = Self::read_body(response)?;
        let repo: RepositoryWire = serde_json::from_str(&body)?;
        Ok(RepoMeta {
            stars: repo.stargazers_count,
            language: repo.language,
        })
    }

    /// Fill in stars and language for items that arrived without them.
    /// Lookup failures leave the item untouched.
    fn enrich(&self, items: &mut [Issue]) {
        let mut failed = HashSet::new();

        for issue in items.iter_mut() {
            let Some(repository_url) = issue.repo_lookup.take() else {
                continue;
            };
            if failed.contains(&repository_url) {
                continue;
            }

            let meta = match self.repo_cache.get(&repository_url) {
                Some(meta) => meta,
                None => match self.fetch_repository(&repository_url) {
                    Ok(meta) => {
                        self.repo_cache.put(repository_url.clone(), meta.clone());
                        meta
                    }
                    Err(e) => {
                        warn!("Repository lookup failed for {repository_url}: {e}");
                        failed.insert(repository_url);
                        continue;
                    }
                },
            };

            issue.star_count = meta.stars;
            issue.primary_language = meta.language;
        }
    }
}

impl SearchBackend for GitHubClient {
    fn search(
        &self,
        language: Option<&str>,
        text: Option<&str>,
        page: u32,
    ) -> Result<SearchPage, SearchError> {
        let query = build_search_query(language, text);
        debug!(%query, page, "searching issues");

        let response = self
            .get(&self.endpoint("/search/issues"))
            .query(&[
                ("q", query),
                ("per_page", PAGE_SIZE.to_string()),
                ("page", page.to_string()),
            ])
            .send()?;
        let body = Self::read_body(response)?;

        // Proxies report failures as a 200 with an `error` field
        let value: serde_json::Value = serde_json::from_str(&body)?;
        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return Err(SearchError::Service(message.to_string()));
        }
        let wire: SearchIssuesWire = serde_json::from_value(value)?;

        let mut items: Vec<Issue> = wire.items.into_iter().map(Issue::from).collect();
        if self.config.enrich {
            self.enrich(&mut items);
        }

        Ok(SearchPage {
            items,
            total_count: wire.total_count.min(MAX_REACHABLE_RESULTS),
        })
    }

    fn authenticate(&self) -> Result<String, SearchError> {
        if self.config.token.is_none() {
            return Err(SearchError::Unauthorized(
                "No GitHub token configured".to_string(),
            ));
        }
        let response = self.get(&self.endpoint("/user")).send()?;
        let body = Self::read_body(response)?;
        let viewer: ViewerWire = serde_json::from_str(&body)?;
        Ok(viewer.login)
    }
}
