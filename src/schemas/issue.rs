use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

/// Issue as it appears in a search response.
///
/// `repository_stars` and `repository_language` are only present when the
/// items come from a proxy that already enriched them; GitHub itself only
/// sends `repository_url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueWire {
    pub id: u64,
    #[serde(default)]
    pub number: Option<u64>,
    pub html_url: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_stars: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchIssuesWire {
    pub total_count: u64,
    #[serde(default)]
    pub incomplete_results: bool,
    #[serde(default)]
    pub items: Vec<IssueWire>,
}

/// Error body. GitHub uses `message`, proxies in front of it use `error`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorWire {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorWire {
    pub fn into_message(self) -> Option<String> {
        self.error
            .or(self.message)
            .filter(|msg| !msg.trim().is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryWire {
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViewerWire {
    pub login: String,
}

/// Display-ready issue. Never mutated after it has been received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Issue {
    pub id: u64,
    pub number: u64,
    pub owner_login: String,
    pub repo_name: String,
    pub url: String,
    pub title: String,
    pub body: Option<String>,
    pub labels: Vec<Label>,
    pub star_count: u64,
    pub comments_count: u64,
    pub primary_language: Option<String>,
    pub created_at: String,
    /// Repository API URL still to be consulted for stars and language.
    /// `None` once the item carries its repository metadata.
    #[serde(skip)]
    pub repo_lookup: Option<String>,
}

impl Issue {
    pub fn full_repo_name(&self) -> String {
        format!("{}/{}", self.owner_login, self.repo_name)
    }
}

impl From<IssueWire> for Issue {
    fn from(wire: IssueWire) -> Self {
        // A proxy that sends either field has already resolved the repository
        let enriched = wire.repository_stars.is_some() || wire.repository_language.is_some();
        let segments: Vec<&str> = wire.html_url.split('/').collect();
        let owner_login = segments.get(3).copied().unwrap_or_default().to_string();
        let repo_name = segments.get(4).copied().unwrap_or_default().to_string();
        let number = wire.number.unwrap_or_else(|| {
            segments
                .last()
                .and_then(|last| last.parse().ok())
                .unwrap_or(0)
        });

        Self {
            id: wire.id,
            number,
            owner_login,
            repo_name,
            url: wire.html_url,
            title: wire.title,
            body: wire.body.filter(|body| !body.trim().is_empty()),
            labels: wire.labels,
            star_count: wire.repository_stars.unwrap_or(0),
            comments_count: wire.comments,
            primary_language: wire.repository_language,
            created_at: wire.created_at,
            repo_lookup: wire.repository_url.filter(|_| !enriched),
        }
    }
}
