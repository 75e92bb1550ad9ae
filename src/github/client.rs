//! GitHub REST client for issue comments, scoped to one repository

use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

use super::api::{CommentApi, CommentId, IssueComment, IssueNumber, RepoId, PER_PAGE};
use super::error::GitHubError;

const API_VERSION: &str = "2022-11-28";

/// GitHub API client scoped to a single repository
#[derive(Clone)]
pub struct GitHubClient {
    http: Client,
    api_url: String,
    repo: RepoId,
}

#[derive(Deserialize)]
struct RawComment {
    id: u64,
    #[serde(default)]
    user: Option<RawUser>,
    #[serde(default)]
    body: Option<String>,
}

#[derive(Deserialize)]
struct RawUser {
    login: String,
}

impl From<RawComment> for IssueComment {
    fn from(raw: RawComment) -> Self {
        Self {
            id: CommentId(raw.id),
            author: raw.user.map(|u| u.login).unwrap_or_default(),
            body: raw.body.unwrap_or_default(),
        }
    }
}

#[derive(Serialize)]
struct CommentBody<'a> {
    body: &'a str,
}

#[derive(Deserialize)]
struct CreatedComment {
    id: u64,
}

impl GitHubClient {
    /// Create a client authenticated with a token
    pub fn new(
        api_url: impl Into<String>,
        token: &str,
        repo: RepoId,
    ) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| GitHubError::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("bloat-report/", env!("CARGO_PKG_VERSION"))),
        );

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            api_url: api_url.into(),
            repo,
        })
    }

    fn issue_comments_url(&self, issue: IssueNumber) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.api_url.trim_end_matches('/'),
            self.repo.owner,
            self.repo.repo,
            issue.0
        )
    }

    fn comment_url(&self, comment: CommentId) -> String {
        format!(
            "{}/repos/{}/{}/issues/comments/{}",
            self.api_url.trim_end_matches('/'),
            self.repo.owner,
            self.repo.repo,
            comment.0
        )
    }
}

/// Split a non-success response into status and body text
async fn failure(response: Response) -> (u16, String) {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    (status, body)
}

impl CommentApi for GitHubClient {
    async fn list_comments(
        &self,
        issue: IssueNumber,
        page: u32,
    ) -> Result<Vec<IssueComment>, GitHubError> {
        let url = self.issue_comments_url(issue);
        debug!("GET {} (page {})", url, page);

        let response = self
            .http
            .get(&url)
            .query(&[("per_page", PER_PAGE.to_string()), ("page", page.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, body) = failure(response).await;
            return Err(GitHubError::ListFailed {
                issue,
                status,
                body,
            });
        }

        let comments: Vec<RawComment> = response.json().await?;
        Ok(comments.into_iter().map(IssueComment::from).collect())
    }

    async fn create_comment(
        &self,
        issue: IssueNumber,
        body: &str,
    ) -> Result<CommentId, GitHubError> {
        let url = self.issue_comments_url(issue);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(&CommentBody { body })
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, body) = failure(response).await;
            return Err(GitHubError::CreateFailed {
                issue,
                status,
                body,
            });
        }

        let created: CreatedComment = response.json().await?;
        Ok(CommentId(created.id))
    }

    async fn update_comment(&self, comment: CommentId, body: &str) -> Result<(), GitHubError> {
        let url = self.comment_url(comment);
        debug!("PATCH {}", url);

        let response = self
            .http
            .patch(&url)
            .json(&CommentBody { body })
            .send()
            .await?;

        if !response.status().is_success() {
            let (status, body) = failure(response).await;
            return Err(GitHubError::UpdateFailed {
                comment,
                status,
                body,
            });
        }

        Ok(())
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("api_url", &self.api_url)
            .field("repo", &self.repo)
            .finish_non_exhaustive()
    }
}
