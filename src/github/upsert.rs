//! Create-or-update of the per-toolchain report comment
//!
//! The protocol is list, filter, then at most one write:
//! 1. List comments on the issue, up to `max_pages` pages of 100.
//! 2. Keep comments written by the bot whose body contains the toolchain label.
//! 3. No match: create a comment. Otherwise update the oldest match.
//!
//! Comments beyond the scanned pages are invisible to the search, and two
//! runs racing on the same issue can both see no match and both create a
//! comment. There is no transactional upsert on the API side to prevent it.

use log::{debug, info, warn};

use super::api::{CommentApi, CommentId, IssueComment, IssueNumber, PER_PAGE};
use super::error::GitHubError;

/// What the upsert will do (or did)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertAction {
    /// No matching comment exists; a new one is created
    Create,
    /// The oldest matching comment is replaced
    Update(CommentId),
}

/// Result of a completed upsert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// A new comment was created
    Created(CommentId),
    /// An existing comment was updated in place
    Updated(CommentId),
}

impl UpsertOutcome {
    /// Identifier of the comment now holding the report
    pub fn comment_id(&self) -> CommentId {
        match self {
            Self::Created(id) | Self::Updated(id) => *id,
        }
    }
}

/// Keeps at most one bot comment per toolchain up to date
pub struct CommentUpserter<A> {
    api: A,
    bot_login: String,
    max_pages: u32,
}

impl<A: CommentApi> CommentUpserter<A> {
    /// Create an upserter that scans only the first page of comments
    pub fn new(api: A, bot_login: impl Into<String>) -> Self {
        Self {
            api,
            bot_login: bot_login.into(),
            max_pages: 1,
        }
    }

    /// Scan up to `pages` pages when looking for an existing comment
    pub fn with_max_pages(mut self, pages: u32) -> Self {
        self.max_pages = pages.max(1);
        self
    }

    /// Access the underlying API
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Decide between creating and updating, without writing anything
    pub async fn plan(
        &self,
        issue: IssueNumber,
        toolchain: &str,
    ) -> Result<UpsertAction, GitHubError> {
        let matches = self.find_matching(issue, toolchain).await?;

        match matches.as_slice() {
            [] => Ok(UpsertAction::Create),
            [first, rest @ ..] => {
                if !rest.is_empty() {
                    warn!(
                        "Found {} comments for toolchain '{}' on issue {}; updating {} and leaving the rest",
                        matches.len(),
                        toolchain,
                        issue,
                        first.id
                    );
                }
                Ok(UpsertAction::Update(first.id))
            }
        }
    }

    /// Publish `body`, replacing this toolchain's existing comment if any
    pub async fn upsert(
        &self,
        issue: IssueNumber,
        toolchain: &str,
        body: &str,
    ) -> Result<UpsertOutcome, GitHubError> {
        let action = self.plan(issue, toolchain).await?;
        self.apply(action, issue, body).await
    }

    /// Carry out a planned action
    pub async fn apply(
        &self,
        action: UpsertAction,
        issue: IssueNumber,
        body: &str,
    ) -> Result<UpsertOutcome, GitHubError> {
        match action {
            UpsertAction::Create => {
                let id = self.api.create_comment(issue, body).await?;
                info!("Created comment {} on issue {}", id, issue);
                Ok(UpsertOutcome::Created(id))
            }
            UpsertAction::Update(id) => {
                self.api.update_comment(id, body).await?;
                info!("Updated comment {} on issue {}", id, issue);
                Ok(UpsertOutcome::Updated(id))
            }
        }
    }

    async fn find_matching(
        &self,
        issue: IssueNumber,
        toolchain: &str,
    ) -> Result<Vec<IssueComment>, GitHubError> {
        let mut matching = Vec::new();

        for page in 1..=self.max_pages {
            let comments = self.api.list_comments(issue, page).await?;
            let is_last_page = comments.len() < PER_PAGE;
            debug!(
                "Issue {} page {}: {} comment(s)",
                issue,
                page,
                comments.len()
            );

            matching.extend(
                comments
                    .into_iter()
                    .filter(|c| self.is_report_for(c, toolchain)),
            );

            if is_last_page {
                break;
            }
        }

        Ok(matching)
    }

    /// An empty label is a substring of every body, so it never matches
    fn is_report_for(&self, comment: &IssueComment, toolchain: &str) -> bool {
        !toolchain.trim().is_empty()
            && comment.author == self.bot_login
            && comment.body.contains(toolchain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    const BOT: &str = "github-actions[bot]";

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Call {
        List(u32),
        Create(String),
        Update(CommentId, String),
    }

    /// In-memory issue with paginated comments
    struct FakeApi {
        comments: Vec<IssueComment>,
        list_status: Option<u16>,
        create_status: Option<u16>,
        calls: Mutex<Vec<Call>>,
    }

    impl FakeApi {
        fn with_comments(comments: Vec<IssueComment>) -> Self {
            Self {
                comments,
                list_status: None,
                create_status: None,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommentApi for FakeApi {
        async fn list_comments(
            &self,
            issue: IssueNumber,
            page: u32,
        ) -> Result<Vec<IssueComment>, GitHubError> {
            self.calls.lock().unwrap().push(Call::List(page));
            if let Some(status) = self.list_status {
                return Err(GitHubError::ListFailed {
                    issue,
                    status,
                    body: String::new(),
                });
            }
            let start = (page as usize - 1) * PER_PAGE;
            Ok(self
                .comments
                .iter()
                .skip(start)
                .take(PER_PAGE)
                .cloned()
                .collect())
        }

        async fn create_comment(
            &self,
            issue: IssueNumber,
            body: &str,
        ) -> Result<CommentId, GitHubError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Create(body.to_string()));
            if let Some(status) = self.create_status {
                return Err(GitHubError::CreateFailed {
                    issue,
                    status,
                    body: String::new(),
                });
            }
            Ok(CommentId(9000))
        }

        async fn update_comment(&self, comment: CommentId, body: &str) -> Result<(), GitHubError> {
            self.calls
                .lock()
                .unwrap()
                .push(Call::Update(comment, body.to_string()));
            Ok(())
        }
    }

    fn comment(id: u64, author: &str, body: &str) -> IssueComment {
        IssueComment {
            id: CommentId(id),
            author: author.to_string(),
            body: body.to_string(),
        }
    }

    fn filler(count: usize) -> Vec<IssueComment> {
        (0..count)
            .map(|i| comment(i as u64 + 1, "octocat", "lgtm"))
            .collect()
    }

    const ISSUE: IssueNumber = IssueNumber(12);

    #[tokio::test]
    async fn test_creates_when_no_comment_matches() {
        let upserter = CommentUpserter::new(
            FakeApi::with_comments(vec![
                comment(1, "octocat", "report for stable"),
                comment(2, BOT, "report for nightly"),
            ]),
            BOT,
        );

        let outcome = upserter.upsert(ISSUE, "stable", "new body").await.unwrap();

        assert_eq!(outcome, UpsertOutcome::Created(CommentId(9000)));
        assert_eq!(
            upserter.api().calls(),
            vec![Call::List(1), Call::Create("new body".to_string())]
        );
    }

    #[tokio::test]
    async fn test_updates_oldest_matching_comment() {
        let upserter = CommentUpserter::new(
            FakeApi::with_comments(vec![
                comment(10, BOT, "old report **stable**"),
                comment(11, BOT, "another report **stable**"),
            ]),
            BOT,
        );

        let outcome = upserter.upsert(ISSUE, "stable", "fresh").await.unwrap();

        assert_eq!(outcome, UpsertOutcome::Updated(CommentId(10)));
        assert_eq!(outcome.comment_id(), CommentId(10));
        assert_eq!(
            upserter.api().calls(),
            vec![Call::List(1), Call::Update(CommentId(10), "fresh".to_string())]
        );
    }

    #[tokio::test]
    async fn test_ignores_matching_text_from_other_authors() {
        let upserter = CommentUpserter::new(
            FakeApi::with_comments(vec![comment(1, "octocat", "quoting **stable** report")]),
            BOT,
        );
        assert_eq!(
            upserter.plan(ISSUE, "stable").await.unwrap(),
            UpsertAction::Create
        );
    }

    #[tokio::test]
    async fn test_blank_toolchain_never_matches_existing_reports() {
        let upserter = CommentUpserter::new(
            FakeApi::with_comments(vec![comment(
                5,
                BOT,
                "## 🐧 Cargo bloat for toolchain **stable-x86_64-unknown-linux-gnu** 🐧",
            )]),
            BOT,
        );
        assert_eq!(upserter.plan(ISSUE, "").await.unwrap(), UpsertAction::Create);
        assert_eq!(upserter.plan(ISSUE, "  ").await.unwrap(), UpsertAction::Create);
    }

    #[tokio::test]
    async fn test_listing_failure_posts_nothing() {
        let mut api = FakeApi::with_comments(vec![]);
        api.list_status = Some(502);
        let upserter = CommentUpserter::new(api, BOT);

        let err = upserter.upsert(ISSUE, "stable", "body").await.unwrap_err();

        assert!(matches!(err, GitHubError::ListFailed { status: 502, .. }));
        assert!(err.to_string().contains("#12"));
        assert_eq!(upserter.api().calls(), vec![Call::List(1)]);
    }

    #[tokio::test]
    async fn test_create_failure_is_surfaced() {
        let mut api = FakeApi::with_comments(vec![]);
        api.create_status = Some(403);
        let upserter = CommentUpserter::new(api, BOT);

        let err = upserter.upsert(ISSUE, "stable", "body").await.unwrap_err();
        assert!(err.is_auth_failure());
    }

    #[tokio::test]
    async fn test_single_page_misses_comment_beyond_first_hundred() {
        let mut comments = filler(PER_PAGE);
        comments.push(comment(500, BOT, "report **stable**"));
        let upserter = CommentUpserter::new(FakeApi::with_comments(comments), BOT);

        assert_eq!(
            upserter.plan(ISSUE, "stable").await.unwrap(),
            UpsertAction::Create
        );
        assert_eq!(upserter.api().calls(), vec![Call::List(1)]);
    }

    #[tokio::test]
    async fn test_extra_pages_find_later_comment() {
        let mut comments = filler(PER_PAGE);
        comments.push(comment(500, BOT, "report **stable**"));
        let upserter =
            CommentUpserter::new(FakeApi::with_comments(comments), BOT).with_max_pages(3);

        assert_eq!(
            upserter.plan(ISSUE, "stable").await.unwrap(),
            UpsertAction::Update(CommentId(500))
        );
        // Second page is short, so the third is never requested
        assert_eq!(upserter.api().calls(), vec![Call::List(1), Call::List(2)]);
    }

    #[test]
    fn test_max_pages_is_at_least_one() {
        let upserter = CommentUpserter::new(FakeApi::with_comments(vec![]), BOT).with_max_pages(0);
        assert_eq!(upserter.max_pages, 1);
    }
}
