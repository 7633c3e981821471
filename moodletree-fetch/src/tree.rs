//! File tree assembly.
//!
//! Resolves the user, lists enrolled courses, fetches every course's
//! contents concurrently, and folds the results with
//! [`moodletree_core::fold_tree`].
//!
//! Fetches are polled on the caller's task: requests overlap, nothing runs
//! in parallel. Results keep course-list order regardless of completion
//! order, and the first failure aborts the whole build.

use futures::future::try_join_all;
use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, info, instrument};

use moodletree_core::{fold_tree, Course, CourseContents, FileTree, Token};

use crate::config::ServiceConfig;
use crate::error::FetchError;
use crate::resources::ResourceFetcher;
use crate::transport::Transport;

/// Builds the course → section → file tree for a token.
pub struct TreeBuilder<'a> {
    fetcher: ResourceFetcher<'a>,
}

impl<'a> TreeBuilder<'a> {
    /// Creates a tree builder for the configured site.
    pub fn new(config: &'a ServiceConfig, transport: &'a dyn Transport) -> Self {
        Self {
            fetcher: ResourceFetcher::new(config, transport),
        }
    }

    /// Builds the pruned file tree for the token owner.
    ///
    /// # Errors
    ///
    /// Returns the first error from any call. A single failing course
    /// fails the whole build; no partial tree is returned.
    #[instrument(skip_all)]
    pub async fn get_file_tree(&self, token: &Token) -> Result<FileTree, FetchError> {
        let user_id = self.fetcher.get_user_id(token).await?;
        let courses = self.fetcher.get_course_list(token, user_id).await?;

        let contents = self.fetch_contents(token, &courses).await?;
        let tree = fold_tree(courses.iter().zip(contents.iter()));

        info!(
            courses = courses.len(),
            retained = tree.len(),
            "Built file tree"
        );
        Ok(tree)
    }

    /// Fetches contents for every course, positionally aligned with `courses`.
    async fn fetch_contents(
        &self,
        token: &Token,
        courses: &[Course],
    ) -> Result<Vec<CourseContents>, FetchError> {
        let limit = self.fetcher.config().max_concurrency;
        if limit == 0 {
            debug!(courses = courses.len(), "Fetching course contents");
            let fetches = courses
                .iter()
                .map(|course| self.fetcher.get_course_contents(token, course.id));
            return try_join_all(fetches).await;
        }

        debug!(courses = courses.len(), limit, "Fetching course contents with limit");
        let fetches = courses.iter().enumerate().map(|(index, course)| async move {
            let contents = self.fetcher.get_course_contents(token, course.id).await?;
            Ok::<_, FetchError>((index, contents))
        });

        // Completion order, so a failure surfaces as soon as it happens.
        let mut indexed: Vec<(usize, CourseContents)> =
            stream::iter(fetches).buffer_unordered(limit).try_collect().await?;
        indexed.sort_unstable_by_key(|(index, _)| *index);

        Ok(indexed.into_iter().map(|(_, contents)| contents).collect())
    }
}
